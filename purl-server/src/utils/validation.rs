//! Input validation helpers
//!
//! Centralized text length constants and the payload-to-domain checks for
//! the member resource. Every mandatory field must be present and every
//! constrained field in range before a payload becomes a [`NewMember`].

use shared::{Address, AddressPayload, MemberPayload, NewMember};

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Person names: first name, last name
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Short identifiers: phone numbers, PO boxes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Street and city names
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}

// ── Member payload validation ───────────────────────────────────────

/// Check a member payload and convert it into validated domain data.
///
/// Returns the first violated rule. The payload `id` is not inspected
/// here; create ignores it and update matches it against the path.
pub fn validate_member(payload: MemberPayload) -> AppResult<NewMember> {
    let first_name = required(payload.first_name, "firstName")?;
    validate_required_text(&first_name, "firstName", MAX_NAME_LEN)?;

    let last_name = required(payload.last_name, "lastName")?;
    validate_required_text(&last_name, "lastName", MAX_NAME_LEN)?;

    let email = required(payload.email, "email")?;
    validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
    if !email.contains('@') {
        return Err(AppError::validation("email is invalid"));
    }

    let phone_number = required(payload.phone_number, "phoneNumber")?;
    validate_required_text(&phone_number, "phoneNumber", MAX_SHORT_TEXT_LEN)?;

    let birth_date = required(payload.birth_date, "birthDate")?;
    let role = required(payload.role, "role")?;

    let known_stitches = required(payload.known_stitches, "knownStitches")?;
    if known_stitches.is_empty() {
        return Err(AppError::validation("knownStitches must not be empty"));
    }

    let address = validate_address(required(payload.address, "address")?)?;

    Ok(NewMember {
        first_name,
        last_name,
        email,
        phone_number,
        birth_date,
        role,
        known_stitches,
        address,
    })
}

fn validate_address(payload: AddressPayload) -> AppResult<Address> {
    let street = required(payload.street, "address.street")?;
    validate_required_text(&street, "address.street", MAX_ADDRESS_LEN)?;

    let number = required(payload.number, "address.number")?;
    if number <= 0 {
        return Err(AppError::validation("address.number must be positive"));
    }

    validate_optional_text(&payload.po_box, "address.poBox", MAX_SHORT_TEXT_LEN)?;

    let zip_code = required(payload.zip_code, "address.zipCode")?;
    if !(1..=9999).contains(&zip_code) {
        return Err(AppError::validation(
            "address.zipCode must be between 1 and 9999",
        ));
    }

    let city = required(payload.city, "address.city")?;
    validate_required_text(&city, "address.city", MAX_ADDRESS_LEN)?;

    Ok(Address {
        street,
        number,
        po_box: payload.po_box,
        zip_code,
        city,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;
    use shared::{KnittingStitch, Role};

    use super::*;

    fn valid_payload() -> MemberPayload {
        MemberPayload {
            id: None,
            first_name: Some("First name".to_string()),
            last_name: Some("Last name".to_string()),
            email: Some("first.last@email.com".to_string()),
            phone_number: Some("011/12.34.56".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1989, 6, 13),
            role: Some(Role::Member),
            known_stitches: Some(BTreeSet::from([
                KnittingStitch::Cable,
                KnittingStitch::BeginnerLace,
            ])),
            address: Some(AddressPayload {
                street: Some("A Street".to_string()),
                number: Some(123),
                po_box: None,
                zip_code: Some(1234),
                city: Some("City".to_string()),
            }),
        }
    }

    #[test]
    fn test_valid_payload_converts() {
        let member = validate_member(valid_payload()).unwrap();
        assert_eq!(member.first_name, "First name");
        assert_eq!(member.known_stitches.len(), 2);
        assert_eq!(member.address.zip_code, 1234);
    }

    #[test]
    fn test_missing_first_name_is_rejected() {
        let mut payload = valid_payload();
        payload.first_name = None;
        let err = validate_member(payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_last_name_is_rejected() {
        let mut payload = valid_payload();
        payload.last_name = Some("   ".to_string());
        assert!(validate_member(payload).is_err());
    }

    #[test]
    fn test_email_without_at_sign_is_rejected() {
        let mut payload = valid_payload();
        payload.email = Some("first.last.email.com".to_string());
        assert!(validate_member(payload).is_err());
    }

    #[test]
    fn test_empty_stitch_set_is_rejected() {
        let mut payload = valid_payload();
        payload.known_stitches = Some(BTreeSet::new());
        assert!(validate_member(payload).is_err());
    }

    #[test]
    fn test_negative_house_number_is_rejected() {
        let mut payload = valid_payload();
        payload.address.as_mut().unwrap().number = Some(-123);
        assert!(validate_member(payload).is_err());
    }

    #[test]
    fn test_zip_code_bounds() {
        for zip in [-1234, 0, 10_000] {
            let mut payload = valid_payload();
            payload.address.as_mut().unwrap().zip_code = Some(zip);
            assert!(validate_member(payload).is_err(), "zip {zip} should fail");
        }

        for zip in [1, 9999] {
            let mut payload = valid_payload();
            payload.address.as_mut().unwrap().zip_code = Some(zip);
            assert!(validate_member(payload).is_ok(), "zip {zip} should pass");
        }
    }

    #[test]
    fn test_po_box_is_optional() {
        let mut payload = valid_payload();
        payload.address.as_mut().unwrap().po_box = Some("PO 12".to_string());
        let member = validate_member(payload).unwrap();
        assert_eq!(member.address.po_box.as_deref(), Some("PO 12"));
    }

    #[test]
    fn test_missing_address_is_rejected() {
        let mut payload = valid_payload();
        payload.address = None;
        assert!(validate_member(payload).is_err());
    }
}

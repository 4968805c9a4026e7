//! Member Model

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{KnittingStitch, Role};

/// Member entity (会员) - stored record and detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    pub known_stitches: BTreeSet<KnittingStitch>,
    pub address: Address,
}

/// Postal address of a member, no id of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub number: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    pub zip_code: i32,
    pub city: String,
}

/// Validated member data before an id has been assigned
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    pub known_stitches: BTreeSet<KnittingStitch>,
    pub address: Address,
}

impl NewMember {
    /// Attach a server-assigned id, producing the stored record
    pub fn with_id(self, id: i64) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            birth_date: self.birth_date,
            role: self.role,
            known_stitches: self.known_stitches,
            address: self.address,
        }
    }
}

/// Create/update member payload
///
/// Every field is optional at the deserialization layer so missing data is
/// reported by validation instead of a body-parse rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_stitches: Option<BTreeSet<KnittingStitch>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressPayload>,
}

/// Address part of the create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl From<&Member> for MemberPayload {
    fn from(member: &Member) -> Self {
        Self {
            id: Some(member.id),
            first_name: Some(member.first_name.clone()),
            last_name: Some(member.last_name.clone()),
            email: Some(member.email.clone()),
            phone_number: Some(member.phone_number.clone()),
            birth_date: Some(member.birth_date),
            role: Some(member.role),
            known_stitches: Some(member.known_stitches.clone()),
            address: Some(AddressPayload {
                street: Some(member.address.street.clone()),
                number: Some(member.address.number),
                po_box: member.address.po_box.clone(),
                zip_code: Some(member.address.zip_code),
                city: Some(member.address.city.clone()),
            }),
        }
    }
}

/// Member projection for list views
///
/// Detail fields (first/last name, phone, birth date, address) are
/// deliberately absent; `known_stitches` is the count, not the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberListItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub known_stitches: usize,
    pub role: Role,
}

impl From<&Member> for MemberListItem {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: format!("{} {}", member.first_name, member.last_name),
            email: member.email.clone(),
            known_stitches: member.known_stitches.len(),
            role: member.role,
        }
    }
}

/// Wrapper for `GET /members` responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberList {
    pub members: Vec<MemberListItem>,
}

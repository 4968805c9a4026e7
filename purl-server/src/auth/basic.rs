//! HTTP Basic credential parsing and the current-user context

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use shared::Role;

/// Username/password pair decoded from an `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse an `Authorization: Basic <base64(user:pass)>` header value
    ///
    /// The scheme match is case-insensitive. Undecodable payloads and
    /// payloads without a `:` separator yield `None`.
    pub fn from_header(header: &str) -> Option<Self> {
        let (scheme, payload) = header.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(payload.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// 当前用户上下文
///
/// Created by the auth middleware after credential verification and
/// injected into request extensions for handlers and route middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// 用户名
    pub username: String,
    /// 角色
    pub role: Role,
    /// 权限列表
    pub permissions: Vec<String>,
}

impl CurrentUser {
    /// Check whether the user holds the given permission
    ///
    /// Supports wildcard matching:
    /// - `"members:*"` matches `"members:manage"` and friends
    /// - `"all"` grants everything
    pub fn has_permission(&self, permission: &str) -> bool {
        if self.permissions.iter().any(|p| p == "all") {
            return true;
        }

        self.permissions.iter().any(|p| {
            if p == permission {
                return true;
            }
            if let Some(prefix) = p.strip_suffix(":*") {
                permission.starts_with(&format!("{}:", prefix))
            } else {
                false
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        // base64("admin:admin")
        let creds = BasicCredentials::from_header("Basic YWRtaW46YWRtaW4=").unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "admin");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let creds = BasicCredentials::from_header("bAsIc YWRtaW46YWRtaW4=").unwrap();
        assert_eq!(creds.username, "admin");
    }

    #[test]
    fn test_password_may_contain_colons() {
        // base64("user:pass:word")
        let creds = BasicCredentials::from_header("Basic dXNlcjpwYXNzOndvcmQ=").unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pass:word");
    }

    #[test]
    fn test_reject_other_schemes() {
        assert!(BasicCredentials::from_header("Bearer abcdef").is_none());
    }

    #[test]
    fn test_reject_garbage() {
        assert!(BasicCredentials::from_header("Basic").is_none());
        assert!(BasicCredentials::from_header("Basic !!!not-base64!!!").is_none());
        // base64("no-separator")
        assert!(BasicCredentials::from_header("Basic bm8tc2VwYXJhdG9y").is_none());
    }

    #[test]
    fn test_permission_matching() {
        let user = CurrentUser {
            username: "admin".to_string(),
            role: Role::Admin,
            permissions: vec!["members:manage".to_string()],
        };

        assert!(user.has_permission("members:manage"));
        assert!(!user.has_permission("accounts:manage"));
    }

    #[test]
    fn test_wildcard_permission() {
        let user = CurrentUser {
            username: "admin".to_string(),
            role: Role::Admin,
            permissions: vec!["members:*".to_string()],
        };

        assert!(user.has_permission("members:manage"));
        assert!(!user.has_permission("accounts:manage"));
    }

    #[test]
    fn test_all_grants_everything() {
        let user = CurrentUser {
            username: "super-admin".to_string(),
            role: Role::SuperAdmin,
            permissions: vec!["all".to_string()],
        };

        assert!(user.has_permission("members:manage"));
        assert!(user.has_permission("anything:else"));
    }

    #[test]
    fn test_no_permissions_denies() {
        let user = CurrentUser {
            username: "user".to_string(),
            role: Role::Member,
            permissions: vec![],
        };

        assert!(!user.has_permission("members:manage"));
    }
}

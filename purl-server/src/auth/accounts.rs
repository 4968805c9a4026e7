//! Seeded account fixtures
//!
//! The three club accounts are provisioned at startup with argon2id
//! password hashes. There is no account management API; the set is frozen
//! for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use shared::Role;

use crate::auth::basic::{BasicCredentials, CurrentUser};
use crate::auth::permissions::default_permissions;

/// A provisioned account
#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    hash_pass: String,
    pub role: Role,
}

impl Account {
    fn new(username: &str, password: &str, role: Role) -> anyhow::Result<Self> {
        let hash_pass = hash_password(password)
            .with_context(|| format!("failed to hash password for {username}"))?;
        Ok(Self {
            username: username.to_string(),
            hash_pass,
            role,
        })
    }

    /// Verify a password against the stored argon2 hash
    pub fn verify_password(&self, password: &str) -> bool {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let Ok(parsed_hash) = PasswordHash::new(&self.hash_pass) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hash a password using argon2
fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::{
        Argon2,
        password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
    };

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(password_hash.to_string())
}

/// Frozen account registry, shared behind an `Arc`
#[derive(Debug, Clone)]
pub struct AccountStore {
    accounts: Arc<HashMap<String, Account>>,
}

impl AccountStore {
    /// Provision the fixture accounts:
    /// `user`/`password`, `admin`/`admin`, `super-admin`/`super-admin`
    pub fn seeded() -> anyhow::Result<Self> {
        let mut accounts = HashMap::new();
        for account in [
            Account::new("user", "password", Role::Member)?,
            Account::new("admin", "admin", Role::Admin)?,
            Account::new("super-admin", "super-admin", Role::SuperAdmin)?,
        ] {
            accounts.insert(account.username.clone(), account);
        }

        Ok(Self {
            accounts: Arc::new(accounts),
        })
    }

    /// Verify credentials, returning the user context on success
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller.
    pub fn verify(&self, credentials: &BasicCredentials) -> Option<CurrentUser> {
        let account = self.accounts.get(&credentials.username)?;
        if !account.verify_password(&credentials.password) {
            return None;
        }

        Some(CurrentUser {
            username: account.username.clone(),
            role: account.role,
            permissions: default_permissions(account.role),
        })
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

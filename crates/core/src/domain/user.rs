// User & Session Domain Model

use super::error::Result;
use super::validate::{self, MAX_NAME_LEN};
use super::Millis;
use serde::{Deserialize, Serialize};

/// User ID (database row id)
pub type UserId = i64;

/// Shop owner account
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub user_name: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: Millis,
}

impl User {
    /// Public view of the account (never exposes the password hash)
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            user_name: self.user_name.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub user_name: String,
    pub name: String,
}

/// Validated account ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub user_name: String,
    pub name: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: &str, user_name: &str, name: &str, password_hash: String) -> Result<Self> {
        Ok(Self {
            email: validate::email(email)?,
            user_name: validate_user_name(user_name)?,
            name: validate_display_name(name)?,
            password_hash,
        })
    }
}

pub fn validate_user_name(value: &str) -> Result<String> {
    validate::required_text("user_name", value, MAX_NAME_LEN)
}

pub fn validate_display_name(value: &str) -> Result<String> {
    validate::required_text("name", value, MAX_NAME_LEN)
}

/// Server-side session. Only the SHA-256 digest of the token is stored.
#[derive(Debug, Clone)]
pub struct Session {
    pub token_hash: String,
    pub user_id: UserId,
    pub created_at: Millis,
    pub expires_at: Millis,
}

impl Session {
    pub fn is_expired(&self, now: Millis) -> bool {
        now >= self.expires_at
    }
}

// Contact Request Domain Model ("request an account" form)

use super::error::Result;
use super::validate::{self, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use super::{Millis, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub id: RowId,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_at: Millis,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_at: Millis,
}

impl NewContactRequest {
    pub fn new(
        first_name: &str,
        last_name: &str,
        phone: &str,
        email: &str,
        message: &str,
        created_at: Millis,
    ) -> Result<Self> {
        Ok(Self {
            first_name: validate::required_text("first_name", first_name, MAX_NAME_LEN)?,
            last_name: validate::required_text("last_name", last_name, MAX_NAME_LEN)?,
            phone: validate::required_text("phone", phone, 32)?,
            email: validate::email(email)?,
            message: validate::required_text("message", message, MAX_DESCRIPTION_LEN)?,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_request_requires_all_fields() {
        assert!(
            NewContactRequest::new("Ana", "Petrović", "0601234567", "ana@shop.rs", "Hi", 0).is_ok()
        );
        assert!(NewContactRequest::new("Ana", "", "0601234567", "ana@shop.rs", "Hi", 0).is_err());
        assert!(NewContactRequest::new("Ana", "P", "0601234567", "not-an-email", "Hi", 0).is_err());
        assert!(NewContactRequest::new("Ana", "P", "0601234567", "ana@shop.rs", " ", 0).is_err());
    }
}

// Contact Request Use Case (public "request an account" form)

use crate::domain::{ContactRequest, NewContactRequest};
use crate::error::Result;
use crate::port::{ContactRepository, TimeProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            repo,
            time_provider,
        }
    }

    pub async fn submit(&self, form: ContactForm) -> Result<ContactRequest> {
        let request = NewContactRequest::new(
            &form.first_name,
            &form.last_name,
            &form.phone,
            &form.email,
            &form.message,
            self.time_provider.now_millis(),
        )?;

        let stored = self.repo.insert_contact_request(&request).await?;
        info!(contact_id = stored.id, email = %stored.email, "Contact request received");
        Ok(stored)
    }
}

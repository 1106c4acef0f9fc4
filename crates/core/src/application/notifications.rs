// Notification Use Cases

use crate::domain::{Notification, RowId, UserId};
use crate::error::{AppError, Result};
use crate::port::NotificationRepository;
use std::sync::Arc;

pub struct NotificationService {
    repo: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, user_id: UserId) -> Result<Vec<Notification>> {
        self.repo.list_notifications(user_id).await
    }

    pub async fn mark_read(&self, user_id: UserId, id: RowId) -> Result<()> {
        if self.repo.mark_read(user_id, id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Notification", id))
        }
    }
}

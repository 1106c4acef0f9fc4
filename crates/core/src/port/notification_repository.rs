// Notification Repository Port

use crate::domain::{Notification, RowId, UserId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first
    async fn list_notifications(&self, user_id: UserId) -> Result<Vec<Notification>>;

    /// Clear the `is_new` flag; false when no notification of the user matches
    async fn mark_read(&self, user_id: UserId, id: RowId) -> Result<bool>;
}

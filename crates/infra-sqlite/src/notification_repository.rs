// SQLite NotificationRepository Implementation

use crate::error::map_sqlx_error;
use crate::store::SqliteStore;
use async_trait::async_trait;
use tally_core::domain::{Notification, RowId, UserId};
use tally_core::error::Result;
use tally_core::port::NotificationRepository;

#[derive(Debug, sqlx::FromRow)]
struct NotificationRow {
    id: i64,
    user_id: i64,
    message: String,
    is_new: bool,
    created_at: i64,
}

#[async_trait]
impl NotificationRepository for SqliteStore {
    async fn list_notifications(&self, user_id: UserId) -> Result<Vec<Notification>> {
        let rows: Vec<NotificationRow> = sqlx::query_as(
            "SELECT * FROM notifications WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|r| Notification {
                id: r.id,
                user_id: r.user_id,
                message: r.message,
                is_new: r.is_new,
                created_at: r.created_at,
            })
            .collect())
    }

    async fn mark_read(&self, user_id: UserId, id: RowId) -> Result<bool> {
        let result = sqlx::query("UPDATE notifications SET is_new = 0 WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}

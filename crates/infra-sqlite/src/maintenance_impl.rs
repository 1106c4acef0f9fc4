// SQLite Maintenance Implementation
use crate::error::map_sqlx_error;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tally_core::error::{AppError, Result};
use tally_core::port::{Maintenance, MaintenanceStats};
use tracing::info;

/// SQLite maintenance implementation
pub struct SqliteMaintenance {
    pool: SqlitePool,
}

impl SqliteMaintenance {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get DB size in bytes
    async fn get_db_size(&self) -> Result<i64> {
        // Query database page count and page size
        let page_count: i64 = sqlx::query_scalar("PRAGMA page_count")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to get page count: {}", e)))?;

        let page_size: i64 = sqlx::query_scalar("PRAGMA page_size")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to get page size: {}", e)))?;

        Ok(page_count * page_size)
    }

    async fn count(&self, sql: &str) -> Result<i64> {
        sqlx::query_scalar(sql)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[async_trait]
impl Maintenance for SqliteMaintenance {
    async fn gc_expired_sessions(&self, now: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let deleted = result.rows_affected();
        if deleted > 0 {
            info!(deleted_sessions = deleted, "Expired session GC completed");
        }

        Ok(deleted)
    }

    async fn optimize(&self) -> Result<()> {
        sqlx::query("PRAGMA optimize")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Internal(format!("PRAGMA optimize failed: {}", e)))?;
        Ok(())
    }

    async fn get_stats(&self) -> Result<MaintenanceStats> {
        Ok(MaintenanceStats {
            db_size_bytes: self.get_db_size().await?,
            user_count: self.count("SELECT COUNT(*) FROM users").await?,
            session_count: self.count("SELECT COUNT(*) FROM sessions").await?,
            expired_sessions_removed: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_user, setup_store};
    use tally_core::domain::Session;
    use tally_core::port::SessionRepository;

    #[tokio::test]
    async fn test_full_maintenance_removes_expired_sessions() {
        let store = setup_store().await;
        let owner = seed_user(&store, "owner").await;
        for (hash, expires_at) in [("a", 100), ("b", 200), ("c", 10_000)] {
            store
                .insert_session(&Session {
                    token_hash: hash.to_string(),
                    user_id: owner.id,
                    created_at: 0,
                    expires_at,
                })
                .await
                .unwrap();
        }

        let maintenance = SqliteMaintenance::new(store.pool().clone());
        let stats = maintenance.run_full_maintenance(1000).await.unwrap();

        assert_eq!(stats.expired_sessions_removed, 2);
        assert_eq!(stats.session_count, 1);
        assert_eq!(stats.user_count, 1);
        assert!(stats.db_size_bytes > 0);
    }
}

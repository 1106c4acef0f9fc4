// DB Maintenance port
use crate::error::Result;
use async_trait::async_trait;

/// Database maintenance statistics
#[derive(Debug, Clone, Default)]
pub struct MaintenanceStats {
    pub db_size_bytes: i64,
    pub user_count: i64,
    pub session_count: i64,
    pub expired_sessions_removed: u64,
}

/// Database maintenance operations
#[async_trait]
pub trait Maintenance: Send + Sync {
    /// Delete sessions expired at `now`
    ///
    /// # Returns
    /// Number of sessions deleted
    async fn gc_expired_sessions(&self, now: i64) -> Result<u64>;

    /// Let SQLite refresh its query planner statistics
    async fn optimize(&self) -> Result<()>;

    /// Get maintenance statistics
    async fn get_stats(&self) -> Result<MaintenanceStats>;

    /// Run full maintenance (GC + optimize)
    async fn run_full_maintenance(&self, now: i64) -> Result<MaintenanceStats> {
        let removed = self.gc_expired_sessions(now).await?;
        self.optimize().await?;

        let mut stats = self.get_stats().await?;
        stats.expired_sessions_removed = removed;
        Ok(stats)
    }
}

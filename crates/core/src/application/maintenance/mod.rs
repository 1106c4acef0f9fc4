// Maintenance Service
// Scheduled maintenance operations (expired sessions, planner statistics)

use crate::error::Result;
use crate::port::{Maintenance, MaintenanceStats, TimeProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

/// Maintenance scheduler
///
/// Runs periodic maintenance operations in the background
pub struct MaintenanceScheduler {
    maintenance: Arc<dyn Maintenance>,
    time_provider: Arc<dyn TimeProvider>,
    interval: Duration,
}

impl MaintenanceScheduler {
    /// Create a new maintenance scheduler
    ///
    /// # Arguments
    /// * `maintenance` - Maintenance implementation
    /// * `time_provider` - Clock used to decide session expiry
    /// * `interval` - How often to run maintenance
    pub fn new(
        maintenance: Arc<dyn Maintenance>,
        time_provider: Arc<dyn TimeProvider>,
        interval: Duration,
    ) -> Self {
        Self {
            maintenance,
            time_provider,
            interval,
        }
    }

    /// Run maintenance loop (background task)
    ///
    /// Should be spawned in tokio::spawn
    pub async fn run(self) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Maintenance scheduler started"
        );

        let mut tick = interval(self.interval);

        loop {
            tick.tick().await;

            match self.run_now().await {
                Ok(stats) => {
                    info!(
                        db_size_bytes = stats.db_size_bytes,
                        users = stats.user_count,
                        sessions = stats.session_count,
                        expired_sessions_removed = stats.expired_sessions_removed,
                        "Scheduled maintenance completed"
                    );
                }
                Err(e) => {
                    error!(error = ?e, "Scheduled maintenance failed");
                }
            }
        }
    }

    /// Run maintenance immediately (for manual trigger)
    pub async fn run_now(&self) -> Result<MaintenanceStats> {
        self.maintenance
            .run_full_maintenance(self.time_provider.now_millis())
            .await
    }
}

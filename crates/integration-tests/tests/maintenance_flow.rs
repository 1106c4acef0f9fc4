//! Schema migrations and the session maintenance sweep

mod common;

use common::{Harness, PASSWORD, SESSION_TTL_MS};
use std::sync::Arc;
use std::time::Duration;
use tally_core::application::MaintenanceScheduler;
use tally_core::port::TimeProvider;
use tally_infra_sqlite::{
    create_pool, current_version, run_migrations, SqliteMaintenance, SCHEMA_VERSION,
};

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let pool = create_pool("sqlite::memory:").await.unwrap();

    run_migrations(&pool).await.unwrap();
    run_migrations(&pool).await.unwrap();

    assert_eq!(current_version(&pool).await.unwrap(), SCHEMA_VERSION);

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&pool)
            .await
            .unwrap();
    for table in [
        "users",
        "sessions",
        "categories",
        "products",
        "expense_categories",
        "expenses",
        "sales",
        "orders",
        "order_items",
        "notifications",
        "customers",
        "contact_requests",
    ] {
        assert!(tables.iter().any(|t| t == table), "missing table {}", table);
    }
}

#[tokio::test]
async fn test_scheduler_sweeps_expired_sessions() {
    let h = Harness::new().await;
    h.user("mira").await;

    let stale = h.auth.login("mira@shop.rs", PASSWORD).await.unwrap();
    h.clock.set(h.clock.now_millis() + SESSION_TTL_MS / 2);
    let fresh = h.auth.login("mira@shop.rs", PASSWORD).await.unwrap();
    h.clock.set(stale.expires_at + 1);

    let scheduler = MaintenanceScheduler::new(
        Arc::new(SqliteMaintenance::new(h.store.pool().clone())),
        h.clock.clone(),
        Duration::from_secs(3600),
    );
    let stats = scheduler.run_now().await.unwrap();

    assert_eq!(stats.expired_sessions_removed, 1);
    assert_eq!(stats.session_count, 1);
    assert_eq!(stats.user_count, 1);
    assert!(stats.db_size_bytes > 0);

    assert!(h.auth.authenticate(&fresh.token).await.is_ok());
    assert!(h.auth.authenticate(&stale.token).await.is_err());
}

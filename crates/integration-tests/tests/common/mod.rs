//! Shared harness: every service wired onto one in-memory store

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tally_core::application::{
    AccountService, AuthService, CatalogService, CustomerService, ExpenseService,
    NotificationService, OrderService, SalesService, StatsService,
};
use tally_core::domain::UserProfile;
use tally_core::port::time_provider::FixedTimeProvider;
use tally_infra_sqlite::{create_pool, run_migrations, SqliteStore};
use tally_infra_system::{Argon2PasswordHasher, RandomTokenProvider};

pub const SESSION_TTL_MS: i64 = 60 * 60 * 1000;
pub const PASSWORD: &str = "till-password";

/// Epoch millis of a UTC wall-clock time
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
        .timestamp_millis()
}

pub struct Harness {
    pub store: Arc<SqliteStore>,
    pub clock: Arc<FixedTimeProvider>,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub expenses: ExpenseService,
    pub sales: SalesService,
    pub orders: OrderService,
    pub stats: StatsService,
    pub account: AccountService,
    pub notifications: NotificationService,
    pub customers: CustomerService,
}

impl Harness {
    pub async fn new() -> Self {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();

        let store = Arc::new(SqliteStore::new(pool));
        let clock = Arc::new(FixedTimeProvider::new(at(2025, 2, 10, 12, 0)));

        Self {
            auth: AuthService::new(
                store.clone(),
                store.clone(),
                Arc::new(Argon2PasswordHasher::new()),
                Arc::new(RandomTokenProvider::new()),
                clock.clone(),
                SESSION_TTL_MS,
            ),
            catalog: CatalogService::new(store.clone()),
            expenses: ExpenseService::new(store.clone(), clock.clone()),
            sales: SalesService::new(store.clone(), clock.clone()),
            orders: OrderService::new(store.clone(), store.clone(), clock.clone()),
            stats: StatsService::new(store.clone(), store.clone()),
            account: AccountService::new(store.clone()),
            notifications: NotificationService::new(store.clone()),
            customers: CustomerService::new(store.clone()),
            store,
            clock,
        }
    }

    pub async fn user(&self, handle: &str) -> UserProfile {
        self.auth
            .provision_user(&format!("{}@shop.rs", handle), handle, handle, PASSWORD)
            .await
            .unwrap()
    }
}

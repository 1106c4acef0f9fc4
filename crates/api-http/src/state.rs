// Shared handler state

use crate::rate_limiter::RateLimiter;
use std::sync::Arc;
use tally_core::application::{
    AccountService, AuthService, CatalogService, ContactService, CustomerService, ExpenseService,
    NotificationService, OrderService, SalesService, StatsService,
};
use tally_core::port::{
    CatalogRepository, ContactRepository, CustomerRepository, ExpenseRepository,
    NotificationRepository, OrderRepository, PasswordHasher, SaleRepository, SessionRepository,
    TimeProvider, TokenProvider, TransactionalLedger, UserRepository,
};

/// Session and login policy
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub ttl_ms: i64,
    /// Mark the session cookie `Secure` (set when served over HTTPS)
    pub cookie_secure: bool,
    pub login_rate_burst: u32,
    pub login_rate_per_sec: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_ms: 7 * 24 * 60 * 60 * 1000,
            cookie_secure: false,
            login_rate_burst: 20,
            login_rate_per_sec: 5,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub catalog: Arc<CatalogService>,
    pub expenses: Arc<ExpenseService>,
    pub sales: Arc<SalesService>,
    pub orders: Arc<OrderService>,
    pub stats: Arc<StatsService>,
    pub account: Arc<AccountService>,
    pub notifications: Arc<NotificationService>,
    pub customers: Arc<CustomerService>,
    pub contact: Arc<ContactService>,
    pub login_limiter: Arc<RateLimiter>,
    pub cookie_secure: bool,
}

impl AppState {
    /// Wire every service onto one store implementing all repository ports
    pub fn from_store<S>(
        store: Arc<S>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        time_provider: Arc<dyn TimeProvider>,
        settings: &SessionSettings,
    ) -> Self
    where
        S: UserRepository
            + SessionRepository
            + CatalogRepository
            + ExpenseRepository
            + SaleRepository
            + TransactionalLedger
            + OrderRepository
            + NotificationRepository
            + CustomerRepository
            + ContactRepository
            + 'static,
    {
        Self {
            auth: Arc::new(AuthService::new(
                store.clone(),
                store.clone(),
                hasher,
                tokens,
                time_provider.clone(),
                settings.ttl_ms,
            )),
            catalog: Arc::new(CatalogService::new(store.clone())),
            expenses: Arc::new(ExpenseService::new(store.clone(), time_provider.clone())),
            sales: Arc::new(SalesService::new(store.clone(), time_provider.clone())),
            orders: Arc::new(OrderService::new(
                store.clone(),
                store.clone(),
                time_provider.clone(),
            )),
            stats: Arc::new(StatsService::new(store.clone(), store.clone())),
            account: Arc::new(AccountService::new(store.clone())),
            notifications: Arc::new(NotificationService::new(store.clone())),
            customers: Arc::new(CustomerService::new(store.clone())),
            contact: Arc::new(ContactService::new(store, time_provider)),
            login_limiter: Arc::new(RateLimiter::new(
                settings.login_rate_burst,
                settings.login_rate_per_sec,
            )),
            cookie_secure: settings.cookie_secure,
        }
    }
}

// Port Layer - Interfaces for external dependencies

pub mod catalog_repository;
pub mod customer_repository;
pub mod ledger_repository;
pub mod maintenance;
pub mod notification_repository;
pub mod order_repository;
pub mod password_hasher;
pub mod time_provider; // For deterministic testing
pub mod token_provider;
pub mod transaction;
pub mod user_repository;

// Re-exports
pub use catalog_repository::CatalogRepository;
pub use customer_repository::{ContactRepository, CustomerRepository};
pub use ledger_repository::{ExpenseRepository, SaleRepository};
pub use maintenance::{Maintenance, MaintenanceStats};
pub use notification_repository::NotificationRepository;
pub use order_repository::OrderRepository;
pub use password_hasher::PasswordHasher;
pub use time_provider::TimeProvider;
pub use token_provider::TokenProvider;
pub use transaction::{LedgerTransaction, Transaction, TransactionalLedger};
pub use user_repository::{SessionRepository, UserRepository};

// Tally Infrastructure - SQLite Adapter
// Implements every repository port, TransactionalLedger and Maintenance

mod catalog_repository;
mod connection;
mod customer_repository;
mod error;
mod ledger_repository;
mod maintenance_impl;
mod migration;
mod notification_repository;
mod order_repository;
mod store;
mod transaction;
mod user_repository;

pub use connection::create_pool;
pub use maintenance_impl::SqliteMaintenance;
pub use migration::{current_version, run_migrations, SCHEMA_VERSION};
pub use store::SqliteStore;
pub use transaction::SqliteLedgerTransaction;

#[cfg(test)]
mod test_support;

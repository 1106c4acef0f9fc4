// Application Layer - Use Cases and Business Logic

pub mod account;
pub mod auth;
pub mod catalog;
pub mod contact;
pub mod customers;
pub mod expenses;
pub mod maintenance;
pub mod notifications;
pub mod orders;
pub mod sales;
pub mod stats;

// Re-exports
pub use account::AccountService;
pub use auth::{AuthService, LoginOutcome};
pub use catalog::CatalogService;
pub use contact::{ContactForm, ContactService};
pub use customers::CustomerService;
pub use expenses::ExpenseService;
pub use maintenance::MaintenanceScheduler;
pub use notifications::NotificationService;
pub use orders::{CreateOrderRequest, OrderProductLine, OrderService};
pub use sales::{SaleLine, SalesService};
pub use stats::{MonthlyStats, StatsService};

// Domain Layer - Pure business logic and entities

pub mod catalog;
pub mod contact;
pub mod customer;
pub mod error;
pub mod expense;
pub mod notification;
pub mod order;
pub mod period;
pub mod sale;
pub mod user;
pub mod validate;

// Re-exports
pub use catalog::{Category, CategoryWithProducts, NewProduct, Product, ProductSummary};
pub use contact::{ContactRequest, NewContactRequest};
pub use customer::{Customer, CustomerProfile, Demographics, NewCustomer};
pub use error::DomainError;
pub use expense::{Expense, ExpenseCategory, NewExpense};
pub use notification::Notification;
pub use order::{NewOrder, NewOrderLine, Order, OrderItem};
pub use period::MonthPeriod;
pub use sale::{NewSale, Sale, SaleWithProduct};
pub use user::{NewUser, Session, User, UserId, UserProfile};

/// Database-assigned row id
pub type RowId = i64;

/// Epoch milliseconds (UTC)
pub type Millis = i64;

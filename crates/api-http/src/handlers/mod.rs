//! Route handlers, one module per API area

pub mod account;
pub mod auth;
pub mod catalog;
pub mod contact;
pub mod customers;
pub mod expenses;
pub mod health;
pub mod notifications;
pub mod orders;
pub mod sales;
pub mod stats;

use crate::error::ApiError;

/// Unknown routes get the JSON envelope too
pub async fn fallback() -> ApiError {
    ApiError::not_found("No such route")
}

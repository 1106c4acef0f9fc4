//! HTTP API Layer
//!
//! JSON endpoints for Tally over axum. Every `/api` route except login and
//! the contact form requires a session.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod rate_limiter;
pub mod router;
pub mod server;
pub mod session;
pub mod state;
pub mod types;

pub use router::build_router;
pub use server::{HttpServer, HttpServerConfig};
pub use state::{AppState, SessionSettings};

#[cfg(test)]
mod test_support;

// Tally Infrastructure - System Adapters
// Implements: PasswordHasher, TokenProvider

pub mod password_hasher_impl;
pub mod token_provider_impl;

pub use password_hasher_impl::Argon2PasswordHasher;
pub use token_provider_impl::RandomTokenProvider;

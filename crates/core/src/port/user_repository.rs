// User & Session Repository Ports

use crate::domain::{Millis, NewUser, Session, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user (Conflict on duplicate email or user name)
    async fn insert(&self, user: &NewUser, created_at: Millis) -> Result<User>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Returns the updated user, None when it does not exist
    async fn update_name(&self, id: UserId, name: &str) -> Result<Option<User>>;

    /// Returns the updated user, None when it does not exist
    async fn update_user_name(&self, id: UserId, user_name: &str) -> Result<Option<User>>;
}

/// Repository interface for server-side sessions
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert_session(&self, session: &Session) -> Result<()>;

    async fn find_session(&self, token_hash: &str) -> Result<Option<Session>>;

    async fn delete_session(&self, token_hash: &str) -> Result<()>;

    /// Delete sessions expired at `now`, returns how many were removed
    async fn delete_expired_sessions(&self, now: Millis) -> Result<u64>;
}

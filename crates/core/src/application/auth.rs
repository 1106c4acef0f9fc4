// Authentication Use Cases (login, logout, session lookup, provisioning)

use crate::domain::{NewUser, Session, User, UserProfile};
use crate::error::{AppError, Result};
use crate::port::{PasswordHasher, SessionRepository, TimeProvider, TokenProvider, UserRepository};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// Minimum accepted password length at provisioning time
pub const MIN_PASSWORD_LEN: usize = 8;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Hashed once and verified against when the email is unknown
const DUMMY_PASSWORD: &str = "tally-dummy-password";

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    /// Raw session token; only the client keeps it
    #[serde(skip)]
    pub token: String,
    pub user: UserProfile,
    pub expires_at: i64,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
    time_provider: Arc<dyn TimeProvider>,
    session_ttl_ms: i64,
    dummy_hash: OnceCell<String>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
        time_provider: Arc<dyn TimeProvider>,
        session_ttl_ms: i64,
    ) -> Self {
        Self {
            users,
            sessions,
            hasher,
            tokens,
            time_provider,
            session_ttl_ms,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Check credentials and open a session.
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let email = email.trim().to_lowercase();
        let invalid = || AppError::Unauthorized(INVALID_CREDENTIALS.to_string());

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => {
                let hash = user.password_hash.clone();
                if !self.verify_password(password, hash).await {
                    return Err(invalid());
                }
                user
            }
            None => {
                // Same hashing work as a wrong password
                let hash = self.dummy_hash().await?.to_string();
                self.verify_password(password, hash).await;
                return Err(invalid());
            }
        };

        let token = self.tokens.generate_token();
        let now = self.time_provider.now_millis();
        let session = Session {
            token_hash: self.tokens.digest(&token),
            user_id: user.id,
            created_at: now,
            expires_at: now.saturating_add(self.session_ttl_ms),
        };
        self.sessions.insert_session(&session).await?;

        info!(user_id = user.id, "User logged in");

        Ok(LoginOutcome {
            token,
            user: user.profile(),
            expires_at: session.expires_at,
        })
    }

    /// Close the session (idempotent)
    pub async fn logout(&self, token: &str) -> Result<()> {
        self.sessions
            .delete_session(&self.tokens.digest(token))
            .await
    }

    /// Resolve the user behind a session token
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let unauthorized = || AppError::Unauthorized("Not logged in".to_string());

        let token_hash = self.tokens.digest(token);
        let session = self
            .sessions
            .find_session(&token_hash)
            .await?
            .ok_or_else(unauthorized)?;

        if session.is_expired(self.time_provider.now_millis()) {
            debug!(user_id = session.user_id, "Session expired");
            self.sessions.delete_session(&token_hash).await?;
            return Err(unauthorized());
        }

        self.users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(unauthorized)
    }

    /// Create an account (operator bootstrap; there is no self-registration)
    pub async fn provision_user(
        &self,
        email: &str,
        user_name: &str,
        name: &str,
        password: &str,
    ) -> Result<UserProfile> {
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let password_hash = self.hash_password(password).await?;
        let new_user = NewUser::new(email, user_name, name, password_hash)?;
        let user = self
            .users
            .insert(&new_user, self.time_provider.now_millis())
            .await?;

        info!(user_id = user.id, email = %user.email, "User provisioned");
        Ok(user.profile())
    }

    /// Provision the user unless the email is already registered
    pub async fn ensure_user(
        &self,
        email: &str,
        user_name: &str,
        name: &str,
        password: &str,
    ) -> Result<UserProfile> {
        match self.users.find_by_email(&email.trim().to_lowercase()).await? {
            Some(user) => Ok(user.profile()),
            None => self.provision_user(email, user_name, name, password).await,
        }
    }

    /// Argon2 is CPU and memory heavy; keep it off the async workers
    async fn hash_password(&self, password: &str) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: String) -> bool {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        match tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "Password verification task failed");
                false
            }
        }
    }

    async fn dummy_hash(&self) -> Result<&str> {
        self.dummy_hash
            .get_or_try_init(|| self.hash_password(DUMMY_PASSWORD))
            .await
            .map(String::as_str)
    }
}

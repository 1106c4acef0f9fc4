// Account Use Cases (profile changes of the session user)

use crate::domain::user::{validate_display_name, validate_user_name};
use crate::domain::{UserId, UserProfile};
use crate::error::{AppError, Result};
use crate::port::UserRepository;
use std::sync::Arc;

pub struct AccountService {
    users: Arc<dyn UserRepository>,
}

impl AccountService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn change_name(&self, user_id: UserId, name: &str) -> Result<UserProfile> {
        let name = validate_display_name(name)?;
        self.users
            .update_name(user_id, &name)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AppError::not_found("User", user_id))
    }

    /// Conflict when the user name is taken
    pub async fn change_user_name(&self, user_id: UserId, user_name: &str) -> Result<UserProfile> {
        let user_name = validate_user_name(user_name)?;
        self.users
            .update_user_name(user_id, &user_name)
            .await?
            .map(|user| user.profile())
            .ok_or_else(|| AppError::not_found("User", user_id))
    }
}

// Notification Domain Model

use super::user::UserId;
use super::{Millis, RowId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RowId,
    pub user_id: UserId,
    pub message: String,
    pub is_new: bool,
    pub created_at: Millis,
}

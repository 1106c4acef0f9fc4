use crate::error::ApiResult;
use crate::extract::ApiPath;
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::MessageResponse;
use axum::extract::State;
use axum::Json;
use tally_core::domain::{Notification, RowId};

pub async fn list_notifications(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<Notification>>> {
    Ok(Json(state.notifications.list(session.user.id).await?))
}

pub async fn mark_read(
    State(state): State<AppState>,
    session: AuthSession,
    ApiPath(id): ApiPath<RowId>,
) -> ApiResult<Json<MessageResponse>> {
    state.notifications.mark_read(session.user.id, id).await?;
    Ok(Json(MessageResponse {
        message: "Notification marked as read".to_string(),
    }))
}

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::{NameRequest, UserNameRequest};
use axum::extract::State;
use axum::Json;
use tally_core::domain::UserProfile;

pub async fn change_name(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<NameRequest>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(
        state.account.change_name(session.user.id, &req.name).await?,
    ))
}

pub async fn change_user_name(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<UserNameRequest>,
) -> ApiResult<Json<UserProfile>> {
    Ok(Json(
        state
            .account
            .change_user_name(session.user.id, &req.user_name)
            .await?,
    ))
}

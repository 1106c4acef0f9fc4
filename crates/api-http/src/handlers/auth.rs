use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::session::{removal_cookie, session_cookie, session_token, AuthSession};
use crate::state::AppState;
use crate::types::{LoginRequest, LoginResponse};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use tally_core::domain::UserProfile;
use tracing::warn;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    if !state.login_limiter.check().await {
        warn!("Login rate limit exceeded");
        return Err(ApiError::rate_limited());
    }

    let outcome = state.auth.login(&req.email, &req.password).await?;
    let jar = jar.add(session_cookie(outcome.token.clone(), state.cookie_secure));

    Ok((
        jar,
        Json(LoginResponse {
            token: outcome.token,
            user: outcome.user,
            expires_at: outcome.expires_at,
        }),
    ))
}

/// Idempotent: succeeds with or without a live session
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> ApiResult<(CookieJar, StatusCode)> {
    if let Some(token) = session_token(&headers) {
        state.auth.logout(&token).await?;
    }
    Ok((jar.remove(removal_cookie()), StatusCode::NO_CONTENT))
}

pub async fn me(session: AuthSession) -> Json<UserProfile> {
    Json(session.user.profile())
}

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::session::AuthSession;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::application::SaleLine;
use tally_core::domain::Sale;

/// Body is the bare array of lines from the point-of-sale page
pub async fn record_sales(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(lines): ApiJson<Vec<SaleLine>>,
) -> ApiResult<(StatusCode, Json<Vec<Sale>>)> {
    let sales = state.sales.record_sales(session.user.id, lines).await?;
    Ok((StatusCode::CREATED, Json(sales)))
}

use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::MonthQuery;
use axum::extract::State;
use axum::Json;
use tally_core::application::MonthlyStats;

pub async fn monthly_stats(
    State(state): State<AppState>,
    session: AuthSession,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<MonthlyStats>> {
    let period = query.period()?;
    Ok(Json(state.stats.monthly_stats(session.user.id, period).await?))
}

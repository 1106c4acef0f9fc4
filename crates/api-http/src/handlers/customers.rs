use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::CustomerRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::domain::{CustomerProfile, Demographics};

pub async fn list_customers(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<CustomerProfile>>> {
    Ok(Json(state.customers.list_profiles(session.user.id).await?))
}

pub async fn add_customer(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<CustomerRequest>,
) -> ApiResult<(StatusCode, Json<CustomerProfile>)> {
    let customer = state
        .customers
        .add_customer(
            session.user.id,
            req.gender.as_deref(),
            req.age_group.as_deref(),
            req.city.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(customer.profile())))
}

pub async fn demographics(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Demographics>> {
    Ok(Json(state.customers.demographics(session.user.id).await?))
}

use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::OrdersQuery;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::application::CreateOrderRequest;
use tally_core::domain::Order;

pub async fn list_orders(
    State(state): State<AppState>,
    session: AuthSession,
    ApiQuery(query): ApiQuery<OrdersQuery>,
) -> ApiResult<Json<Vec<Order>>> {
    let date = query.date.as_deref().filter(|d| !d.trim().is_empty());
    Ok(Json(state.orders.list_orders(session.user.id, date).await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let order = state.orders.create_order(session.user.id, req).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

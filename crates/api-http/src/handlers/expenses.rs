use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiQuery};
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::{ExpenseRequest, MonthQuery, NameRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::domain::{Expense, ExpenseCategory};

pub async fn list_categories(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<ExpenseCategory>>> {
    Ok(Json(state.expenses.list_categories(session.user.id).await?))
}

pub async fn add_category(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<NameRequest>,
) -> ApiResult<(StatusCode, Json<ExpenseCategory>)> {
    let category = state.expenses.add_category(session.user.id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_expenses(
    State(state): State<AppState>,
    session: AuthSession,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let period = query.period()?;
    Ok(Json(
        state.expenses.list_expenses(session.user.id, period).await?,
    ))
}

pub async fn add_expense(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<ExpenseRequest>,
) -> ApiResult<(StatusCode, Json<Expense>)> {
    let expense = state
        .expenses
        .add_expense(session.user.id, req.amount, &req.description, req.category_id)
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

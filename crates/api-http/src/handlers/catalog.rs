use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::session::AuthSession;
use crate::state::AppState;
use crate::types::{NameRequest, ProductRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::domain::{Category, CategoryWithProducts, Product, RowId};

pub async fn list_categories(
    State(state): State<AppState>,
    session: AuthSession,
) -> ApiResult<Json<Vec<CategoryWithProducts>>> {
    Ok(Json(state.catalog.list_categories(session.user.id).await?))
}

pub async fn add_category(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<NameRequest>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.catalog.add_category(session.user.id, &req.name).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn add_product(
    State(state): State<AppState>,
    session: AuthSession,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = state
        .catalog
        .add_product(session.user.id, req.category_id, &req.name, req.price)
        .await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    session: AuthSession,
    ApiPath(id): ApiPath<RowId>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> ApiResult<Json<Product>> {
    let product = state
        .catalog
        .update_product(session.user.id, id, req.category_id, &req.name, req.price)
        .await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    session: AuthSession,
    ApiPath(id): ApiPath<RowId>,
) -> ApiResult<StatusCode> {
    state.catalog.delete_product(session.user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

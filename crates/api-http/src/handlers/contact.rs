use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::MessageResponse;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tally_core::application::ContactForm;

/// Public "request an account" form
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.contact.submit(form).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Request received".to_string(),
        }),
    ))
}

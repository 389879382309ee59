use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ChatReply,
    normalize,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use marketdesk_upstream::GenerateRequest;
use serde_json::Value;

pub const INVALID_PROMPT: &str = "Invalid prompt input.";

#[derive(serde::Deserialize)]
struct ChatBody {
    #[serde(default)]
    prompt: Value,
}

/// Accept only a string prompt with visible content. Returns it untrimmed.
fn validate_prompt(prompt: &Value) -> ApiResult<&str> {
    match prompt {
        Value::String(text) if !text.trim().is_empty() => Ok(text.as_str()),
        _ => Err(ApiError::Validation(INVALID_PROMPT.to_string())),
    }
}

async fn chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> ApiResult<Json<ChatReply>> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!("Rejected chat body: {}", e);
        ApiError::Validation(INVALID_PROMPT.to_string())
    })?;
    let prompt = validate_prompt(&body.prompt)?;

    let outcome = state
        .text_generator
        .call(GenerateRequest::new(prompt))
        .await;
    normalize::chat(state.text_generator.id(), outcome).map(Json)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;
use tokio::task;

pub const QUOTES_UNAVAILABLE: &str = "Failed to read quotes data";

async fn get_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<Value>> {
    let reader = state.quote_reader.clone();
    let loaded = task::spawn_blocking(move || reader.load())
        .await
        .map_err(|e| {
            tracing::error!(
                "Quotes read task failed for {}: {}",
                state.quote_reader.path().display(),
                e
            );
            ApiError::DataUnavailable(QUOTES_UNAVAILABLE.to_string())
        })?;

    match loaded {
        Ok(quotes) => Ok(Json(quotes)),
        Err(e) => {
            tracing::error!("Error reading quotes file: {}", e);
            Err(ApiError::DataUnavailable(QUOTES_UNAVAILABLE.to_string()))
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quotes", get(get_quotes))
}

//! Turns adapter outcomes into client responses.
//!
//! Every outcome lands in exactly one class: a route-specific success value,
//! [`ApiError::NotFound`] when the upstream had no data, or
//! [`ApiError::Upstream`] with a generic message when the call failed or the
//! payload was unusable. Upstream causes are logged here, tagged with the
//! adapter id, and dropped.

use marketdesk_upstream::{GenerateResponse, ObjectPayload, QuoteListResponse, UpstreamError};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::error::{ApiError, ApiResult};
use crate::models::{ChatReply, FinancialSummary};

pub const SUMMARY_FAILED: &str = "Failed to fetch financial summary. Please try again later.";
pub const CHART_FAILED: &str = "Failed to fetch chart data. Please try again later.";
pub const NEWS_FAILED: &str = "Failed to fetch stock news. Please try again later.";
pub const CHAT_FAILED: &str = "Failed to fetch response from Cohere API. Please try again later.";
pub const NO_NEWS: &str = "No news available for the given symbols.";
pub const NO_GENERATION: &str = "No response generated.";

fn log_call_failure(provider: &str, what: &str, e: &UpstreamError) {
    error!(
        provider,
        upstream_status = ?e.status(),
        "Error fetching {}: {}",
        what,
        e
    );
}

pub fn financial_summary(
    provider: &str,
    ticker: &str,
    outcome: Result<QuoteListResponse, UpstreamError>,
) -> ApiResult<FinancialSummary> {
    match outcome {
        Ok(QuoteListResponse::Listed(Some(quote))) => Ok(FinancialSummary::from(&quote)),
        Ok(QuoteListResponse::Listed(None)) => {
            warn!(provider, "No financial data for ticker {}", ticker);
            Err(ApiError::NotFound(format!(
                "No financial data found for ticker: {}",
                ticker
            )))
        }
        Ok(QuoteListResponse::Unrecognized(body)) => {
            error!(
                provider,
                "Unrecognized financial summary payload for {}: {}", ticker, body
            );
            Err(ApiError::Upstream(SUMMARY_FAILED.to_string()))
        }
        Err(e) => {
            log_call_failure(provider, &format!("financial summary for {}", ticker), &e);
            Err(ApiError::Upstream(SUMMARY_FAILED.to_string()))
        }
    }
}

pub fn chart(
    provider: &str,
    ticker: &str,
    outcome: Result<ObjectPayload, UpstreamError>,
) -> ApiResult<Map<String, Value>> {
    object_payload(
        provider,
        outcome,
        || format!("No chart data available for ticker: {}", ticker),
        CHART_FAILED,
        &format!("chart data for {}", ticker),
    )
}

pub fn news(
    provider: &str,
    symbols: &str,
    outcome: Result<ObjectPayload, UpstreamError>,
) -> ApiResult<Map<String, Value>> {
    object_payload(
        provider,
        outcome,
        || NO_NEWS.to_string(),
        NEWS_FAILED,
        &format!("stock news for {}", symbols),
    )
}

fn object_payload<F>(
    provider: &str,
    outcome: Result<ObjectPayload, UpstreamError>,
    not_found: F,
    failed: &str,
    what: &str,
) -> ApiResult<Map<String, Value>>
where
    F: FnOnce() -> String,
{
    match outcome {
        Ok(ObjectPayload::Object(map)) => Ok(map),
        Ok(ObjectPayload::Empty) => {
            warn!(provider, "Empty payload for {}", what);
            Err(ApiError::NotFound(not_found()))
        }
        Ok(ObjectPayload::Unrecognized(body)) => {
            error!(provider, "Unrecognized payload for {}: {}", what, body);
            Err(ApiError::Upstream(failed.to_string()))
        }
        Err(e) => {
            log_call_failure(provider, what, &e);
            Err(ApiError::Upstream(failed.to_string()))
        }
    }
}

pub fn chat(
    provider: &str,
    outcome: Result<GenerateResponse, UpstreamError>,
) -> ApiResult<ChatReply> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => {
            log_call_failure(provider, "generation", &e);
            return Err(ApiError::Upstream(CHAT_FAILED.to_string()));
        }
    };

    let Some(first) = response.first_generation() else {
        error!(provider, "Invalid generation response: {:?}", response);
        return Err(ApiError::Upstream(CHAT_FAILED.to_string()));
    };

    let text = first
        .text()
        .filter(|t| !t.is_empty())
        .unwrap_or(NO_GENERATION);
    Ok(ChatReply {
        response: text.to_string(),
    })
}

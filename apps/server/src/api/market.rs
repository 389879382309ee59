use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::FinancialSummary, normalize};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use marketdesk_upstream::{ChartRequest, NewsRequest, QuoteRequest};
use serde_json::{Map, Value};

/// Financial summary for a ticker. The ticker is forwarded as typed.
async fn get_financial_summary(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FinancialSummary>> {
    tracing::info!("Fetching financial summary for ticker: {}", ticker);
    let outcome = state
        .summary_source
        .call(QuoteRequest::new(ticker.clone()))
        .await;
    normalize::financial_summary(state.summary_source.id(), &ticker, outcome).map(Json)
}

/// Intraday chart for a ticker. The chart upstream wants upper case.
async fn get_chart(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Map<String, Value>>> {
    let ticker = ticker.to_uppercase();
    let outcome = state
        .chart_source
        .call(ChartRequest::intraday(ticker.clone()))
        .await;
    normalize::chart(state.chart_source.id(), &ticker, outcome).map(Json)
}

async fn get_news(
    Path(symbols): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Map<String, Value>>> {
    let outcome = state
        .news_source
        .call(NewsRequest::new(symbols.clone()))
        .await;
    normalize::news(state.news_source.id(), &symbols, outcome).map(Json)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/financial-summary/{ticker}", get(get_financial_summary))
        .route("/chart/{ticker}", get(get_chart))
        .route("/news/{symbols}", get(get_news))
}

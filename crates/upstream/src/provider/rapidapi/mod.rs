//! RapidAPI Yahoo Finance adapters.
//!
//! Two endpoints on the same subscription:
//! - `/api/stock/get-chart` for intraday charts
//! - `/api/news/list-by-symbol` for news listings
//!
//! Both authenticate with the `x-rapidapi-host` / `x-rapidapi-key` header pair
//! and answer opaque JSON objects that are relayed as-is.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::{trim_base_url, RapidApiConfig};
use crate::errors::UpstreamError;
use crate::models::{ChartRequest, NewsRequest, ObjectPayload};
use crate::provider::{http::send_json, UpstreamAdapter};

const PROVIDER_ID: &str = "RAPIDAPI_YAHOO";
const CHART_PATH: &str = "/api/stock/get-chart";
const NEWS_PATH: &str = "/api/news/list-by-symbol";

/// Connection details shared by the chart and news adapters.
#[derive(Clone)]
struct RapidApiClient {
    client: Client,
    base_url: String,
    host: String,
    key: String,
}

impl RapidApiClient {
    fn new(client: Client, config: &RapidApiConfig) -> Self {
        Self {
            client,
            base_url: trim_base_url(&config.base_url),
            host: config.host.clone(),
            key: config.key.clone(),
        }
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ObjectPayload, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("RapidAPI request: {} with {} params", path, query.len());

        let request = self
            .client
            .get(url)
            .query(query)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.key);

        let value = send_json(PROVIDER_ID, request).await?;
        Ok(ObjectPayload::from(value))
    }
}

/// Intraday chart adapter.
pub struct ChartAdapter {
    inner: RapidApiClient,
}

impl ChartAdapter {
    pub fn new(client: Client, config: &RapidApiConfig) -> Self {
        Self {
            inner: RapidApiClient::new(client, config),
        }
    }
}

fn chart_query(params: &ChartRequest) -> Vec<(&'static str, String)> {
    vec![
        ("region", params.region.to_string()),
        ("range", params.range.to_string()),
        ("symbol", params.symbol.clone()),
        ("interval", params.interval.to_string()),
    ]
}

#[async_trait]
impl UpstreamAdapter for ChartAdapter {
    type Params = ChartRequest;
    type Response = ObjectPayload;

    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn call(&self, params: ChartRequest) -> Result<ObjectPayload, UpstreamError> {
        self.inner.get(CHART_PATH, &chart_query(&params)).await
    }
}

/// News listing adapter.
pub struct NewsAdapter {
    inner: RapidApiClient,
}

impl NewsAdapter {
    pub fn new(client: Client, config: &RapidApiConfig) -> Self {
        Self {
            inner: RapidApiClient::new(client, config),
        }
    }
}

fn news_query(params: &NewsRequest) -> Vec<(&'static str, String)> {
    vec![
        ("s", params.symbols.clone()),
        ("region", params.region.to_string()),
        ("snippetCount", params.snippet_count.to_string()),
    ]
}

#[async_trait]
impl UpstreamAdapter for NewsAdapter {
    type Params = NewsRequest;
    type Response = ObjectPayload;

    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn call(&self, params: NewsRequest) -> Result<ObjectPayload, UpstreamError> {
        self.inner.get(NEWS_PATH, &news_query(&params)).await
    }
}

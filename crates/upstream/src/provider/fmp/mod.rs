//! Financial Modeling Prep quote adapter.
//!
//! Calls `/api/v3/quote/{ticker}`; the API key travels in the `apikey`
//! query parameter.
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::{trim_base_url, FmpConfig};
use crate::errors::UpstreamError;
use crate::models::{QuoteListResponse, QuoteRequest};
use crate::provider::{http::send_json, UpstreamAdapter};

const PROVIDER_ID: &str = "FMP";

pub struct FmpQuoteAdapter {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FmpQuoteAdapter {
    pub fn new(client: Client, config: &FmpConfig) -> Self {
        Self {
            client,
            base_url: trim_base_url(&config.base_url),
            api_key: config.api_key.clone(),
        }
    }

    fn quote_url(&self, ticker: &str) -> String {
        format!(
            "{}/api/v3/quote/{}",
            self.base_url,
            urlencoding::encode(ticker)
        )
    }
}

#[async_trait]
impl UpstreamAdapter for FmpQuoteAdapter {
    type Params = QuoteRequest;
    type Response = QuoteListResponse;

    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn call(&self, params: QuoteRequest) -> Result<QuoteListResponse, UpstreamError> {
        debug!("FMP quote request for {}", params.ticker);

        let request = self
            .client
            .get(self.quote_url(&params.ticker))
            .query(&[("apikey", self.api_key.as_str())]);

        let value = send_json(PROVIDER_ID, request).await?;
        QuoteListResponse::from_value(value).map_err(|e| UpstreamError::decode(PROVIDER_ID, e))
    }
}

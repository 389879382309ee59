//! Cohere text-generation adapter (`POST /v1/generate`).

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::{trim_base_url, CohereConfig};
use crate::errors::UpstreamError;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::provider::{http::send_json, UpstreamAdapter};

const PROVIDER_ID: &str = "COHERE";

pub struct CohereGenerateAdapter {
    client: Client,
    base_url: String,
    api_key: String,
    api_version: String,
}

impl CohereGenerateAdapter {
    pub fn new(client: Client, config: &CohereConfig) -> Self {
        Self {
            client,
            base_url: trim_base_url(&config.base_url),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        }
    }
}

#[async_trait]
impl UpstreamAdapter for CohereGenerateAdapter {
    type Params = GenerateRequest;
    type Response = GenerateResponse;

    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn call(&self, params: GenerateRequest) -> Result<GenerateResponse, UpstreamError> {
        debug!(
            "Cohere generate request: model={} prompt_len={}",
            params.model,
            params.prompt.len()
        );

        let request = self
            .client
            .post(format!("{}/v1/generate", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Cohere-Version", &self.api_version)
            .json(&params);

        let value = send_json(PROVIDER_ID, request).await?;
        serde_json::from_value(value).map_err(|e| UpstreamError::decode(PROVIDER_ID, e))
    }
}

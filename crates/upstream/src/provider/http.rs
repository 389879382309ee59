//! HTTP plumbing shared by every adapter.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::errors::UpstreamError;

/// Build the client shared by all adapters.
///
/// The timeout applies to each outbound call as a whole.
pub fn build_client(timeout: Duration) -> Result<Client, UpstreamError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Send a prepared request and decode the body as JSON.
///
/// Non-success statuses become [`UpstreamError::Status`] carrying the raw
/// body. An empty success body decodes to `Value::Null`.
pub(crate) async fn send_json(
    provider: &str,
    request: RequestBuilder,
) -> Result<Value, UpstreamError> {
    let response = request
        .send()
        .await
        .map_err(|e| UpstreamError::from_send(provider, e))?;

    let status = response.status();
    debug!("{} responded with HTTP {}", provider, status);

    let body = response
        .text()
        .await
        .map_err(|e| UpstreamError::from_send(provider, e))?;

    if !status.is_success() {
        return Err(UpstreamError::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&body).map_err(|e| UpstreamError::decode(provider, e))
}

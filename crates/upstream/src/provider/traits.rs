//! Adapter trait definitions.

use async_trait::async_trait;

use crate::errors::UpstreamError;
use crate::models::{
    ChartRequest, GenerateRequest, GenerateResponse, NewsRequest, ObjectPayload,
    QuoteListResponse, QuoteRequest,
};

/// Trait for upstream adapters.
///
/// An adapter knows one provider endpoint: its URL, credentials, parameter
/// mapping and response schema. Each [`call`](Self::call) performs exactly
/// one outbound request and returns the typed response, or an
/// [`UpstreamError`] when the request itself failed.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use marketdesk_upstream::{QuoteListResponse, QuoteRequest, UpstreamAdapter, UpstreamError};
///
/// struct FixedQuotes;
///
/// #[async_trait]
/// impl UpstreamAdapter for FixedQuotes {
///     type Params = QuoteRequest;
///     type Response = QuoteListResponse;
///
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn call(&self, _params: QuoteRequest) -> Result<QuoteListResponse, UpstreamError> {
///         Ok(QuoteListResponse::Listed(None))
///     }
/// }
/// ```
#[async_trait]
pub trait UpstreamAdapter: Send + Sync {
    type Params: Send + 'static;
    type Response: Send + 'static;

    /// Constant identifier used in logs and errors, e.g. "FMP".
    fn id(&self) -> &'static str;

    /// Perform the outbound call.
    async fn call(&self, params: Self::Params) -> Result<Self::Response, UpstreamError>;
}

/// Market snapshot capability (financial summary route).
pub type SummarySource = dyn UpstreamAdapter<Params = QuoteRequest, Response = QuoteListResponse>;

/// Intraday chart capability.
pub type ChartSource = dyn UpstreamAdapter<Params = ChartRequest, Response = ObjectPayload>;

/// News listing capability.
pub type NewsSource = dyn UpstreamAdapter<Params = NewsRequest, Response = ObjectPayload>;

/// Text generation capability (chat route).
pub type TextGenerator = dyn UpstreamAdapter<Params = GenerateRequest, Response = GenerateResponse>;

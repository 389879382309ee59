//! Marketdesk Upstream Crate
//!
//! Provider adapters for the third-party services the marketdesk server
//! relays: Financial Modeling Prep quotes, the RapidAPI Yahoo Finance chart
//! and news endpoints, and the Cohere text-generation endpoint.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |  Request params  | --> | UpstreamAdapter  | --> |  Typed response  |
//! | (QuoteRequest..) |     |  (one call each) |     | (QuoteListResp..)|
//! +------------------+     +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  UpstreamError   |  (timeout / status / decode)
//!                          +------------------+
//! ```
//!
//! Every adapter performs exactly one outbound request per call. There is no
//! retry, caching or pagination at this layer; shaping the response for
//! clients is the caller's job.

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;

pub use config::{CohereConfig, FmpConfig, RapidApiConfig, UpstreamConfig};
pub use errors::UpstreamError;
pub use models::{
    ChartRequest, FmpQuote, GenerateRequest, GenerateResponse, Generation, GenerationEntry,
    NewsRequest, Nullable, ObjectPayload, QuoteListResponse, QuoteRequest,
};
pub use provider::cohere::CohereGenerateAdapter;
pub use provider::fmp::FmpQuoteAdapter;
pub use provider::rapidapi::{ChartAdapter, NewsAdapter};
pub use provider::{
    build_client, ChartSource, NewsSource, SummarySource, TextGenerator, UpstreamAdapter,
};

//! Request parameters and typed response schemas for every adapter.

mod generation;
mod payload;
mod quote;
mod request;

pub use generation::{GenerateRequest, GenerateResponse, Generation, GenerationEntry};
pub use payload::ObjectPayload;
pub use quote::{FmpQuote, Nullable, QuoteListResponse};
pub use request::{ChartRequest, NewsRequest, QuoteRequest};

//! Upstream adapter abstraction and implementations.
//!
//! This module contains:
//! - The `UpstreamAdapter` trait every provider adapter implements
//! - Capability aliases the server stores adapters behind
//! - Shared HTTP plumbing (client construction, send-and-decode)
//! - Concrete adapters for FMP, RapidAPI Yahoo Finance and Cohere

mod http;
mod traits;

pub mod cohere;
pub mod fmp;
pub mod rapidapi;

pub use http::build_client;
pub use traits::{ChartSource, NewsSource, SummarySource, TextGenerator, UpstreamAdapter};

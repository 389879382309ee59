//! Parameters passed from the router to each adapter.

/// Financial summary lookup for a single ticker.
///
/// The ticker is forwarded exactly as received; the quote endpoint is
/// case-insensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
    pub ticker: String,
}

impl QuoteRequest {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
        }
    }
}

/// Intraday chart lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartRequest {
    pub symbol: String,
    pub region: &'static str,
    pub range: &'static str,
    pub interval: &'static str,
}

impl ChartRequest {
    /// One trading day sampled every five minutes on the US region.
    pub fn intraday(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            region: "US",
            range: "1d",
            interval: "5m",
        }
    }
}

/// News listing for one or more symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsRequest {
    /// Symbols in the provider's own list syntax (comma separated).
    pub symbols: String,
    pub region: &'static str,
    pub snippet_count: u32,
}

impl NewsRequest {
    pub fn new(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
            region: "US",
            snippet_count: 100,
        }
    }
}

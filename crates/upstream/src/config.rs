//! Provider endpoints and credentials.
//!
//! Built once at startup by the server and handed to each adapter
//! constructor. Credentials are plain strings; an empty key is sent as-is and
//! surfaces as an authentication failure from the provider.

use std::time::Duration;

pub const DEFAULT_RAPIDAPI_HOST: &str = "yahoo-finance166.p.rapidapi.com";
pub const DEFAULT_FMP_BASE_URL: &str = "https://financialmodelingprep.com";
pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai";
pub const DEFAULT_COHERE_VERSION: &str = "2022-12-06";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// RapidAPI Yahoo Finance settings, shared by the chart and news adapters.
#[derive(Clone)]
pub struct RapidApiConfig {
    /// Value of the `x-rapidapi-host` header.
    pub host: String,
    pub key: String,
    /// Scheme and authority requests are sent to, without trailing slash.
    pub base_url: String,
}

impl Default for RapidApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RAPIDAPI_HOST.to_string(),
            key: String::new(),
            base_url: format!("https://{}", DEFAULT_RAPIDAPI_HOST),
        }
    }
}

/// Financial Modeling Prep settings.
#[derive(Clone)]
pub struct FmpConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_FMP_BASE_URL.to_string(),
        }
    }
}

/// Cohere generation settings.
#[derive(Clone)]
pub struct CohereConfig {
    pub api_key: String,
    pub base_url: String,
    /// Value of the `Cohere-Version` header.
    pub api_version: String,
}

impl Default for CohereConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_COHERE_BASE_URL.to_string(),
            api_version: DEFAULT_COHERE_VERSION.to_string(),
        }
    }
}

/// All upstream settings.
#[derive(Clone)]
pub struct UpstreamConfig {
    pub rapidapi: RapidApiConfig,
    pub fmp: FmpConfig,
    pub cohere: CohereConfig,
    /// Per-call timeout applied by the shared HTTP client.
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            rapidapi: RapidApiConfig::default(),
            fmp: FmpConfig::default(),
            cohere: CohereConfig::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub(crate) fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

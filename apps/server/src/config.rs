use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use marketdesk_upstream::{CohereConfig, FmpConfig, RapidApiConfig, UpstreamConfig};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";
const UPSTREAM_TIMEOUT_MARGIN: Duration = Duration::from_secs(2);

/// Per-call upstream timeout derived from the inbound request timeout.
///
/// Always strictly shorter than a non-zero `request_timeout`, so a slow
/// upstream is reported by the route's own error body before the inbound
/// timeout layer answers.
pub fn upstream_timeout_for(request_timeout: Duration) -> Duration {
    request_timeout
        .saturating_sub(UPSTREAM_TIMEOUT_MARGIN)
        .max(request_timeout / 2)
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub public_dir: PathBuf,
    pub quotes_path: PathBuf,
    pub upstream: UpstreamConfig,
}

impl Default for Config {
    fn default() -> Self {
        let request_timeout = Duration::from_millis(30000);
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 4000)),
            cors_allow: vec!["*".to_string()],
            request_timeout,
            public_dir: PathBuf::from("public"),
            quotes_path: PathBuf::from("./data/quotes.json"),
            upstream: UpstreamConfig {
                timeout: upstream_timeout_for(request_timeout),
                ..UpstreamConfig::default()
            },
        }
    }
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_raw = var("MD_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_raw
            .parse()
            .with_context(|| format!("Invalid MD_LISTEN_ADDR: {}", listen_raw))?;
        let cors_allow = var("MD_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = var("MD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "30000".into())
            .parse()
            .unwrap_or(30000);
        let request_timeout = Duration::from_millis(timeout_ms);
        let public_dir = var("MD_PUBLIC_DIR").unwrap_or_else(|| "public".into());
        let quotes_path = var("MD_QUOTES_PATH").unwrap_or_else(|| "./data/quotes.json".into());

        let rapidapi_defaults = RapidApiConfig::default();
        let rapidapi_host = non_empty(var("RAPIDAPI_HOST")).unwrap_or(rapidapi_defaults.host);
        let rapidapi = RapidApiConfig {
            base_url: non_empty(var("RAPIDAPI_BASE_URL"))
                .unwrap_or_else(|| format!("https://{}", rapidapi_host)),
            host: rapidapi_host,
            key: var("RAPIDAPI_KEY").unwrap_or_default(),
        };

        let fmp_defaults = FmpConfig::default();
        let fmp = FmpConfig {
            api_key: var("FMP_API_KEY").unwrap_or_default(),
            base_url: non_empty(var("FMP_BASE_URL")).unwrap_or(fmp_defaults.base_url),
        };

        let cohere_defaults = CohereConfig::default();
        let cohere = CohereConfig {
            api_key: var("COHERE_API_KEY").unwrap_or_default(),
            base_url: non_empty(var("COHERE_BASE_URL")).unwrap_or(cohere_defaults.base_url),
            api_version: cohere_defaults.api_version,
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout,
            public_dir: PathBuf::from(public_dir),
            quotes_path: PathBuf::from(quotes_path),
            upstream: UpstreamConfig {
                rapidapi,
                fmp,
                cohere,
                timeout: upstream_timeout_for(request_timeout),
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

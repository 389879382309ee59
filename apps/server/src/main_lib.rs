use std::sync::Arc;

use crate::{config::Config, quotes::QuoteReader};
use marketdesk_upstream::{
    build_client, ChartAdapter, ChartSource, CohereGenerateAdapter, FmpQuoteAdapter, NewsAdapter,
    NewsSource, SummarySource, TextGenerator,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Everything a handler needs. Immutable after startup.
pub struct AppState {
    pub quote_reader: QuoteReader,
    pub summary_source: Arc<SummarySource>,
    pub chart_source: Arc<ChartSource>,
    pub news_source: Arc<NewsSource>,
    pub text_generator: Arc<TextGenerator>,
}

pub fn init_tracing() {
    let log_format = std::env::var("MD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = build_client(config.upstream.timeout)?;
    tracing::info!("Quotes file in use: {}", config.quotes_path.display());

    let summary_source: Arc<SummarySource> =
        Arc::new(FmpQuoteAdapter::new(client.clone(), &config.upstream.fmp));
    let chart_source: Arc<ChartSource> =
        Arc::new(ChartAdapter::new(client.clone(), &config.upstream.rapidapi));
    let news_source: Arc<NewsSource> =
        Arc::new(NewsAdapter::new(client.clone(), &config.upstream.rapidapi));
    let text_generator: Arc<TextGenerator> =
        Arc::new(CohereGenerateAdapter::new(client, &config.upstream.cohere));

    Ok(Arc::new(AppState {
        quote_reader: QuoteReader::new(config.quotes_path.clone()),
        summary_source,
        chart_source,
        news_source,
        text_generator,
    }))
}

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use marketdesk_server::{api::app_router, config::Config, quotes::QuoteReader, AppState};
use marketdesk_upstream::{
    ChartRequest, FmpQuote, GenerateRequest, GenerateResponse, Generation, GenerationEntry,
    NewsRequest, ObjectPayload, QuoteListResponse, QuoteRequest, UpstreamAdapter, UpstreamError,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

type Reply<R> = Box<dyn Fn() -> Result<R, UpstreamError> + Send + Sync>;

/// Adapter stand-in that records every call and answers from a closure.
struct Stub<P, R> {
    calls: Mutex<Vec<P>>,
    reply: Reply<R>,
}

impl<P, R> Stub<P, R> {
    fn new(reply: impl Fn() -> Result<R, UpstreamError> + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        })
    }

    fn calls(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl<P, R> UpstreamAdapter for Stub<P, R>
where
    P: Send + 'static,
    R: Send + 'static,
{
    type Params = P;
    type Response = R;

    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn call(&self, params: P) -> Result<R, UpstreamError> {
        self.calls.lock().unwrap().push(params);
        (self.reply)()
    }
}

fn upstream_down() -> UpstreamError {
    UpstreamError::Status {
        provider: "STUB".to_string(),
        status: 502,
        body: "SECRET-UPSTREAM-DETAIL".to_string(),
    }
}

struct Harness {
    summary: Arc<Stub<QuoteRequest, QuoteListResponse>>,
    chart: Arc<Stub<ChartRequest, ObjectPayload>>,
    news: Arc<Stub<NewsRequest, ObjectPayload>>,
    chat: Arc<Stub<GenerateRequest, GenerateResponse>>,
    data_dir: TempDir,
}

impl Harness {
    fn new() -> Self {
        Self {
            summary: Stub::new(|| Ok(QuoteListResponse::Listed(None))),
            chart: Stub::new(|| Ok(ObjectPayload::Empty)),
            news: Stub::new(|| Ok(ObjectPayload::Empty)),
            chat: Stub::new(|| Ok(GenerateResponse::default())),
            data_dir: tempfile::tempdir().unwrap(),
        }
    }

    fn quotes_path(&self) -> std::path::PathBuf {
        self.data_dir.path().join("quotes.json")
    }

    fn router(&self) -> Router {
        let state = Arc::new(AppState {
            quote_reader: QuoteReader::new(self.quotes_path()),
            summary_source: self.summary.clone(),
            chart_source: self.chart.clone(),
            news_source: self.news.clone(),
            text_generator: self.chat.clone(),
        });
        let config = Config {
            public_dir: self.data_dir.path().join("public"),
            ..Config::default()
        };
        app_router(state, &config).unwrap()
    }
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_chat(router: Router, body: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        router,
        Request::builder()
            .method(Method::POST)
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn apple_quote() -> FmpQuote {
    serde_json::from_value(json!({
        "symbol": "AAPL",
        "price": 189.84,
        "changesPercentage": 1.25,
        "change": 2.31,
        "dayLow": 187.5,
        "dayHigh": 190.1,
        "yearLow": 164.08,
        "yearHigh": 199.62,
        "pe": 30.97
    }))
    .unwrap()
}

#[tokio::test]
async fn quotes_are_served_verbatim_and_stable() {
    let harness = Harness::new();
    std::fs::write(
        harness.quotes_path(),
        r#"[{"text":"Price is what you pay.","author":"Buffett"}]"#,
    )
    .unwrap();

    let request = || Request::builder().uri("/quotes").body(Body::empty()).unwrap();
    let (status, first) = send(harness.router(), request()).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(harness.router(), request()).await;
    assert_eq!(first, second);

    let value: Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(
        value,
        json!([{"text": "Price is what you pay.", "author": "Buffett"}])
    );
}

#[tokio::test]
async fn quotes_missing_file_is_500() {
    let harness = Harness::new();
    let (status, body) = get(harness.router(), "/quotes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to read quotes data"}));
}

#[tokio::test]
async fn financial_summary_maps_first_quote() {
    let mut harness = Harness::new();
    harness.summary = Stub::new(|| Ok(QuoteListResponse::Listed(Some(apple_quote()))));

    let (status, body) = get(harness.router(), "/financial-summary/aapl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["price"], json!(189.84));
    assert_eq!(body["changesPercentage"], "1.25%");
    assert_eq!(body["dayRange"], "187.5 - 190.1");
    assert_eq!(body["peRatio"], json!(30.97));
    assert_eq!(body["earningsDate"], "N/A");

    assert_eq!(harness.summary.calls(), vec![QuoteRequest::new("aapl")]);
}

#[tokio::test]
async fn financial_summary_empty_list_is_404_naming_ticker() {
    let harness = Harness::new();
    let (status, body) = get(harness.router(), "/financial-summary/NOPE").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "No financial data found for ticker: NOPE"})
    );
}

#[tokio::test]
async fn financial_summary_upstream_failure_is_generic_500() {
    let mut harness = Harness::new();
    harness.summary = Stub::new(|| Err(upstream_down()));

    let (status, body) = get(harness.router(), "/financial-summary/AAPL").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch financial summary. Please try again later."})
    );
    assert!(!body.to_string().contains("SECRET-UPSTREAM-DETAIL"));
}

#[tokio::test]
async fn chart_uppercases_ticker_before_dispatch() {
    let mut harness = Harness::new();
    harness.chart = Stub::new(|| Ok(ObjectPayload::from(json!({"chart": {"result": [1]}}))));

    let (status, body) = get(harness.router(), "/chart/aapl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"chart": {"result": [1]}}));
    assert_eq!(harness.chart.calls(), vec![ChartRequest::intraday("AAPL")]);
}

#[tokio::test]
async fn chart_empty_object_is_404() {
    let harness = Harness::new();
    let (status, body) = get(harness.router(), "/chart/msft").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "No chart data available for ticker: MSFT"})
    );
}

#[tokio::test]
async fn chart_upstream_failure_is_generic_500() {
    let mut harness = Harness::new();
    harness.chart = Stub::new(|| Err(upstream_down()));

    let (status, body) = get(harness.router(), "/chart/AAPL").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch chart data. Please try again later."})
    );
}

#[tokio::test]
async fn chart_unrecognized_shape_is_generic_500() {
    let mut harness = Harness::new();
    harness.chart = Stub::new(|| Ok(ObjectPayload::from(json!([1, 2]))));

    let (status, body) = get(harness.router(), "/chart/AAPL").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch chart data. Please try again later."})
    );
}

#[tokio::test]
async fn news_passes_symbols_through() {
    let mut harness = Harness::new();
    harness.news = Stub::new(|| Ok(ObjectPayload::from(json!({"data": {"stream": ["a"]}}))));

    let (status, body) = get(harness.router(), "/news/AAPL,msft").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"data": {"stream": ["a"]}}));
    assert_eq!(harness.news.calls(), vec![NewsRequest::new("AAPL,msft")]);
}

#[tokio::test]
async fn news_empty_and_failure_responses() {
    let harness = Harness::new();
    let (status, body) = get(harness.router(), "/news/AAPL").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "No news available for the given symbols."})
    );

    let mut harness = Harness::new();
    harness.news = Stub::new(|| Err(upstream_down()));
    let (status, body) = get(harness.router(), "/news/AAPL").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch stock news. Please try again later."})
    );

    let mut harness = Harness::new();
    harness.news = Stub::new(|| Ok(ObjectPayload::from(json!("rate limited"))));
    let (status, body) = get(harness.router(), "/news/AAPL").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch stock news. Please try again later."})
    );
}

#[tokio::test]
async fn chat_returns_first_generation() {
    let mut harness = Harness::new();
    harness.chat = Stub::new(|| {
        Ok(GenerateResponse {
            id: Some("gen".to_string()),
            generations: Some(vec![GenerationEntry::Generation(Generation {
                id: None,
                text: Some("Diversify.".to_string()),
            })]),
        })
    });

    let (status, body) = post_chat(harness.router(), r#"{"prompt": " Any advice? "}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Diversify."}));

    let calls = harness.chat.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, " Any advice? ");
}

#[tokio::test]
async fn chat_invalid_prompts_are_rejected_without_upstream_call() {
    let harness = Harness::new();
    for body in [
        r#"{"prompt": ""}"#,
        r#"{"prompt": "   "}"#,
        r#"{"prompt": 12}"#,
        r#"{"prompt": null}"#,
        r#"{}"#,
        r#"[]"#,
        "not json",
    ] {
        let (status, response) = post_chat(harness.router(), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, json!({"error": "Invalid prompt input."}));
    }
    assert!(harness.chat.calls().is_empty());
}

#[tokio::test]
async fn chat_missing_generations_is_500() {
    let harness = Harness::new();
    let (status, body) = post_chat(harness.router(), r#"{"prompt": "hello"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"error": "Failed to fetch response from Cohere API. Please try again later."})
    );
}

#[tokio::test]
async fn chat_upstream_failure_is_500() {
    let mut harness = Harness::new();
    harness.chat = Stub::new(|| Err(upstream_down()));
    let (status, body) = post_chat(harness.router(), r#"{"prompt": "hello"}"#).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.to_string().contains("SECRET-UPSTREAM-DETAIL"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let harness = Harness::new();
    let response = harness
        .router()
        .oneshot(
            Request::builder()
                .uri("/chart/aapl")
                .header(header::ORIGIN, "http://example.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

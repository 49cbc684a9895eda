use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use procon_sentiment::adapters::http::{ErrorBody, HealthResponse, RootResponse};
use procon_sentiment::{
    router, AppError, PatternScorer, Result, Scorer, SentimentReading, SentimentService,
    ServerConfig, WeightResponse,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

struct FixedScorer(SentimentReading);

impl Scorer for FixedScorer {
    fn score(&self, _text: &str) -> Result<SentimentReading> {
        Ok(self.0)
    }
}

struct BrokenScorer;

impl Scorer for BrokenScorer {
    fn score(&self, _text: &str) -> Result<SentimentReading> {
        Err(AppError::scoring("model not loaded"))
    }
}

fn app_with<S: Scorer + 'static>(scorer: S) -> Router {
    router(SentimentService::new(scorer), &ServerConfig::default()).unwrap()
}

fn lexicon_app() -> Router {
    app_with(PatternScorer::new().unwrap())
}

fn analyze_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/analyze-sentiment")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_message() {
    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body): (_, RootResponse) = send(lexicon_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.message,
        "Pros and Cons Sentiment Analysis API is running!"
    );
}

#[tokio::test]
async fn test_health_ignores_scorer_state() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body): (_, HealthResponse) = send(app_with(BrokenScorer), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "sentiment-analysis");
}

#[tokio::test]
async fn test_analyze_returns_weight() {
    let app = app_with(FixedScorer(SentimentReading::new(0.5, 0.4)));
    let request = analyze_request(serde_json::json!({"text": "Short commute", "item_type": "pro"}));
    let (status, body): (_, WeightResponse) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.weight, 7.5);
    assert_eq!(body.sentiment_score, 0.5);
    assert_eq!(body.confidence, 0.6);
    assert_eq!(
        body.explanation,
        "Positive sentiment detected in pro item. Higher positivity increases weight."
    );
}

#[tokio::test]
async fn test_response_has_exact_fields() {
    let app = app_with(FixedScorer(SentimentReading::new(-0.2, 0.3)));
    let request = analyze_request(serde_json::json!({"text": "Noisy street", "item_type": "con"}));
    let (status, body): (_, serde_json::Value) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let object = body.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["confidence", "explanation", "sentiment_score", "weight"]);
    assert_eq!(body["weight"], 6.0);
}

#[tokio::test]
async fn test_mixed_case_item_type() {
    let reading = SentimentReading::new(0.3, 0.5);
    let upper = analyze_request(serde_json::json!({"text": "Good pay", "item_type": "PRO"}));
    let lower = analyze_request(serde_json::json!({"text": "Good pay", "item_type": "pro"}));

    let (upper_status, upper_body): (_, WeightResponse) =
        send(app_with(FixedScorer(reading)), upper).await;
    let (_, lower_body): (_, WeightResponse) = send(app_with(FixedScorer(reading)), lower).await;

    assert_eq!(upper_status, StatusCode::OK);
    assert_eq!(upper_body, lower_body);
}

#[tokio::test]
async fn test_empty_text_is_bad_request() {
    let request = analyze_request(serde_json::json!({"text": "   ", "item_type": "pro"}));
    let (status, body): (_, ErrorBody) = send(lexicon_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "Text cannot be empty");
}

#[tokio::test]
async fn test_unknown_item_type_is_bad_request() {
    let request = analyze_request(serde_json::json!({"text": "Good pay", "item_type": "maybe"}));
    let (status, body): (_, ErrorBody) = send(lexicon_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.detail, "item_type must be 'pro' or 'con'");
}

#[tokio::test]
async fn test_scorer_failure_is_internal_error() {
    let request = analyze_request(serde_json::json!({"text": "Good pay", "item_type": "pro"}));
    let (status, body): (_, ErrorBody) = send(app_with(BrokenScorer), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.detail, "Error analyzing sentiment: model not loaded");
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let request = analyze_request(serde_json::json!({"text": "Good pay"}));
    let (status, body): (_, ErrorBody) = send(lexicon_app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.detail.contains("item_type"));
}

#[tokio::test]
async fn test_positive_text_splits_by_category() {
    let text = "This is a great, excellent opportunity with a wonderful team";

    let pro = analyze_request(serde_json::json!({"text": text, "item_type": "pro"}));
    let (_, pro_body): (_, WeightResponse) = send(lexicon_app(), pro).await;

    let con = analyze_request(serde_json::json!({"text": text, "item_type": "con"}));
    let (_, con_body): (_, WeightResponse) = send(lexicon_app(), con).await;

    assert!(pro_body.weight > 5.0, "pro weight was {}", pro_body.weight);
    assert!(con_body.weight < 5.0, "con weight was {}", con_body.weight);
    assert_eq!(pro_body.sentiment_score, con_body.sentiment_score);
}

#[tokio::test]
async fn test_cors_preflight_from_dev_client() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze-sentiment")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = lexicon_app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "POST"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "content-type"
    );
}

#[tokio::test]
async fn test_cors_rejects_other_origins() {
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = lexicon_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

use crate::config::{CorsConfig, ServerConfig};
use crate::core::analyzer::SentimentService;
use crate::domain::model::{TextInput, WeightResponse};
use crate::domain::ports::Scorer;
use crate::utils::error::{AppError, ErrorCategory, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

pub const ROOT_MESSAGE: &str = "Pros and Cons Sentiment Analysis API is running!";
pub const SERVICE_NAME: &str = "sentiment-analysis";
pub const ANALYZE_ERROR_PREFIX: &str = "Error analyzing sentiment: ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err.category() {
            ErrorCategory::Client => ApiError {
                status: StatusCode::BAD_REQUEST,
                detail: err.to_string(),
            },
            ErrorCategory::Server => ApiError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: format!("{}{}", ANALYZE_ERROR_PREFIX, err),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError {
            status,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

/// Builds the application router. Everything the handlers need is captured
/// here; nothing is read from global state afterwards.
pub fn router<S: Scorer + 'static>(
    service: SentimentService<S>,
    config: &ServerConfig,
) -> Result<Router> {
    let state = Arc::new(service);

    Ok(Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/analyze-sentiment", post(analyze_sentiment::<S>))
        .with_state(state)
        .layer(cors_layer(&config.cors)?))
}

/// Only the configured origins may call the API; methods and headers are
/// mirrored from the preflight so any of them is accepted from those origins.
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                AppError::config(format!("invalid CORS origin '{}': {}", origin, e))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

async fn analyze_sentiment<S: Scorer + 'static>(
    State(service): State<Arc<SentimentService<S>>>,
    payload: std::result::Result<Json<TextInput>, JsonRejection>,
) -> std::result::Result<Json<WeightResponse>, ApiError> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::warn!("⚠️ Rejected malformed request body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    match service.analyze(&input) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            match e.category() {
                ErrorCategory::Client => tracing::warn!("⚠️ Rejected analysis request: {}", e),
                ErrorCategory::Server => tracing::error!("❌ Sentiment analysis failed: {}", e),
            }
            Err(ApiError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let api = ApiError::from(AppError::validation("Text cannot be empty"));
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.detail, "Text cannot be empty");
    }

    #[test]
    fn test_server_errors_are_prefixed() {
        let api = ApiError::from(AppError::scoring("lexicon unavailable"));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.detail, "Error analyzing sentiment: lexicon unavailable");
    }

    #[test]
    fn test_cors_layer_rejects_unencodable_origin() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
            allow_credentials: true,
        };
        assert!(cors_layer(&cors).is_err());
        assert!(cors_layer(&CorsConfig::default()).is_ok());
    }
}

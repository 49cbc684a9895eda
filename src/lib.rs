pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub const API_TITLE: &str = "Pros and Cons Sentiment Analysis API";
pub const API_VERSION: &str = "1.0.0";

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::{http::router, lexicon::PatternScorer};
pub use app::server::SentimentServer;
pub use config::{AppSettings, CorsConfig, LoggingConfig, ServerConfig};
pub use self::core::analyzer::SentimentService;
pub use domain::model::{ItemType, SentimentReading, TextInput, WeightResponse};
pub use domain::ports::Scorer;
pub use utils::error::{AppError, Result};

pub mod analyzer;
pub mod weight;

pub use crate::domain::model::{ItemType, SentimentReading, TextInput, WeightResponse};
pub use crate::domain::ports::Scorer;
pub use crate::utils::error::Result;

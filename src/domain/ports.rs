use crate::domain::model::SentimentReading;
use crate::utils::error::Result;

/// Produces a polarity/subjectivity reading for a piece of text.
///
/// Implementations run in-process and synchronously; they must be safe to
/// share between concurrently served requests.
pub trait Scorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentReading>;
}

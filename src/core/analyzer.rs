use crate::core::weight::calculate_weight;
use crate::domain::model::{TextInput, WeightResponse};
use crate::domain::ports::Scorer;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::validate_text_input;

/// Validates a request, scores its text and turns the reading into a weight.
pub struct SentimentService<S: Scorer> {
    scorer: S,
}

impl<S: Scorer> SentimentService<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn analyze(&self, input: &TextInput) -> Result<WeightResponse> {
        let item_type = validate_text_input(input)?;

        let reading = self.scorer.score(&input.text)?;
        if !reading.is_finite() {
            return Err(AppError::scoring(format!(
                "scorer returned a non-finite reading (polarity={}, subjectivity={})",
                reading.polarity, reading.subjectivity
            )));
        }

        let response = calculate_weight(reading, item_type);

        tracing::debug!(
            item_type = %item_type,
            polarity = reading.polarity,
            subjectivity = reading.subjectivity,
            weight = response.weight,
            "analyzed text"
        );

        Ok(response)
    }
}

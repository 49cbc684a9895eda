use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PRO_EXPLANATION: &str =
    "Positive sentiment detected in pro item. Higher positivity increases weight.";
pub const CON_EXPLANATION: &str =
    "Negative sentiment detected in con item. Higher negativity increases weight (more concerning).";

/// Category of a pros-and-cons entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Pro,
    Con,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Pro => "pro",
            ItemType::Con => "con",
        }
    }

    /// Static per-category message; it never depends on the computed weight.
    pub fn explanation(&self) -> &'static str {
        match self {
            ItemType::Pro => PRO_EXPLANATION,
            ItemType::Con => CON_EXPLANATION,
        }
    }
}

impl FromStr for ItemType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pro" => Ok(ItemType::Pro),
            "con" => Ok(ItemType::Con),
            _ => Err(AppError::validation("item_type must be 'pro' or 'con'")),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body of `POST /analyze-sentiment`.
///
/// `item_type` stays a raw string so that unknown categories reach validation
/// and come back as a 400 with a readable detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
    pub item_type: String,
}

impl TextInput {
    pub fn new(text: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            item_type: item_type.into(),
        }
    }
}

/// Raw scorer output. Polarity is in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentReading {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentReading {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity,
            subjectivity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.polarity.is_finite() && self.subjectivity.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightResponse {
    pub weight: f64,
    pub sentiment_score: f64,
    pub confidence: f64,
    pub explanation: String,
}

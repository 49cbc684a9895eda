use crate::domain::model::{ItemType, SentimentReading, WeightResponse};

pub const MIN_WEIGHT: f64 = 1.0;
pub const MAX_WEIGHT: f64 = 10.0;
pub const NEUTRAL_WEIGHT: f64 = 5.0;

/// Maps a sentiment reading onto the 1-10 weight scale.
///
/// Pros grow heavier with positive polarity, cons grow heavier with negative
/// polarity. Both sides meet at 5 for neutral text; the "favourable" half of
/// the scale is five units wide and the other half four.
pub fn calculate_weight(reading: SentimentReading, item_type: ItemType) -> WeightResponse {
    let weight = round_half_even(raw_weight(reading.polarity, item_type), 1)
        .clamp(MIN_WEIGHT, MAX_WEIGHT);
    let confidence = round_half_even(1.0 - reading.subjectivity, 2).clamp(0.0, 1.0);

    WeightResponse {
        weight,
        sentiment_score: reading.polarity,
        confidence,
        explanation: item_type.explanation().to_string(),
    }
}

/// Unrounded, unclamped weight.
pub fn raw_weight(polarity: f64, item_type: ItemType) -> f64 {
    match item_type {
        ItemType::Pro => {
            if polarity > 0.0 {
                NEUTRAL_WEIGHT + polarity * 5.0
            } else if polarity < 0.0 {
                // polarity 為負，所以這裡是減
                NEUTRAL_WEIGHT + polarity * 4.0
            } else {
                NEUTRAL_WEIGHT
            }
        }
        ItemType::Con => {
            if polarity < 0.0 {
                NEUTRAL_WEIGHT + polarity.abs() * 5.0
            } else if polarity > 0.0 {
                NEUTRAL_WEIGHT - polarity * 4.0
            } else {
                NEUTRAL_WEIGHT
            }
        }
    }
}

/// Rounds the exact binary value to `decimals` places, exact ties to even.
///
/// Scaling by `10^n` first can land a value that sits just off a tie exactly
/// on it, so the decimal formatter does the rounding instead.
pub fn round_half_even(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

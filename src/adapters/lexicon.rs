//! # Pattern Lexicon Scorer
//!
//! Rule-based polarity/subjectivity scoring over an adjective lexicon.
//!
//! Every lexicon hit becomes an assessment. Intensifiers ("very", "really")
//! scale the next sentiment word, a negation right before it flips and halves
//! its polarity, and an exclamation mark strengthens the previous assessment.
//! The reading is the mean over all assessments.

use crate::domain::model::SentimentReading;
use crate::domain::ports::Scorer;
use crate::utils::error::{AppError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Polarity multiplier for a negated sentiment word ("not good").
pub const NEGATION_FACTOR: f64 = -0.5;
/// Polarity multiplier applied by a trailing `!`.
pub const EXCLAMATION_FACTOR: f64 = 1.25;

const TOKEN_PATTERN: &str = r"[a-z]+(?:'[a-z]+)?|!|[:;]-?[()]";

/// (word, polarity, subjectivity, intensity)
const DEFAULT_ENTRIES: &[(&str, f64, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6, 1.0),
    ("great", 0.8, 0.75, 1.0),
    ("excellent", 1.0, 1.0, 1.0),
    ("amazing", 0.6, 0.9, 1.0),
    ("awesome", 1.0, 1.0, 1.0),
    ("wonderful", 1.0, 1.0, 1.0),
    ("fantastic", 0.4, 0.9, 1.0),
    ("perfect", 1.0, 1.0, 1.0),
    ("best", 1.0, 0.3, 1.0),
    ("better", 0.5, 0.5, 1.0),
    ("nice", 0.6, 1.0, 1.0),
    ("happy", 0.8, 1.0, 1.0),
    ("glad", 0.5, 1.0, 1.0),
    ("beautiful", 0.85, 1.0, 1.0),
    ("fun", 0.3, 0.2, 1.0),
    ("enjoyable", 0.4, 0.5, 1.0),
    ("interesting", 0.5, 0.5, 1.0),
    ("exciting", 0.3, 0.8, 1.0),
    ("healthy", 0.5, 0.5, 1.0),
    ("safe", 0.5, 0.5, 1.0),
    ("easy", 0.43, 0.83, 1.0),
    ("convenient", 0.3, 0.5, 1.0),
    ("helpful", 0.5, 0.5, 1.0),
    ("useful", 0.3, 0.0, 1.0),
    ("valuable", 0.5, 0.5, 1.0),
    ("cheap", 0.4, 0.7, 1.0),
    ("affordable", 0.4, 0.5, 1.0),
    ("fast", 0.2, 0.6, 1.0),
    ("quick", 0.33, 0.5, 1.0),
    ("strong", 0.43, 0.73, 1.0),
    ("stable", 0.3, 0.4, 1.0),
    ("reliable", 0.5, 0.5, 1.0),
    ("positive", 0.23, 0.55, 1.0),
    ("successful", 0.75, 0.95, 1.0),
    ("comfortable", 0.4, 0.75, 1.0),
    ("clean", 0.37, 0.69, 1.0),
    ("free", 0.4, 0.8, 1.0),
    ("flexible", 0.3, 0.5, 1.0),
    ("rewarding", 0.5, 0.5, 1.0),
    ("impressive", 1.0, 1.0, 1.0),
    ("brilliant", 0.9, 1.0, 1.0),
    ("lovely", 0.5, 0.75, 1.0),
    ("friendly", 0.38, 0.5, 1.0),
    ("smart", 0.21, 0.64, 1.0),
    ("new", 0.14, 0.45, 1.0),
    // negative
    ("bad", -0.7, 0.67, 1.0),
    ("terrible", -1.0, 1.0, 1.0),
    ("awful", -1.0, 1.0, 1.0),
    ("horrible", -1.0, 1.0, 1.0),
    ("worst", -1.0, 1.0, 1.0),
    ("worse", -0.4, 0.6, 1.0),
    ("poor", -0.4, 0.6, 1.0),
    ("sad", -0.5, 1.0, 1.0),
    ("unhappy", -0.6, 0.9, 1.0),
    ("angry", -0.5, 1.0, 1.0),
    ("boring", -1.0, 1.0, 1.0),
    ("difficult", -0.5, 1.0, 1.0),
    ("hard", -0.29, 0.54, 1.0),
    ("expensive", -0.5, 0.7, 1.0),
    ("costly", -0.3, 0.6, 1.0),
    ("slow", -0.3, 0.39, 1.0),
    ("dangerous", -0.6, 0.9, 1.0),
    ("risky", -0.5, 0.7, 1.0),
    ("stressful", -0.6, 0.8, 1.0),
    ("tired", -0.4, 0.7, 1.0),
    ("annoying", -0.8, 0.9, 1.0),
    ("painful", -0.7, 0.9, 1.0),
    ("ugly", -0.7, 1.0, 1.0),
    ("dirty", -0.6, 0.8, 1.0),
    ("noisy", -0.3, 0.5, 1.0),
    ("unreliable", -0.5, 0.5, 1.0),
    ("useless", -0.5, 0.2, 1.0),
    ("negative", -0.3, 0.4, 1.0),
    ("weak", -0.38, 0.63, 1.0),
    ("wrong", -0.5, 0.9, 1.0),
    ("disappointing", -0.6, 0.7, 1.0),
    ("frustrating", -0.4, 0.7, 1.0),
    ("complicated", -0.5, 0.5, 1.0),
    ("lonely", -0.5, 1.0, 1.0),
    ("long", -0.05, 0.4, 1.0),
    ("late", -0.3, 0.6, 1.0),
    ("sick", -0.71, 0.86, 1.0),
    ("stupid", -0.8, 1.0, 1.0),
    ("old", 0.1, 0.2, 1.0),
    // intensifiers
    ("very", 0.2, 0.3, 1.3),
    ("really", 0.2, 0.2, 1.4),
    ("extremely", 0.0, 0.5, 1.5),
    ("incredibly", 0.9, 0.9, 1.5),
    ("super", 0.33, 0.67, 1.3),
    ("so", 0.0, 0.0, 1.2),
    ("too", 0.0, 0.0, 1.3),
    ("quite", 0.0, 0.0, 1.1),
    ("pretty", 0.25, 1.0, 1.1),
    ("highly", 0.16, 0.54, 1.4),
    ("slightly", -0.17, 0.17, 0.8),
    ("somewhat", 0.0, 0.0, 0.8),
    // emoticons
    (":)", 0.5, 1.0, 1.0),
    (":-)", 0.5, 1.0, 1.0),
    (";)", 0.5, 1.0, 1.0),
    (":(", -0.75, 1.0, 1.0),
    (":-(", -0.75, 1.0, 1.0),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "cannot", "nothing", "none", "nobody"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    pub fn is_intensifier(&self) -> bool {
        self.intensity != 1.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

impl Assessment {
    fn from_entry(entry: LexiconEntry) -> Self {
        Self {
            polarity: entry.polarity,
            subjectivity: entry.subjectivity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternScorer {
    lexicon: HashMap<String, LexiconEntry>,
    tokenizer: Regex,
}

impl PatternScorer {
    /// Scorer backed by the built-in English lexicon.
    pub fn new() -> Result<Self> {
        let tokenizer = Regex::new(TOKEN_PATTERN)
            .map_err(|e| AppError::config(format!("invalid tokenizer pattern: {}", e)))?;

        let lexicon = DEFAULT_ENTRIES
            .iter()
            .map(|&(word, polarity, subjectivity, intensity)| {
                (
                    word.to_string(),
                    LexiconEntry {
                        polarity,
                        subjectivity,
                        intensity,
                    },
                )
            })
            .collect();

        Ok(Self { lexicon, tokenizer })
    }

    /// Adds or replaces a lexicon entry.
    pub fn with_entry(mut self, word: &str, entry: LexiconEntry) -> Self {
        self.lexicon.insert(word.to_lowercase(), entry);
        self
    }

    pub fn entry(&self, word: &str) -> Option<LexiconEntry> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn tokenize<'a>(&self, lowered: &'a str) -> Vec<&'a str> {
        self.tokenizer
            .find_iter(lowered)
            .map(|m| m.as_str())
            .collect()
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let lowered = text.to_lowercase();
        let mut assessments = Vec::new();
        let mut negated = false;
        let mut modifier: Option<LexiconEntry> = None;

        for token in self.tokenize(&lowered) {
            if token == "!" {
                if let Some(pending) = modifier.take() {
                    assessments.push(Assessment::from_entry(pending));
                }
                if let Some(last) = assessments.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
                negated = false;
                continue;
            }

            if is_negation(token) {
                if let Some(pending) = modifier.take() {
                    assessments.push(Assessment::from_entry(pending));
                }
                negated = true;
                continue;
            }

            match self.lexicon.get(token).copied() {
                Some(entry) if entry.is_intensifier() => {
                    // "very very good": 只保留最靠近形容詞的那個
                    if let Some(pending) = modifier.replace(entry) {
                        assessments.push(Assessment::from_entry(pending));
                    }
                }
                Some(entry) => {
                    let mut assessment = Assessment::from_entry(entry);
                    if let Some(pending) = modifier.take() {
                        assessment.polarity *= pending.intensity;
                        assessment.subjectivity *= pending.intensity;
                    }
                    if negated {
                        assessment.polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    assessment.polarity = assessment.polarity.clamp(-1.0, 1.0);
                    assessment.subjectivity = assessment.subjectivity.clamp(0.0, 1.0);
                    assessments.push(assessment);
                }
                None => {
                    if let Some(pending) = modifier.take() {
                        assessments.push(Assessment::from_entry(pending));
                    }
                    negated = false;
                }
            }
        }

        if let Some(pending) = modifier {
            assessments.push(Assessment::from_entry(pending));
        }

        assessments
    }
}

impl Scorer for PatternScorer {
    fn score(&self, text: &str) -> Result<SentimentReading> {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return Ok(SentimentReading::default());
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / n;

        tracing::trace!(
            assessments = assessments.len(),
            polarity,
            subjectivity,
            "scored text"
        );

        Ok(SentimentReading::new(
            polarity.clamp(-1.0, 1.0),
            subjectivity.clamp(0.0, 1.0),
        ))
    }
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

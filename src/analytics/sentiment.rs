//! Marker-word sentiment of free-text feedback

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "amazing", "wonderful", "excellent", "love", "like", "happy", "fantastic",
    "perfect",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "dislike", "angry", "sad", "disappointed", "horrible",
    "worst",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Share of reviews per sentiment, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SentimentBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

/// Compare how many positive and negative marker words occur in `text`.
///
/// Matching is case-insensitive substring containment, and each marker counts
/// once however often it appears.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

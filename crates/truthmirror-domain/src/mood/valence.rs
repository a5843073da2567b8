use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse emotional polarity of a day or an emotion label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    #[serde(alias = "POSITIVE", alias = "Positive")]
    Positive,
    #[serde(alias = "NEGATIVE", alias = "Negative")]
    Negative,
    #[serde(alias = "NEUTRAL", alias = "Neutral")]
    Neutral,
}

impl Valence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Valence::Positive => "positive",
            Valence::Negative => "negative",
            Valence::Neutral => "neutral",
        }
    }

    /// Parse a bucket name ("POSITIVE", "positive", ...). Returns None for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Valence::Positive),
            "negative" => Some(Valence::Negative),
            "neutral" => Some(Valence::Neutral),
            _ => None,
        }
    }

    /// Bucket name or neutral. Payloads with a missing or unexpected valence land here.
    pub fn parse_or_neutral(label: Option<&str>) -> Self {
        label.and_then(Self::parse).unwrap_or(Valence::Neutral)
    }

    /// Heatmap cell value: positive 1, negative -1, neutral 0
    pub fn heat_value(&self) -> i8 {
        match self {
            Valence::Positive => 1,
            Valence::Negative => -1,
            Valence::Neutral => 0,
        }
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const POSITIVE_EMOTIONS: [&str; 5] = ["joy", "love", "surprise", "excitement", "optimism"];
const NEGATIVE_EMOTIONS: [&str; 5] = ["anger", "sadness", "fear", "disgust", "pessimism"];

/// Maps free-text emotion labels onto a valence bucket.
///
/// Total over all input: labels outside both membership sets classify as
/// neutral instead of failing.
pub struct ValenceClassifier;

impl ValenceClassifier {
    pub fn classify(emotion_label: &str) -> Valence {
        let label = emotion_label.trim().to_lowercase();

        if POSITIVE_EMOTIONS.contains(&label.as_str()) {
            Valence::Positive
        } else if NEGATIVE_EMOTIONS.contains(&label.as_str()) {
            Valence::Negative
        } else {
            Valence::Neutral
        }
    }
}

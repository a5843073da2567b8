use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::record::EmotionScore;

/// Sentiment analysis of one journal entry.
///
/// The analyze endpoint names the list `emotions`, the today endpoint `emotion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    #[serde(default, alias = "emotion")]
    pub emotions: Vec<EmotionScore>,
    #[serde(default)]
    pub scores: HashMap<String, f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl MoodAnalysis {
    pub fn primary(&self) -> Option<&EmotionScore> {
        self.emotions.first()
    }
}

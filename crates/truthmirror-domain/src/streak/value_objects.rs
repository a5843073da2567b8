use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::mood::Valence;

/// Streaks at or above this length are celebrated (positive) or flagged (negative)
pub const NOTABLE_STREAK_LENGTH: u32 = 3;

/// A run of consecutive days sharing one valence.
///
/// Always replaced wholesale on refresh, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Streak {
    #[serde(rename = "type")]
    pub kind: Valence,
    pub length: u32,
}

impl Streak {
    pub fn new(kind: Valence, length: u32) -> Self {
        Self { kind, length }
    }

    pub fn is_notable(&self) -> bool {
        self.length >= NOTABLE_STREAK_LENGTH
    }

    pub fn is_notable_positive(&self) -> bool {
        self.kind == Valence::Positive && self.is_notable()
    }

    pub fn is_notable_negative(&self) -> bool {
        self.kind == Valence::Negative && self.is_notable()
    }
}

/// `GET journals/moods/streak` response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakPayload {
    #[serde(default)]
    pub mood_type: Option<String>,
    #[serde(default)]
    pub length: i64,
}

impl StreakPayload {
    /// Normalize the backend's label to a valence and clamp the length.
    ///
    /// Unknown or missing mood types become neutral; negative lengths become 0.
    pub fn into_streak(self) -> Streak {
        let kind = match self.mood_type.as_deref().and_then(Valence::parse) {
            Some(kind) => kind,
            None => {
                warn!(
                    "[streak] unrecognized mood type {:?}, treating as neutral",
                    self.mood_type
                );
                Valence::Neutral
            }
        };

        let length = u32::try_from(self.length.max(0)).unwrap_or(u32::MAX);
        Streak::new(kind, length)
    }
}

/// Positive-only contiguity statistics over a mood feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    /// Trailing run ending at the last processed record, not necessarily today
    pub current_streak: u32,
    pub longest_streak: u32,
    pub positive_days: u32,
    pub last_positive_date: Option<NaiveDate>,
}

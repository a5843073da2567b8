use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::valence::Valence;

/// One day's mood as consumed by the streak scan. Immutable once received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub date: NaiveDate,
    pub valence: Valence,
}

impl MoodRecord {
    pub fn new(date: NaiveDate, valence: Valence) -> Self {
        Self { date, valence }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub emotion: String,
    #[serde(default)]
    pub confidence: f64,
}

/// Row of the daily-moods feed, exactly as the backend sends it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMood {
    pub date: String,
    #[serde(default)]
    pub emotions: Vec<EmotionScore>,
    #[serde(default)]
    pub scores: HashMap<String, f64>,
    #[serde(default)]
    pub valence: Option<String>,
    #[serde(default)]
    pub primary_emotion: Option<String>,
}

impl DailyMood {
    /// Calendar date of the row; accepts "2024-01-01" as well as full timestamps
    pub fn parse_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }

    pub fn valence(&self) -> Valence {
        Valence::parse_or_neutral(self.valence.as_deref())
    }

    /// None when the date cannot be read; callers skip such rows
    pub fn to_record(&self) -> Option<MoodRecord> {
        self.parse_date()
            .map(|date| MoodRecord::new(date, self.valence()))
    }
}

pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let day_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::mood::MoodAnalysis;
use crate::shared::DomainError;

/// Past entry as listed by `GET journals/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub journal_entry_id: i64,
    pub content: String,
    #[serde(rename = "timeStamp", default)]
    pub time_stamp: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
}

/// `GET journals/today`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayEntry {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
}

/// `POST journals` response; the id is what the analyze call needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    #[serde(default)]
    pub journal_entry_id: Option<i64>,
}

#[async_trait]
pub trait JournalApi: Send + Sync {
    async fn save_entry(&self, content: &str) -> Result<SavedEntry, DomainError>;

    async fn analyze_entry(&self, journal_entry_id: i64) -> Result<MoodAnalysis, DomainError>;

    async fn today_entry(&self) -> Result<TodayEntry, DomainError>;

    async fn history(&self) -> Result<Vec<JournalEntry>, DomainError>;
}

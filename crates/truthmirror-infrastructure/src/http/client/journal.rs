use async_trait::async_trait;
use log::info;

use truthmirror_domain::journal::{JournalApi, JournalEntry, SavedEntry, TodayEntry};
use truthmirror_domain::mood::MoodAnalysis;
use truthmirror_domain::shared::DomainError;

use super::types::{endpoints, AnalyzeRequest, NewEntryRequest};

#[async_trait]
impl JournalApi for super::ApiClient {
    async fn save_entry(&self, content: &str) -> Result<SavedEntry, DomainError> {
        let saved: Option<SavedEntry> = self
            .post_json("Save entry", endpoints::ENTRIES, &NewEntryRequest { content })
            .await?;
        let saved = saved.unwrap_or_default();
        info!(
            "[journal] saved entry id={:?} chars={}",
            saved.journal_entry_id,
            content.chars().count()
        );
        Ok(saved)
    }

    async fn analyze_entry(&self, journal_entry_id: i64) -> Result<MoodAnalysis, DomainError> {
        self.post_json(
            "Analyze entry",
            endpoints::ANALYZE,
            &AnalyzeRequest { journal_entry_id },
        )
        .await
    }

    async fn today_entry(&self) -> Result<TodayEntry, DomainError> {
        let entry: Option<TodayEntry> = self
            .get_json("Fetch today's entry", endpoints::TODAY_ENTRY, &[])
            .await?;
        Ok(entry.unwrap_or_default())
    }

    async fn history(&self) -> Result<Vec<JournalEntry>, DomainError> {
        let entries: Option<Vec<JournalEntry>> = self
            .get_json("Fetch journal history", endpoints::HISTORY, &[])
            .await?;
        Ok(entries.unwrap_or_default())
    }
}

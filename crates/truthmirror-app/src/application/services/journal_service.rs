use log::{info, warn};
use std::sync::Arc;

use crate::application::dtos::SubmitEntryResultDto;
use truthmirror_domain::journal::{JournalApi, JournalEntry, TodayEntry};
use truthmirror_domain::safety::{EntryValidator, LengthPolicy, DANGER_NOTICE};
use truthmirror_domain::shared::DomainError;

/// Most recent entries shown in the history view
pub const HISTORY_LIMIT: usize = 20;

pub const MISSING_ENTRY_ID_MESSAGE: &str =
    "Brevity is the soul of wit, but we need something to analyze!";
pub const ANALYSIS_FAILED_NOTICE: &str = "Failed to analyze mood. Please try again.";

pub struct JournalService {
    journal_api: Arc<dyn JournalApi>,
    length_policy: LengthPolicy,
}

impl JournalService {
    pub fn new(journal_api: Arc<dyn JournalApi>, length_policy: LengthPolicy) -> Self {
        Self {
            journal_api,
            length_policy,
        }
    }

    /// Validate, save, then analyze.
    ///
    /// Validation failures return before any network call. Once the save has
    /// succeeded the entry is never reported as lost: an analysis failure
    /// comes back as `analysis: None` with a notice.
    pub async fn submit(&self, text: &str) -> Result<SubmitEntryResultDto, DomainError> {
        let check = EntryValidator::validate(text, self.length_policy)?;

        let mut notices = Vec::new();
        if check.flagged {
            warn!(
                "[journal] entry contains flagged phrases count={}",
                check.matched_phrases.len()
            );
            notices.push(DANGER_NOTICE.to_string());
        }

        let saved = self.journal_api.save_entry(text).await?;
        let journal_entry_id = saved
            .journal_entry_id
            .ok_or_else(|| DomainError::Validation(MISSING_ENTRY_ID_MESSAGE.to_string()))?;

        let analysis = match self.journal_api.analyze_entry(journal_entry_id).await {
            Ok(analysis) => {
                info!(
                    "[journal] analyzed entry id={} primary={:?}",
                    journal_entry_id,
                    analysis.primary().map(|e| e.emotion.as_str())
                );
                Some(analysis)
            }
            Err(e) => {
                warn!(
                    "[journal] analysis failed for saved entry id={}: {}",
                    journal_entry_id,
                    e.format_with_code()
                );
                notices.push(ANALYSIS_FAILED_NOTICE.to_string());
                None
            }
        };

        Ok(SubmitEntryResultDto {
            journal_entry_id,
            analysis,
            flagged: check.flagged,
            notices,
        })
    }

    pub async fn today(&self) -> Result<TodayEntry, DomainError> {
        self.journal_api.today_entry().await
    }

    /// At most [`HISTORY_LIMIT`] entries, in the order the backend returned them
    pub async fn history(&self) -> Result<Vec<JournalEntry>, DomainError> {
        let mut entries = self.journal_api.history().await?;
        if entries.len() > HISTORY_LIMIT {
            info!(
                "[journal] history truncated from {} to {}",
                entries.len(),
                HISTORY_LIMIT
            );
            entries.truncate(HISTORY_LIMIT);
        }
        Ok(entries)
    }
}

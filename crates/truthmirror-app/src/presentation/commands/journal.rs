use log::warn;

use crate::application::dtos::{SubmitEntryResponseDto, TodayOverviewDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use truthmirror_domain::journal::JournalEntry;
use truthmirror_domain::safety::{EntryCheck, EntryValidator};

/// Save and analyze an entry, then refresh the streak it may have extended
pub async fn submit_journal_entry(
    state: &AppState,
    content: &str,
) -> Result<SubmitEntryResponseDto, CommandError> {
    log::info!("=== submit_journal_entry chars={} ===", content.chars().count());

    let entry = state.services.journal.submit(content).await?;
    let mood = state.session.refresh().await;
    Ok(SubmitEntryResponseDto { entry, mood })
}

/// Run the local checks only
pub fn check_journal_entry(state: &AppState, content: &str) -> Result<EntryCheck, CommandError> {
    Ok(EntryValidator::validate(content, state.length_policy)?)
}

/// Today's entry with its analyzed mood and matching playlists.
///
/// Only the entry fetch is required; the mood and playlist lookups degrade
/// to None.
pub async fn get_today(state: &AppState) -> Result<TodayOverviewDto, CommandError> {
    let entry = state.services.journal.today().await?;

    let mood = match state.queries.mood_stats.get_today_mood().await {
        Ok(mood) => mood,
        Err(e) => {
            warn!("[journal] today's mood unavailable: {}", e.format_with_code());
            None
        }
    };

    let label = mood
        .as_ref()
        .map(|m| m.primary_emotion.clone())
        .or_else(|| entry.sentiment_label.clone())
        .unwrap_or_default();
    let playlists = state.services.playlist.recommend(&label).await;

    Ok(TodayOverviewDto {
        entry,
        mood,
        playlists,
    })
}

pub async fn get_journal_history(state: &AppState) -> Result<Vec<JournalEntry>, CommandError> {
    Ok(state.services.journal.history().await?)
}

use crate::application::dtos::{MoodCalendarDto, MoodSnapshotDto, StreakStatsDto, TodayMoodDto};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Fetch the streak and derive theme, banner, copy and celebration
pub async fn refresh_mood(state: &AppState) -> MoodSnapshotDto {
    state.session.refresh().await
}

/// Re-derive from the held streak; no network
pub fn get_mood_snapshot(state: &AppState) -> MoodSnapshotDto {
    state.session.snapshot()
}

pub async fn get_mood_stats(
    state: &AppState,
    range: Option<&str>,
) -> Result<StreakStatsDto, CommandError> {
    Ok(state.queries.mood_stats.get_stats(range).await?)
}

pub async fn get_mood_calendar(
    state: &AppState,
    range: Option<&str>,
) -> Result<MoodCalendarDto, CommandError> {
    Ok(state.queries.mood_stats.get_calendar(range).await?)
}

pub async fn get_today_mood(state: &AppState) -> Result<Option<TodayMoodDto>, CommandError> {
    Ok(state.queries.mood_stats.get_today_mood().await?)
}

use std::sync::Arc;

use crate::application::dtos::{MoodCalendarDto, StreakStatsDto, TodayMoodDto};
use truthmirror_domain::mood::MoodApi;
use truthmirror_domain::shared::DomainError;

mod calendar;
mod helpers;
mod today;

/// Read-side views over the mood feeds
pub struct MoodStatsQueries {
    mood_api: Arc<dyn MoodApi>,
    default_range: String,
}

impl MoodStatsQueries {
    pub fn new(mood_api: Arc<dyn MoodApi>, default_range: impl Into<String>) -> Self {
        Self {
            mood_api,
            default_range: default_range.into(),
        }
    }

    pub fn default_range(&self) -> &str {
        &self.default_range
    }

    /// Positive-streak statistics over the daily feed
    pub async fn get_stats(&self, range: Option<&str>) -> Result<StreakStatsDto, DomainError> {
        let range = range.unwrap_or(&self.default_range);
        calendar::get_stats(self.mood_api.as_ref(), range).await
    }

    /// Heatmap cells plus the statistics for the same records
    pub async fn get_calendar(&self, range: Option<&str>) -> Result<MoodCalendarDto, DomainError> {
        let range = range.unwrap_or(&self.default_range);
        calendar::get_calendar(self.mood_api.as_ref(), range).await
    }

    /// None until today's entry has been analyzed
    pub async fn get_today_mood(&self) -> Result<Option<TodayMoodDto>, DomainError> {
        today::get_today_mood(self.mood_api.as_ref()).await
    }
}

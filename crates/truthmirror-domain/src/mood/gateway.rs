use async_trait::async_trait;

use crate::shared::DomainError;
use crate::streak::StreakPayload;

use super::analysis::MoodAnalysis;
use super::record::DailyMood;

/// Backend mood endpoints. One attempt per call; no retry.
#[async_trait]
pub trait MoodApi: Send + Sync {
    /// Current streak as computed by the backend
    async fn fetch_streak(&self) -> Result<StreakPayload, DomainError>;

    /// Daily mood feed for a period such as "1m"
    async fn fetch_daily_moods(&self, range: &str) -> Result<Vec<DailyMood>, DomainError>;

    /// Today's analyzed mood, if an entry has been analyzed today
    async fn fetch_today_mood(&self) -> Result<Option<MoodAnalysis>, DomainError>;
}

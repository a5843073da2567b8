use async_trait::async_trait;
use log::info;

use truthmirror_domain::mood::{DailyMood, MoodAnalysis, MoodApi};
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::streak::StreakPayload;

use super::types::endpoints;

#[async_trait]
impl MoodApi for super::ApiClient {
    async fn fetch_streak(&self) -> Result<StreakPayload, DomainError> {
        let payload: StreakPayload = self
            .get_json("Fetch streak", endpoints::STREAK, &[])
            .await?;
        info!(
            "[streak] fetched mood_type={:?} length={}",
            payload.mood_type, payload.length
        );
        Ok(payload)
    }

    async fn fetch_daily_moods(&self, range: &str) -> Result<Vec<DailyMood>, DomainError> {
        let moods: Option<Vec<DailyMood>> = self
            .get_json("Fetch daily moods", endpoints::DAILY_MOODS, &[("range", range)])
            .await?;
        let moods = moods.unwrap_or_default();
        info!("[mood] fetched daily moods range={} rows={}", range, moods.len());
        Ok(moods)
    }

    async fn fetch_today_mood(&self) -> Result<Option<MoodAnalysis>, DomainError> {
        self.get_json("Fetch today's mood", endpoints::TODAY_MOOD, &[])
            .await
    }
}

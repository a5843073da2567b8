use std::cmp::Ordering;

use super::helpers::to_percent;
use crate::application::dtos::{EmotionShareDto, TodayMoodDto};
use truthmirror_domain::mood::{MoodAnalysis, MoodApi, ValenceClassifier};
use truthmirror_domain::shared::DomainError;

const OTHER_EMOTIONS_SHOWN: usize = 2;

pub async fn get_today_mood(mood_api: &dyn MoodApi) -> Result<Option<TodayMoodDto>, DomainError> {
    let analysis = mood_api.fetch_today_mood().await?;
    Ok(analysis.as_ref().and_then(summarize))
}

/// None when the analysis carries no emotions
pub fn summarize(analysis: &MoodAnalysis) -> Option<TodayMoodDto> {
    let primary = analysis.primary()?;

    let mut others: Vec<(&String, f64)> = analysis
        .scores
        .iter()
        .filter(|(emotion, _)| **emotion != primary.emotion)
        .map(|(emotion, score)| (emotion, *score))
        .collect();
    others.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    Some(TodayMoodDto {
        primary_emotion: primary.emotion.clone(),
        valence: ValenceClassifier::classify(&primary.emotion),
        confidence_percent: to_percent(primary.confidence),
        other_emotions: others
            .into_iter()
            .take(OTHER_EMOTIONS_SHOWN)
            .map(|(emotion, score)| EmotionShareDto {
                emotion: emotion.clone(),
                percent: to_percent(score),
            })
            .collect(),
        timestamp: analysis.timestamp.clone(),
    })
}

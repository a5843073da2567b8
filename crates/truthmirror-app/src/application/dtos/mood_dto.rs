use serde::Serialize;

use truthmirror_domain::mood::Valence;
use truthmirror_domain::streak::{Streak, StreakBanner, StreakStats};
use truthmirror_domain::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreakBannerDto {
    #[serde(flatten)]
    pub banner: StreakBanner,
    pub title: String,
    pub body: String,
}

impl From<StreakBanner> for StreakBannerDto {
    fn from(banner: StreakBanner) -> Self {
        Self {
            title: banner.title().to_string(),
            body: banner.body(),
            banner,
        }
    }
}

/// Everything the UI derives from the held streak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSnapshotDto {
    pub streak: Option<Streak>,
    pub theme: Theme,
    pub banner: Option<StreakBannerDto>,
    pub streak_message: String,
    pub encouragement: String,
    /// A celebration was emitted while producing this snapshot
    pub celebrated: bool,
    /// Passive notice when the latest refresh failed
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakStatsDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub positive_days: u32,
    pub last_positive_date: Option<String>, // YYYY-MM-DD
}

impl From<StreakStats> for StreakStatsDto {
    fn from(stats: StreakStats) -> Self {
        Self {
            current_streak: stats.current_streak,
            longest_streak: stats.longest_streak,
            positive_days: stats.positive_days,
            last_positive_date: stats
                .last_positive_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDayDto {
    pub date: String,
    pub valence: Valence,
    /// Heatmap value: 1, -1 or 0
    pub value: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCalendarDto {
    pub range: String,
    pub from: Option<String>,
    pub to: Option<String>,
    pub days: Vec<CalendarDayDto>,
    pub stats: StreakStatsDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionShareDto {
    pub emotion: String,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodayMoodDto {
    pub primary_emotion: String,
    pub valence: Valence,
    pub confidence_percent: u32,
    pub other_emotions: Vec<EmotionShareDto>,
    pub timestamp: Option<String>,
}

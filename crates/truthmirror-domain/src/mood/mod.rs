mod analysis;
mod gateway;
mod record;
mod valence;

pub use analysis::MoodAnalysis;
pub use gateway::MoodApi;
pub use record::{parse_calendar_date, DailyMood, EmotionScore, MoodRecord};
pub use valence::{Valence, ValenceClassifier};

mod mood_session;
mod streak_store;

pub use mood_session::MoodSession;
pub use streak_store::StreakStateStore;

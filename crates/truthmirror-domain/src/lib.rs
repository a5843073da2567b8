// Domain layer - mood streak rules and collaborator contracts
// No I/O; infrastructure implements the traits declared here

pub mod auth;
pub mod effects;
pub mod journal;
pub mod mood;
pub mod playlist;
pub mod safety;
pub mod shared;
pub mod streak;
pub mod theme;
pub mod transcription;

// Re-exports for convenience
pub use mood::{MoodRecord, Valence, ValenceClassifier};
pub use shared::DomainError;
pub use streak::{Streak, StreakCalculator, StreakStats};
pub use theme::{Theme, ThemeResolver};

mod calculator;
mod copy;
mod value_objects;


pub use calculator::StreakCalculator;
pub use copy::{encouragement, streak_message, StreakBanner};
pub use value_objects::{Streak, StreakPayload, StreakStats, NOTABLE_STREAK_LENGTH};

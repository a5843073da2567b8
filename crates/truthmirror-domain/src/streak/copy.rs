use serde::Serialize;

use super::value_objects::Streak;

/// Notice shown above the mood calendar for notable streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StreakBanner {
    /// Negative run of three days or more; points the user at the help page
    Warning { length: u32 },
    Encouragement { length: u32 },
}

impl StreakBanner {
    pub fn for_streak(streak: Option<&Streak>) -> Option<Self> {
        let streak = streak?;
        if streak.is_notable_negative() {
            Some(StreakBanner::Warning {
                length: streak.length,
            })
        } else if streak.is_notable_positive() {
            Some(StreakBanner::Encouragement {
                length: streak.length,
            })
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StreakBanner::Warning { .. } => "We've noticed a tough streak.",
            StreakBanner::Encouragement { .. } => "Keep up the great work!",
        }
    }

    pub fn body(&self) -> String {
        match self {
            StreakBanner::Warning { length } => format!(
                "You've had {} days in a row with negative emotions. Remember, it's okay to have ups and downs. \
                 Consider reaching out to a trusted friend, family member, or mental health professional for support. \
                 Visit our Get Help page for resources and guidance.",
                length
            ),
            StreakBanner::Encouragement { length } => format!(
                "You've had {} days in a row with positive emotions. Celebrate your progress and continue \
                 nurturing your well-being. Remember, every step forward counts!",
                length
            ),
        }
    }
}

/// Sentence shown under today's mood
pub fn streak_message(streak: Option<&Streak>) -> String {
    match streak {
        Some(s) if s.is_notable_positive() => format!(
            "This continues your {}-day positive streak. 🎉 Keep it going!",
            s.length
        ),
        Some(s) if s.is_notable_negative() => format!(
            "This continues your {}-day negative streak. 🩵 It's okay to have tough days.",
            s.length
        ),
        _ => "A balanced day is a good day - reflect on what kept you steady.".to_string(),
    }
}

pub fn encouragement(streak: Option<&Streak>) -> &'static str {
    match streak {
        Some(s) if s.is_notable_positive() => {
            "✨ Celebrate your wins by reflecting on what you're grateful for."
        }
        Some(s) if s.is_notable_negative() => {
            "🍃 Consider a small act of self-care today, like taking a short walk or listening to your favorite music."
        }
        _ => "📖 Take a moment to reflect on what matters most to you today.",
    }
}

use log::debug;
use serde::Serialize;

use crate::mood::Valence;
use crate::streak::Streak;

/// Minimum streak length before the theme follows the streak's valence
pub const STABILIZATION_WINDOW: u32 = 6;

/// Fixed bundle of presentation tokens (tailwind class names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub heading: &'static str,
    pub border_light: &'static str,
    pub border_hover: &'static str,
}

impl Theme {
    pub const POSITIVE: Theme = Theme {
        name: "positive",
        background: "bg-pink-200",
        text: "text-white",
        accent: "bg-lavender",
        heading: "text-dark-lavender",
        border_light: "border-lavender",
        border_hover: "hover:border-dark-lavender",
    };

    pub const NEUTRAL: Theme = Theme {
        name: "neutral",
        background: "bg-hunter-green",
        text: "text-honey-dew",
        accent: "bg-cambridge-blue-green",
        heading: "text-chocolate-cosmos",
        border_light: "border-cambridge-blue-green",
        border_hover: "hover:border-chocolate-cosmos",
    };

    pub const NEGATIVE: Theme = Theme {
        name: "negative",
        background: "bg-cerulean",
        text: "text-honey-dew",
        accent: "bg-payne-blue",
        heading: "text-prussian-blue",
        border_light: "border-payne-blue",
        border_hover: "hover:border-prussian-blue",
    };

    pub fn for_valence(valence: Valence) -> Theme {
        match valence {
            Valence::Positive => Theme::POSITIVE,
            Valence::Neutral => Theme::NEUTRAL,
            Valence::Negative => Theme::NEGATIVE,
        }
    }

    /// Lookup by bundle name; unknown names get the positive bundle
    pub fn by_name(name: &str) -> Theme {
        Valence::parse(name)
            .map(Theme::for_valence)
            .unwrap_or(Theme::POSITIVE)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::POSITIVE
    }
}

/// Pure streak → theme mapping, safe to call on every render
pub struct ThemeResolver;

impl ThemeResolver {
    pub fn resolve(streak: Option<&Streak>) -> Theme {
        match streak {
            Some(s) if s.length >= STABILIZATION_WINDOW => Theme::for_valence(s.kind),
            _ => Theme::POSITIVE,
        }
    }
}

/// Keeps the last stable theme across refreshes.
///
/// Starts on the positive bundle and only switches when a streak reaches
/// the stabilization window; shorter streaks leave the current theme as is.
#[derive(Debug, Clone)]
pub struct ThemeTracker {
    current: Theme,
}

impl ThemeTracker {
    pub fn new() -> Self {
        Self {
            current: Theme::POSITIVE,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn observe(&mut self, streak: Option<&Streak>) -> Theme {
        if let Some(s) = streak.filter(|s| s.length >= STABILIZATION_WINDOW) {
            let next = ThemeResolver::resolve(Some(s));
            if next != self.current {
                debug!(
                    "[theme] switching {} -> {} on {}-day {} streak",
                    self.current.name, next.name, s.length, s.kind
                );
                self.current = next;
            }
        }
        self.current
    }
}

impl Default for ThemeTracker {
    fn default() -> Self {
        Self::new()
    }
}

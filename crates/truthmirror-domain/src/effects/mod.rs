use log::{debug, info};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::streak::Streak;

pub const CELEBRATION_COLORS: [&str; 4] = ["#ffc759", "#1a3a3a", "#9ee493", "#d17b0f"];

/// One side of the confetti emission
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    pub angle: u32,
    pub spread: u32,
    pub origin_x: f32,
}

/// Two-sided symmetric confetti burst for a streak
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Celebration {
    pub streak: Streak,
    pub bursts: [Burst; 2],
    pub colors: [&'static str; 4],
}

impl Celebration {
    pub fn for_streak(streak: Streak) -> Self {
        Self {
            streak,
            bursts: [
                Burst {
                    particle_count: 200,
                    angle: 20,
                    spread: 55,
                    origin_x: 0.0,
                },
                Burst {
                    particle_count: 200,
                    angle: 120,
                    spread: 55,
                    origin_x: 1.0,
                },
            ],
            colors: CELEBRATION_COLORS,
        }
    }
}

/// Renders a celebration. Implemented by whatever draws the UI.
pub trait CelebrationSink: Send + Sync {
    fn celebrate(&self, celebration: &Celebration);
}

/// Fires a one-shot celebration for notable positive streaks.
///
/// The guard is keyed on the streak value `(type, length)`: observing an
/// equal streak again is a no-op, and a value that has already been
/// celebrated this session is never celebrated twice.
pub struct EffectTrigger {
    sink: Arc<dyn CelebrationSink>,
    last_observed: Option<Streak>,
    celebrated: HashSet<Streak>,
}

impl EffectTrigger {
    pub fn new(sink: Arc<dyn CelebrationSink>) -> Self {
        Self {
            sink,
            last_observed: None,
            celebrated: HashSet::new(),
        }
    }

    /// Returns true when a celebration was emitted
    pub fn on_streak_observed(&mut self, streak: Option<&Streak>) -> bool {
        let Some(streak) = streak else {
            return false;
        };

        if self.last_observed.as_ref() != Some(streak) {
            debug!(
                "[effects] user is on a {}-day {} streak",
                streak.length, streak.kind
            );
            self.last_observed = Some(*streak);
        }

        if !streak.is_notable_positive() || !self.celebrated.insert(*streak) {
            return false;
        }

        info!(
            "[effects] celebrating {}-day positive streak",
            streak.length
        );
        self.sink.celebrate(&Celebration::for_streak(*streak));
        true
    }

    pub fn last_observed(&self) -> Option<Streak> {
        self.last_observed
    }
}

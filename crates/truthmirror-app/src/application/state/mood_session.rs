use std::sync::{Arc, Mutex, PoisonError};

use super::StreakStateStore;
use crate::application::dtos::MoodSnapshotDto;
use truthmirror_domain::effects::{CelebrationSink, EffectTrigger};
use truthmirror_domain::streak::{encouragement, streak_message, Streak, StreakBanner};
use truthmirror_domain::theme::ThemeTracker;

/// Per-session mood context: one store (single writer through `refresh`)
/// and the stateful consumers that observe it.
pub struct MoodSession {
    store: Arc<StreakStateStore>,
    theme: Mutex<ThemeTracker>,
    effects: Mutex<EffectTrigger>,
}

impl MoodSession {
    pub fn new(store: Arc<StreakStateStore>, sink: Arc<dyn CelebrationSink>) -> Self {
        Self {
            store,
            theme: Mutex::new(ThemeTracker::new()),
            effects: Mutex::new(EffectTrigger::new(sink)),
        }
    }

    pub fn store(&self) -> &Arc<StreakStateStore> {
        &self.store
    }

    /// Fetch the streak and derive the snapshot from the result.
    /// A failed fetch keeps the previous streak and sets `notice`.
    pub async fn refresh(&self) -> MoodSnapshotDto {
        match self.store.try_refresh().await {
            Ok(streak) => self.observe(streak, None),
            Err(e) => {
                log::warn!("[streak] session refresh failed: {}", e.format_with_code());
                self.observe(self.store.current(), Some(e.message().to_string()))
            }
        }
    }

    /// Re-derive from the held streak without a fetch
    pub fn snapshot(&self) -> MoodSnapshotDto {
        self.observe(self.store.current(), None)
    }

    fn observe(&self, streak: Option<Streak>, notice: Option<String>) -> MoodSnapshotDto {
        let theme = self
            .theme
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(streak.as_ref());
        let celebrated = self
            .effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_streak_observed(streak.as_ref());

        MoodSnapshotDto {
            streak,
            theme,
            banner: StreakBanner::for_streak(streak.as_ref()).map(Into::into),
            streak_message: streak_message(streak.as_ref()),
            encouragement: encouragement(streak.as_ref()).to_string(),
            celebrated,
            notice,
        }
    }
}

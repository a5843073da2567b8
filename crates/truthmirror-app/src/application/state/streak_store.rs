use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use truthmirror_domain::mood::MoodApi;
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::streak::Streak;

#[derive(Debug, Default)]
struct Held {
    generation: u64,
    streak: Option<Streak>,
}

/// Latest streak reported by the mood API.
///
/// Every refresh takes a generation number when it starts. A completed
/// fetch is applied only when its generation is newer than the one already
/// applied, so a slow response can never overwrite a fresher one. The held
/// value is swapped whole under the write lock; readers never see a
/// half-updated streak.
pub struct StreakStateStore {
    mood_api: Arc<dyn MoodApi>,
    issued: AtomicU64,
    held: RwLock<Held>,
}

impl StreakStateStore {
    pub fn new(mood_api: Arc<dyn MoodApi>) -> Self {
        Self {
            mood_api,
            issued: AtomicU64::new(0),
            held: RwLock::new(Held::default()),
        }
    }

    /// Last applied streak, without touching the network
    pub fn current(&self) -> Option<Streak> {
        self.held
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .streak
    }

    /// Fetch and apply. On failure the previous value is kept and returned.
    pub async fn refresh(&self) -> Option<Streak> {
        match self.try_refresh().await {
            Ok(streak) => streak,
            Err(e) => {
                warn!(
                    "[streak] refresh failed, keeping {:?}: {}",
                    self.current(),
                    e.format_with_code()
                );
                self.current()
            }
        }
    }

    /// Like [`refresh`](Self::refresh) but hands the failure back so callers
    /// can show a notice. State is left untouched on error either way.
    pub async fn try_refresh(&self) -> Result<Option<Streak>, DomainError> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let payload = self.mood_api.fetch_streak().await?;
        Ok(self.apply(generation, payload.into_streak()))
    }

    fn apply(&self, generation: u64, streak: Streak) -> Option<Streak> {
        let mut held = self.held.write().unwrap_or_else(PoisonError::into_inner);
        if generation > held.generation {
            held.generation = generation;
            held.streak = Some(streak);
            info!(
                "[streak] applied generation={} type={} length={}",
                generation, streak.kind, streak.length
            );
        } else {
            debug!(
                "[streak] discarded stale generation={} (applied={})",
                generation, held.generation
            );
        }
        held.streak
    }
}

use log::{debug, warn};
use std::sync::Arc;

use truthmirror_domain::mood::ValenceClassifier;
use truthmirror_domain::playlist::{PlaylistApi, PlaylistResponse};

pub struct PlaylistService {
    playlist_api: Arc<dyn PlaylistApi>,
}

impl PlaylistService {
    pub fn new(playlist_api: Arc<dyn PlaylistApi>) -> Self {
        Self { playlist_api }
    }

    /// Playlists for the valence bucket of `emotion_label`.
    /// An empty label makes no call; failures are logged and yield None.
    pub async fn recommend(&self, emotion_label: &str) -> Option<PlaylistResponse> {
        if emotion_label.trim().is_empty() {
            debug!("[playlist] no mood yet, skipping recommendations");
            return None;
        }

        let mood = ValenceClassifier::classify(emotion_label);
        match self.playlist_api.playlists_for(mood).await {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(
                    "[playlist] fetch failed label={} mood={}: {}",
                    emotion_label,
                    mood,
                    e.format_with_code()
                );
                None
            }
        }
    }
}

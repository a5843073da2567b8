use async_trait::async_trait;
use log::info;

use truthmirror_domain::mood::Valence;
use truthmirror_domain::playlist::{PlaylistApi, PlaylistResponse};
use truthmirror_domain::shared::DomainError;

use super::types::endpoints;

#[async_trait]
impl PlaylistApi for super::ApiClient {
    async fn playlists_for(&self, mood: Valence) -> Result<PlaylistResponse, DomainError> {
        let response: PlaylistResponse = self
            .get_json(
                "Fetch playlists",
                endpoints::PLAYLISTS,
                &[("mood", mood.as_str())],
            )
            .await?;
        info!(
            "[playlist] fetched mood={} playlists={} from_cache={}",
            response.mood,
            response.playlists.len(),
            response.from_cache
        );
        Ok(response)
    }
}

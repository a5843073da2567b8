use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::mood::Valence;
use crate::shared::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistResponse {
    pub mood: Valence,
    #[serde(default)]
    pub playlists: Vec<Playlist>,
    #[serde(default)]
    pub from_cache: bool,
}

#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn playlists_for(&self, mood: Valence) -> Result<PlaylistResponse, DomainError>;
}

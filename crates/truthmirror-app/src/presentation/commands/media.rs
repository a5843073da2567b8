use std::path::Path;

use crate::application::dtos::TranscriptDto;
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;
use truthmirror_domain::playlist::PlaylistResponse;

pub async fn get_playlists(state: &AppState, emotion_label: &str) -> Option<PlaylistResponse> {
    state.services.playlist.recommend(emotion_label).await
}

/// Transcribe a recorded WAV file
pub async fn transcribe_recording(
    state: &AppState,
    path: &Path,
) -> Result<TranscriptDto, CommandError> {
    let audio = tokio::fs::read(path).await.map_err(|e| {
        CommandError::recording_unavailable(format!("{}: {}", path.display(), e))
    })?;
    Ok(state.services.transcription.transcribe(audio).await?)
}

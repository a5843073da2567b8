use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::application::queries::MoodStatsQueries;
use crate::application::services::{
    JournalService, LogCelebrationSink, PlaylistService, VoiceTranscriptionService,
};
use crate::application::state::{MoodSession, StreakStateStore};
use crate::presentation::state::{AppState, Queries, Services};
use truthmirror_domain::effects::CelebrationSink;
use truthmirror_domain::journal::JournalApi;
use truthmirror_domain::mood::MoodApi;
use truthmirror_domain::playlist::PlaylistApi;
use truthmirror_domain::safety::LengthPolicy;
use truthmirror_domain::transcription::TranscriptionApi;
use truthmirror_infrastructure::config::AppConfig;
use truthmirror_infrastructure::http::{ApiClient, StaticTokenProvider, TranscriptionClient};

/// External collaborators the application layer is wired against
pub struct Collaborators {
    pub mood: Arc<dyn MoodApi>,
    pub journal: Arc<dyn JournalApi>,
    pub playlist: Arc<dyn PlaylistApi>,
    pub transcription: Arc<dyn TranscriptionApi>,
    pub celebration_sink: Arc<dyn CelebrationSink>,
}

pub fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let started_at = Instant::now();

    let token_provider = Arc::new(StaticTokenProvider::new(config.access_token.clone()));
    if config.access_token.is_none() {
        tracing::warn!("No access token configured; backend calls are unauthenticated");
    }

    let api = Arc::new(ApiClient::new(
        config.api_base_url.clone(),
        &config.timeouts,
        token_provider,
    )?);
    let transcription = Arc::new(TranscriptionClient::new(
        config.transcribe_url.clone(),
        &config.timeouts,
    )?);
    info!(
        "✓ HTTP clients ready api={} transcribe={} ({}ms)",
        config.api_base_url,
        config.transcribe_url,
        started_at.elapsed().as_millis()
    );

    let collaborators = Collaborators {
        mood: api.clone(),
        journal: api.clone(),
        playlist: api,
        transcription,
        celebration_sink: Arc::new(LogCelebrationSink),
    };

    Ok(assemble(
        collaborators,
        &config.mood_range,
        config.length_policy,
    ))
}

/// Wire services, queries and the mood session over the given collaborators
pub fn assemble(
    collaborators: Collaborators,
    mood_range: &str,
    length_policy: LengthPolicy,
) -> AppState {
    let store = Arc::new(StreakStateStore::new(collaborators.mood.clone()));
    let session = Arc::new(MoodSession::new(store, collaborators.celebration_sink));

    let services = Services {
        journal: Arc::new(JournalService::new(collaborators.journal, length_policy)),
        playlist: Arc::new(PlaylistService::new(collaborators.playlist)),
        transcription: Arc::new(VoiceTranscriptionService::new(collaborators.transcription)),
    };
    let queries = Queries {
        mood_stats: Arc::new(MoodStatsQueries::new(collaborators.mood, mood_range)),
    };

    info!(
        "✓ App state assembled range={} length_policy={:?}",
        mood_range, length_policy
    );

    AppState {
        session,
        services,
        queries,
        length_policy,
    }
}

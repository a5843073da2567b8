use std::sync::Arc;

use crate::application::queries::MoodStatsQueries;
use crate::application::services::{JournalService, PlaylistService, VoiceTranscriptionService};
use crate::application::state::MoodSession;
use truthmirror_domain::safety::LengthPolicy;

pub struct Services {
    pub journal: Arc<JournalService>,
    pub playlist: Arc<PlaylistService>,
    pub transcription: Arc<VoiceTranscriptionService>,
}

pub struct Queries {
    pub mood_stats: Arc<MoodStatsQueries>,
}

/// Everything a command needs, built once at startup
pub struct AppState {
    pub session: Arc<MoodSession>,
    pub services: Services,
    pub queries: Queries,
    pub length_policy: LengthPolicy,
}

mod celebration_sink;
mod journal_service;
mod playlist_service;
mod transcription_service;

pub use celebration_sink::LogCelebrationSink;
pub use journal_service::{JournalService, HISTORY_LIMIT};
pub use playlist_service::PlaylistService;
pub use transcription_service::VoiceTranscriptionService;

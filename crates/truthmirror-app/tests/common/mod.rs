//! Hand-written collaborators for driving the app layer without a backend
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use truthmirror_domain::effects::{Celebration, CelebrationSink};
use truthmirror_domain::journal::{JournalApi, JournalEntry, SavedEntry, TodayEntry};
use truthmirror_domain::mood::{DailyMood, MoodAnalysis, MoodApi, Valence};
use truthmirror_domain::playlist::{PlaylistApi, PlaylistResponse};
use truthmirror_domain::safety::LengthPolicy;
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::streak::StreakPayload;
use truthmirror_domain::transcription::{TranscriptionApi, TranscriptionResponse};
use truthmirror_lib::presentation::bootstrap::{assemble, Collaborators};
use truthmirror_lib::presentation::state::AppState;

// ============================================================
// Mood API
// ============================================================

#[derive(Default)]
pub struct MockMoodApi {
    pub streaks: Mutex<VecDeque<Result<StreakPayload, DomainError>>>,
    pub daily: Mutex<Vec<DailyMood>>,
    pub today: Mutex<Option<Result<Option<MoodAnalysis>, DomainError>>>,
    pub ranges: Mutex<Vec<String>>,
}

impl MockMoodApi {
    pub fn push_streak(&self, mood_type: &str, length: i64) {
        self.streaks.lock().unwrap().push_back(Ok(StreakPayload {
            mood_type: Some(mood_type.to_string()),
            length,
        }));
    }

    pub fn push_streak_error(&self, err: DomainError) {
        self.streaks.lock().unwrap().push_back(Err(err));
    }

    pub fn set_daily(&self, rows: &[(&str, &str)]) {
        *self.daily.lock().unwrap() = rows
            .iter()
            .map(|(date, valence)| DailyMood {
                date: date.to_string(),
                valence: Some(valence.to_string()),
                ..Default::default()
            })
            .collect();
    }

    pub fn set_today(&self, result: Result<Option<MoodAnalysis>, DomainError>) {
        *self.today.lock().unwrap() = Some(result);
    }
}

#[async_trait]
impl MoodApi for MockMoodApi {
    async fn fetch_streak(&self) -> Result<StreakPayload, DomainError> {
        self.streaks
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Network("no scripted streak".to_string())))
    }

    async fn fetch_daily_moods(&self, range: &str) -> Result<Vec<DailyMood>, DomainError> {
        self.ranges.lock().unwrap().push(range.to_string());
        Ok(self.daily.lock().unwrap().clone())
    }

    async fn fetch_today_mood(&self) -> Result<Option<MoodAnalysis>, DomainError> {
        self.today.lock().unwrap().clone().unwrap_or(Ok(None))
    }
}

// ============================================================
// Journal API
// ============================================================

pub struct MockJournalApi {
    pub saved_id: Mutex<Option<i64>>,
    pub analysis: Mutex<Result<MoodAnalysis, DomainError>>,
    pub history: Mutex<Vec<JournalEntry>>,
    pub today: Mutex<TodayEntry>,
    pub saved: Mutex<Vec<String>>,
    pub analyzed: Mutex<Vec<i64>>,
}

impl Default for MockJournalApi {
    fn default() -> Self {
        Self {
            saved_id: Mutex::new(Some(1)),
            analysis: Mutex::new(Ok(MoodAnalysis::default())),
            history: Mutex::new(Vec::new()),
            today: Mutex::new(TodayEntry::default()),
            saved: Mutex::new(Vec::new()),
            analyzed: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl JournalApi for MockJournalApi {
    async fn save_entry(&self, content: &str) -> Result<SavedEntry, DomainError> {
        self.saved.lock().unwrap().push(content.to_string());
        Ok(SavedEntry {
            journal_entry_id: *self.saved_id.lock().unwrap(),
        })
    }

    async fn analyze_entry(&self, journal_entry_id: i64) -> Result<MoodAnalysis, DomainError> {
        self.analyzed.lock().unwrap().push(journal_entry_id);
        self.analysis.lock().unwrap().clone()
    }

    async fn today_entry(&self) -> Result<TodayEntry, DomainError> {
        Ok(self.today.lock().unwrap().clone())
    }

    async fn history(&self) -> Result<Vec<JournalEntry>, DomainError> {
        Ok(self.history.lock().unwrap().clone())
    }
}

// ============================================================
// Playlists, transcription, celebrations
// ============================================================

pub struct MockPlaylistApi {
    pub response: Mutex<Result<(), DomainError>>,
    pub requested: Mutex<Vec<Valence>>,
}

impl Default for MockPlaylistApi {
    fn default() -> Self {
        Self {
            response: Mutex::new(Ok(())),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlaylistApi for MockPlaylistApi {
    async fn playlists_for(&self, mood: Valence) -> Result<PlaylistResponse, DomainError> {
        self.requested.lock().unwrap().push(mood);
        self.response.lock().unwrap().clone()?;
        Ok(PlaylistResponse {
            mood,
            playlists: Vec::new(),
            from_cache: false,
        })
    }
}

pub struct MockTranscriptionApi {
    pub response: Mutex<Result<TranscriptionResponse, DomainError>>,
    pub uploads: Mutex<Vec<(usize, String)>>,
}

impl Default for MockTranscriptionApi {
    fn default() -> Self {
        Self {
            response: Mutex::new(Ok(TranscriptionResponse::default())),
            uploads: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TranscriptionApi for MockTranscriptionApi {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<TranscriptionResponse, DomainError> {
        self.uploads
            .lock()
            .unwrap()
            .push((audio.len(), filename.to_string()));
        self.response.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub celebrations: Mutex<Vec<Celebration>>,
}

impl CelebrationSink for RecordingSink {
    fn celebrate(&self, celebration: &Celebration) {
        self.celebrations.lock().unwrap().push(celebration.clone());
    }
}

// ============================================================
// Harness
// ============================================================

pub struct Harness {
    pub state: AppState,
    pub mood: Arc<MockMoodApi>,
    pub journal: Arc<MockJournalApi>,
    pub playlist: Arc<MockPlaylistApi>,
    pub transcription: Arc<MockTranscriptionApi>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_policy(LengthPolicy::AsShipped)
    }

    pub fn with_policy(policy: LengthPolicy) -> Self {
        let mood = Arc::new(MockMoodApi::default());
        let journal = Arc::new(MockJournalApi::default());
        let playlist = Arc::new(MockPlaylistApi::default());
        let transcription = Arc::new(MockTranscriptionApi::default());
        let sink = Arc::new(RecordingSink::default());

        let state = assemble(
            Collaborators {
                mood: mood.clone(),
                journal: journal.clone(),
                playlist: playlist.clone(),
                transcription: transcription.clone(),
                celebration_sink: sink.clone(),
            },
            "1m",
            policy,
        );

        Self {
            state,
            mood,
            journal,
            playlist,
            transcription,
            sink,
        }
    }

    pub fn celebration_count(&self) -> usize {
        self.sink.celebrations.lock().unwrap().len()
    }
}

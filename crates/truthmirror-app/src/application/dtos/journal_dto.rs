use serde::Serialize;

use super::{MoodSnapshotDto, TodayMoodDto};
use truthmirror_domain::journal::TodayEntry;
use truthmirror_domain::mood::MoodAnalysis;
use truthmirror_domain::playlist::PlaylistResponse;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitEntryResultDto {
    pub journal_entry_id: i64,
    /// None when the entry was saved but the analysis call failed
    pub analysis: Option<MoodAnalysis>,
    pub flagged: bool,
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptDto {
    pub text: String,
    pub bytes: usize,
}

/// Entry submission plus the mood state re-derived afterwards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitEntryResponseDto {
    pub entry: SubmitEntryResultDto,
    pub mood: MoodSnapshotDto,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodayOverviewDto {
    pub entry: TodayEntry,
    pub mood: Option<TodayMoodDto>,
    pub playlists: Option<PlaylistResponse>,
}

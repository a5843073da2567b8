use serde::Serialize;

pub const USER_AGENT: &str = concat!("TruthMirror/", env!("CARGO_PKG_VERSION"));

/// Longest slice of an error body carried into an error message
pub(super) const ERROR_BODY_LIMIT: usize = 500;

/// Backend paths, relative to the configured API base URL
pub mod endpoints {
    pub const STREAK: &str = "journals/moods/streak";
    pub const DAILY_MOODS: &str = "journals/moods/daily";
    pub const TODAY_MOOD: &str = "journals/mood/today";
    pub const TODAY_ENTRY: &str = "journals/today";
    pub const HISTORY: &str = "journals/history";
    pub const ENTRIES: &str = "journals";
    pub const ANALYZE: &str = "journals/analyze";
    pub const PLAYLISTS: &str = "journals/playlists";
}

#[derive(Debug, Serialize)]
pub(super) struct NewEntryRequest<'a> {
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnalyzeRequest {
    pub journal_entry_id: i64,
}

/// Character-safe prefix of a response body for logs and error messages
pub(super) fn truncate_body(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

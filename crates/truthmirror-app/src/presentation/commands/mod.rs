mod journal;
mod media;
mod mood;
mod system;

pub use journal::*;
pub use media::*;
pub use mood::*;
pub use system::*;

use serde::Serialize;
use serde_json::Value;

use crate::presentation::cli::{join_words, Command};
use crate::presentation::error::CommandError;
use crate::presentation::state::AppState;

/// Run one CLI command against the app state and return its JSON result
pub async fn dispatch(state: &AppState, command: Command) -> Result<Value, CommandError> {
    match command {
        Command::Mood => to_json(refresh_mood(state).await),
        Command::Stats { range } => to_json(get_mood_stats(state, range.as_deref()).await?),
        Command::Calendar { range } => {
            to_json(get_mood_calendar(state, range.as_deref()).await?)
        }
        Command::Today => to_json(get_today(state).await?),
        Command::Submit { content } => {
            to_json(submit_journal_entry(state, &join_words(&content)).await?)
        }
        Command::Check { content } => to_json(check_journal_entry(state, &join_words(&content))?),
        Command::History => to_json(get_journal_history(state).await?),
        Command::Playlists { emotion } => to_json(get_playlists(state, &join_words(&emotion)).await),
        Command::Transcribe { path } => to_json(transcribe_recording(state, &path).await?),
        Command::Log {
            level,
            target,
            fields,
            message,
        } => {
            log_from_client(level, target, join_words(&message), fields)?;
            to_json(get_log_dir())
        }
        Command::Version => to_json(get_app_version()),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, CommandError> {
    Ok(serde_json::to_value(value)?)
}

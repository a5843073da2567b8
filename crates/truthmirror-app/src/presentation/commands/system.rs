use log::warn;
use truthmirror_infrastructure::logging::{self, ClientLog};

use crate::presentation::error::CommandError;

pub fn get_app_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let profile = if cfg!(debug_assertions) {
        "Debug"
    } else {
        "Release"
    };
    format!("{} ({})", version, profile)
}

/// Forward a client log line; `fields` must be a JSON document when present
pub fn log_from_client(
    level: String,
    target: String,
    message: String,
    fields: Option<String>,
) -> Result<(), CommandError> {
    let parsed_fields = match fields {
        Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("[log] Rejected client log fields for target {}: {}", target, e);
                return Err(CommandError::invalid_input(format!(
                    "fields is not valid JSON: {}",
                    e
                )));
            }
        },
        None => None,
    };

    logging::log_from_client(&ClientLog {
        level,
        target,
        message,
        fields: parsed_fields,
    });
    Ok(())
}

pub fn get_log_dir() -> Option<String> {
    logging::log_dir().map(|dir| dir.display().to_string())
}

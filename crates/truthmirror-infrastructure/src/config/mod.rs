mod timeouts;

pub use timeouts::TimeoutConfig;

use log::warn;
use std::path::PathBuf;
use std::time::Duration;
use truthmirror_domain::safety::LengthPolicy;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TRANSCRIBE_URL: &str = "http://localhost:8002/api/transcribe";
pub const DEFAULT_MOOD_RANGE: &str = "1m";

pub const ENV_API_BASE_URL: &str = "TRUTHMIRROR_API_BASE_URL";
pub const ENV_TRANSCRIBE_URL: &str = "TRUTHMIRROR_TRANSCRIBE_URL";
pub const ENV_ACCESS_TOKEN: &str = "TRUTHMIRROR_ACCESS_TOKEN";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "TRUTHMIRROR_HTTP_TIMEOUT_SECS";
pub const ENV_MOOD_RANGE: &str = "TRUTHMIRROR_MOOD_RANGE";
pub const ENV_LOG_DIR: &str = "TRUTHMIRROR_LOG_DIR";
pub const ENV_LENGTH_POLICY: &str = "TRUTHMIRROR_ENTRY_LENGTH_POLICY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Always ends with `/` so endpoint paths join under it
    pub api_base_url: Url,
    pub transcribe_url: Url,
    pub access_token: Option<String>,
    pub timeouts: TimeoutConfig,
    pub mood_range: String,
    pub log_dir: PathBuf,
    pub length_policy: LengthPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is normal
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable optional values fall
    /// back to their defaults with a warning; only malformed URLs are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = parse_url(
            ENV_API_BASE_URL,
            get(ENV_API_BASE_URL).as_deref().unwrap_or(DEFAULT_API_BASE_URL),
        )
        .map(with_trailing_slash)?;
        let transcribe_url = parse_url(
            ENV_TRANSCRIBE_URL,
            get(ENV_TRANSCRIBE_URL)
                .as_deref()
                .unwrap_or(DEFAULT_TRANSCRIBE_URL),
        )?;

        let mut timeouts = TimeoutConfig::default();
        if let Some(raw) = get(ENV_HTTP_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    timeouts = timeouts.with_http_request(Duration::from_secs(secs));
                }
                _ => warn!(
                    "[config] ignoring {}={:?}, using {}s",
                    ENV_HTTP_TIMEOUT_SECS,
                    raw,
                    timeouts.http_request.as_secs()
                ),
            }
        }

        let length_policy = match get(ENV_LENGTH_POLICY) {
            Some(raw) => LengthPolicy::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "[config] unknown {}={:?}, keeping as-shipped length rule",
                    ENV_LENGTH_POLICY, raw
                );
                LengthPolicy::AsShipped
            }),
            None => LengthPolicy::AsShipped,
        };

        Ok(Self {
            api_base_url,
            transcribe_url,
            access_token: get(ENV_ACCESS_TOKEN),
            timeouts,
            mood_range: get(ENV_MOOD_RANGE).unwrap_or_else(|| DEFAULT_MOOD_RANGE.to_string()),
            log_dir: get(ENV_LOG_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(default_log_dir),
            length_policy,
        })
    }
}

pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("truthmirror")
        .join("logs")
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        var,
        value: value.to_string(),
        source,
    })
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

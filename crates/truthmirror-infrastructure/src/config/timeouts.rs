use std::time::Duration;

/// Timeouts for calls to external collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    /// Journal, mood and playlist API requests
    pub http_request: Duration,

    /// Audio upload to the transcription service
    pub transcription_upload: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            http_request: Duration::from_secs(30),
            transcription_upload: Duration::from_secs(120),
        }
    }
}

impl TimeoutConfig {
    pub fn with_http_request(mut self, timeout: Duration) -> Self {
        self.http_request = timeout;
        self
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub const VOICE_NOTE_FILENAME: &str = "voice_note.wav";
pub const NO_TRANSCRIPT: &str = "No transcript found.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    #[serde(default)]
    pub transcription: Option<String>,
}

impl TranscriptionResponse {
    /// Transcribed text, or the fixed placeholder when the service returned nothing
    pub fn text_or_placeholder(&self) -> String {
        match self.transcription.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_TRANSCRIPT.to_string(),
        }
    }
}

/// External speech-to-text endpoint. Non-2xx responses map to
/// `DomainError::ExternalService`; there is no retry.
#[async_trait]
pub trait TranscriptionApi: Send + Sync {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<TranscriptionResponse, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_for_missing_or_blank() {
        assert_eq!(TranscriptionResponse::default().text_or_placeholder(), NO_TRANSCRIPT);
        let blank = TranscriptionResponse {
            transcription: Some("  ".to_string()),
        };
        assert_eq!(blank.text_or_placeholder(), NO_TRANSCRIPT);
    }

    #[test]
    fn test_text_is_returned() {
        let response: TranscriptionResponse =
            serde_json::from_str(r#"{"transcription": "today was calm"}"#).unwrap();
        assert_eq!(response.text_or_placeholder(), "today was calm");
    }
}

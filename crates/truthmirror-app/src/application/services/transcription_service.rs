use log::{info, warn};
use std::sync::Arc;

use crate::application::dtos::TranscriptDto;
use truthmirror_domain::shared::DomainError;
use truthmirror_domain::transcription::{TranscriptionApi, VOICE_NOTE_FILENAME};

pub const NO_RECORDING_MESSAGE: &str = "Microphone access denied or unavailable.";

pub struct VoiceTranscriptionService {
    transcription_api: Arc<dyn TranscriptionApi>,
}

impl VoiceTranscriptionService {
    pub fn new(transcription_api: Arc<dyn TranscriptionApi>) -> Self {
        Self { transcription_api }
    }

    /// Upload one recording. Empty audio means the recorder never started.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<TranscriptDto, DomainError> {
        if audio.is_empty() {
            warn!("[voice] no audio captured");
            return Err(DomainError::Validation(NO_RECORDING_MESSAGE.to_string()));
        }

        let bytes = audio.len();
        let response = self
            .transcription_api
            .transcribe(audio, VOICE_NOTE_FILENAME)
            .await?;
        let text = response.text_or_placeholder();
        info!("[voice] transcript ready bytes={} chars={}", bytes, text.chars().count());

        Ok(TranscriptDto { text, bytes })
    }
}

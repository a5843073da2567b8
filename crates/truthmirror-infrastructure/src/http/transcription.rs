use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use url::Url;

use truthmirror_domain::shared::DomainError;
use truthmirror_domain::transcription::{TranscriptionApi, TranscriptionResponse};

use super::result_ext::ResultExt;
use crate::config::TimeoutConfig;

/// Multipart upload to the speech-to-text service
pub struct TranscriptionClient {
    client: Client,
    url: Url,
}

impl TranscriptionClient {
    pub fn new(url: Url, timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeouts.transcription_upload)
            .build()
            .context("Failed to create transcription HTTP client")?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl TranscriptionApi for TranscriptionClient {
    async fn transcribe(
        &self,
        audio: Vec<u8>,
        filename: &str,
    ) -> Result<TranscriptionResponse, DomainError> {
        const OPERATION: &str = "Upload recording";

        let size = audio.len();
        let part = Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("audio/wav")
            .to_transport_err(OPERATION)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.url.clone())
            .multipart(form)
            .send()
            .await
            .to_transport_err(OPERATION)?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or(status.as_str());
            warn!("[voice] transcription upload failed status={} bytes={}", status, size);
            return Err(DomainError::ExternalService(format!(
                "Upload failed: {}",
                reason
            )));
        }

        let transcript: TranscriptionResponse =
            response.json().await.to_decode_err(OPERATION)?;
        info!(
            "[voice] transcription received bytes={} chars={}",
            size,
            transcript
                .transcription
                .as_deref()
                .map(|t| t.chars().count())
                .unwrap_or(0)
        );
        Ok(transcript)
    }
}

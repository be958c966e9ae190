use async_trait::async_trait;
use log::{debug, error};
use reqwest::multipart::{Form, Part};

use super::{ProviderConfig, TranscriptionProvider, TranscriptionRequest};
use crate::audio::mime_type;
use crate::error::ProviderError;
use crate::transcript::RawTranscription;

/// Client for the OpenAI audio transcription endpoint.
///
/// No timeout is set; the request waits as long as reqwest's defaults allow.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: &ProviderConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url)
    }
}

#[async_trait]
impl TranscriptionProvider for OpenAiClient {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<RawTranscription, ProviderError> {
        let file = tokio::fs::File::open(&request.audio_path).await?;
        let length = file.metadata().await?.len();
        let file_name = request
            .audio_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let audio = Part::stream_with_length(reqwest::Body::from(file), length)
            .file_name(file_name)
            .mime_str(mime_type(&request.audio_path))?;

        let form = Form::new()
            .part("file", audio)
            .text("model", request.model)
            .text("response_format", request.response_format)
            .text("temperature", request.temperature.to_string())
            .text("language", request.language)
            .text("prompt", request.prompt);

        let url = self.endpoint();
        debug!(
            "Uploading {} ({} bytes) to {} with model {}",
            request.audio_path.display(),
            length,
            url,
            request.model
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Transcription request failed with status {status}");
            return Err(ProviderError::Api { status, body });
        }

        Ok(RawTranscription::from_json(body)?)
    }
}

//! Ollama LLM session implementation
//!
//! `/api/generate` is stateless: every prompt is sent in full, so a session
//! is just the model name plus a handle to the shared HTTP client.

use super::error::{OllamaError, Result};
use super::protocol::{
    GenerateChunk, GenerateOptions, GenerateRequest, NdjsonDecoder, decode_chunk, error_message,
};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use reviewbot_application::{GatewayError, LlmSession, StreamHandle};
use reviewbot_domain::{Model, StreamEvent};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Capacity of the channel between the body reader task and the consumer
const STREAM_CHANNEL_CAPACITY: usize = 64;

pub struct OllamaSession {
    client: Client,
    base_url: String,
    model: Model,
    options: GenerateOptions,
}

impl OllamaSession {
    pub fn new(client: Client, base_url: String, model: Model, options: GenerateOptions) -> Self {
        Self {
            client,
            base_url,
            model,
            options,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// POST the prompt and check the status line.
    async fn post_generate(&self, prompt: &str, stream: bool) -> Result<reqwest::Response> {
        let request = GenerateRequest {
            model: self.model.as_str(),
            prompt,
            stream,
            options: self.options,
        };

        debug!(
            model = %self.model,
            stream,
            prompt_bytes = prompt.len(),
            "POST /api/generate"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        if status == StatusCode::NOT_FOUND {
            return Err(OllamaError::ModelNotFound(message));
        }
        Err(OllamaError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Forward one decoded line. Returns false once the stream is finished
/// or the receiver is gone.
async fn forward_line(
    line: &str,
    full_text: &mut String,
    tx: &mpsc::Sender<StreamEvent>,
) -> bool {
    let chunk: GenerateChunk = match decode_chunk(line) {
        Ok(chunk) => chunk,
        Err(e) => {
            warn!("Ollama stream error: {}", e);
            let _ = tx.send(StreamEvent::Error(e.to_string())).await;
            return false;
        }
    };

    if !chunk.response.is_empty() {
        full_text.push_str(&chunk.response);
        if tx.send(StreamEvent::Delta(chunk.response)).await.is_err() {
            return false; // Receiver dropped
        }
    }

    if chunk.done {
        debug!(
            eval_count = ?chunk.eval_count,
            total_duration_ns = ?chunk.total_duration,
            "Ollama stream completed"
        );
        let _ = tx
            .send(StreamEvent::Completed(std::mem::take(full_text)))
            .await;
        return false;
    }

    true
}

/// Read the NDJSON body to the end, translating it into [`StreamEvent`]s.
async fn pump_stream(response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
    let mut stream = response.bytes_stream();
    let mut decoder = NdjsonDecoder::new();
    let mut full_text = String::new();

    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => {
                for line in decoder.push(&bytes) {
                    if !forward_line(&line, &mut full_text, &tx).await {
                        return;
                    }
                }
            }
            Err(e) => {
                warn!("Ollama stream interrupted: {}", e);
                let event = if e.is_timeout() {
                    StreamEvent::TimedOut
                } else {
                    StreamEvent::Error(e.to_string())
                };
                let _ = tx.send(event).await;
                return;
            }
        }
    }

    if let Some(line) = decoder.finish() {
        forward_line(&line, &mut full_text, &tx).await;
    }
}

#[async_trait]
impl LlmSession for OllamaSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        let response = self.post_generate(content, false).await?;
        let body = response.text().await.map_err(OllamaError::from)?;
        let chunk = decode_chunk(&body)?;
        Ok(chunk.response)
    }

    async fn send_streaming(
        &self,
        content: &str,
    ) -> std::result::Result<StreamHandle, GatewayError> {
        let response = self.post_generate(content, true).await?;
        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(pump_stream(response, tx));
        Ok(StreamHandle::new(rx))
    }
}

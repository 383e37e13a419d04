//! Ollama LLM Gateway implementation

use super::error::OllamaError;
use super::protocol::{GenerateOptions, TagsResponse, error_message};
use super::session::OllamaSession;
use async_trait::async_trait;
use reqwest::Client;
use reviewbot_application::{GatewayError, LlmGateway, LlmSession};
use reviewbot_domain::Model;
use std::time::Duration;
use tracing::{debug, info};

/// Default Ollama API endpoint
pub const OLLAMA_DEFAULT_URL: &str = "http://127.0.0.1:11434";

/// Bound on `ping` and model listing, which never wait on generation
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for [`OllamaLlmGateway`]
#[derive(Debug, Clone, PartialEq)]
pub struct OllamaClientConfig {
    pub base_url: String,
    pub options: GenerateOptions,
    /// Whole-request timeout; `None` waits as long as the model takes.
    pub timeout: Option<Duration>,
}

impl Default for OllamaClientConfig {
    fn default() -> Self {
        Self {
            base_url: OLLAMA_DEFAULT_URL.to_string(),
            options: GenerateOptions::default(),
            timeout: None,
        }
    }
}

/// LLM Gateway implementation for a local Ollama server
pub struct OllamaLlmGateway {
    client: Client,
    base_url: String,
    options: GenerateOptions,
    check_timeout: Duration,
}

impl OllamaLlmGateway {
    /// Create a gateway; no request is made until a session sends a prompt.
    pub fn new(config: OllamaClientConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        info!("OllamaLlmGateway initialized for {}", base_url);

        Ok(Self {
            client,
            base_url,
            options: config.options,
            check_timeout: CHECK_TIMEOUT,
        })
    }

    /// Override the bound on `ping` and `available_models`.
    pub fn with_check_timeout(mut self, timeout: Duration) -> Self {
        self.check_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the Ollama server answers at all.
    pub async fn ping(&self) -> bool {
        let request = self.client.get(&self.base_url).timeout(self.check_timeout);
        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Ollama ping failed: {}", e);
                false
            }
        }
    }

    async fn fetch_tags(&self) -> Result<TagsResponse, OllamaError> {
        let response = self
            .client
            .get(format!("{}/api/tags", self.base_url))
            .timeout(self.check_timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OllamaError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| OllamaError::ParseError {
            error: e.to_string(),
            raw: body,
        })
    }
}

#[async_trait]
impl LlmGateway for OllamaLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OllamaSession::new(
            self.client.clone(),
            self.base_url.clone(),
            model.clone(),
            self.options,
        )))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        let tags = self.fetch_tags().await?;
        Ok(tags
            .models
            .into_iter()
            .map(|m| {
                let Ok(model) = m.name.parse::<Model>();
                model
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewbot_domain::StreamEvent;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Read one HTTP request and return its body.
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&raw[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse::<usize>().unwrap())
            .unwrap_or(0);

        while raw.len() < header_end + content_length {
            let n = socket.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
        }

        String::from_utf8_lossy(&raw[header_end..]).to_string()
    }

    /// Serve exactly one HTTP request with a canned response, returning the
    /// request body through the join handle.
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: String,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            request
        });

        (format!("http://{}", addr), handle)
    }

    fn gateway(base_url: String) -> OllamaLlmGateway {
        OllamaLlmGateway::new(OllamaClientConfig {
            base_url,
            ..OllamaClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn trims_trailing_slash() {
        let gateway = gateway("http://localhost:11434/".to_string());
        assert_eq!(gateway.base_url(), "http://localhost:11434");
    }

    #[tokio::test]
    async fn streaming_generate_roundtrip() {
        let body = [
            r#"{"model":"llama2","response":"Label","done":false}"#,
            r#"{"model":"llama2","response":": alpha","done":false}"#,
            r#"{"model":"llama2","response":"","done":true}"#,
        ]
        .join("\n")
            + "\n";
        let (url, server) = serve_once("200 OK", "application/x-ndjson", body).await;

        let session = gateway(url).create_session(&Model::Llama2).await.unwrap();
        let mut handle = session.send_streaming("the prompt").await.unwrap();

        let mut events = Vec::new();
        while let Some(event) = handle.receiver.recv().await {
            events.push(event);
        }
        assert_eq!(
            events.last(),
            Some(&StreamEvent::Completed("Label: alpha".to_string()))
        );

        let request: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(request["model"], "llama2");
        assert_eq!(request["prompt"], "the prompt");
        assert_eq!(request["stream"], true);
    }

    #[tokio::test]
    async fn non_streaming_send_returns_response_text() {
        let body = r#"{"model":"llama2","response":"Label: beta","done":true}"#.to_string();
        let (url, server) = serve_once("200 OK", "application/json", body).await;

        let session = gateway(url).create_session(&Model::Llama2).await.unwrap();
        assert_eq!(session.send("p").await.unwrap(), "Label: beta");

        let request: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(request["stream"], false);
    }

    #[tokio::test]
    async fn missing_model_maps_to_model_not_available() {
        let body = r#"{"error":"model 'llama9' not found, try pulling it first"}"#.to_string();
        let (url, _server) = serve_once("404 Not Found", "application/json", body).await;

        let session = gateway(url)
            .create_session(&"llama9".parse().unwrap())
            .await
            .unwrap();
        let err = session.send_streaming("p").await.err().unwrap();
        assert!(matches!(err, GatewayError::ModelNotAvailable(m) if m.contains("llama9")));
    }

    #[tokio::test]
    async fn available_models_lists_tags() {
        let body = r#"{"models":[{"name":"llama2:latest"},{"name":"mistral"}]}"#.to_string();
        let (url, _server) = serve_once("200 OK", "application/json", body).await;

        let models = gateway(url).available_models().await.unwrap();
        assert_eq!(
            models,
            vec![Model::Custom("llama2:latest".to_string()), Model::Mistral]
        );
        assert!(Model::Llama2.matches_tag(models[0].as_str()));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let gateway = gateway(url);
        assert!(!gateway.ping().await);
        let session = gateway.create_session(&Model::Llama2).await.unwrap();
        let err = session.send_streaming("p").await.err().unwrap();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    /// Accept connections and hold them open without ever answering.
    async fn serve_silently() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn silent_server_fails_checks_instead_of_hanging() {
        let (url, server) = serve_silently().await;
        let gateway = gateway(url).with_check_timeout(Duration::from_millis(200));

        let ping = tokio::time::timeout(Duration::from_secs(3), gateway.ping()).await;
        assert_eq!(ping, Ok(false));

        let models =
            tokio::time::timeout(Duration::from_secs(3), gateway.available_models()).await;
        assert!(matches!(models, Ok(Err(GatewayError::Timeout))));

        server.abort();
    }

    #[test]
    fn checks_are_bounded_by_default() {
        let gateway = gateway(OLLAMA_DEFAULT_URL.to_string());
        assert_eq!(gateway.check_timeout, CHECK_TIMEOUT);
    }

    /// Answer one generate request with a single NDJSON chunk, then stall.
    async fn serve_stalled_stream() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;

            let line = "{\"response\":\"Label\",\"done\":false}\n";
            let head = "HTTP/1.1 200 OK\r\ncontent-type: application/x-ndjson\r\n\
                        transfer-encoding: chunked\r\n\r\n";
            let chunk = format!("{:x}\r\n{}\r\n", line.len(), line);
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(chunk.as_bytes()).await.unwrap();
            socket.flush().await.unwrap();

            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        (format!("http://{}", addr), handle)
    }

    #[tokio::test]
    async fn stalled_stream_reports_timeout() {
        let (url, server) = serve_stalled_stream().await;
        let gateway = OllamaLlmGateway::new(OllamaClientConfig {
            base_url: url,
            timeout: Some(Duration::from_millis(500)),
            ..OllamaClientConfig::default()
        })
        .unwrap();

        let session = gateway.create_session(&Model::Llama2).await.unwrap();
        let handle = session.send_streaming("p").await.unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), handle.collect_text()).await;
        assert!(matches!(result, Ok(Err(GatewayError::Timeout))));

        server.abort();
    }
}

//! Gemini `generateContent` client.
//!
//! One authenticated HTTP channel, built once at startup and shared by every
//! retrieval. Requests ask for `application/json` output constrained by the
//! caller's response schema; the reply envelope is unwrapped down to the text
//! of the first candidate.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{GenerationRequest, Generator, GeneratorError};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Longest error body excerpt kept in [`GeneratorError::Status`]
const MAX_ERROR_MESSAGE_LEN: usize = 300;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GeneratorError> {
        let http = Client::builder()
            .user_agent(concat!("startup-sunsets/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Generator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
        let api_key = self.config.api_key.as_deref().ok_or(GeneratorError::MissingCredential)?;

        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.response_schema
            }
        });

        let endpoint = self.endpoint();
        debug!(%endpoint, model = %self.config.model, "sending generateContent request");

        let response = self.http.post(&endpoint).header("x-goog-api-key", api_key).json(&body).send()?;

        let status = response.status();
        let text = response.text()?;
        debug!(status = status.as_u16(), bytes = text.len(), "generator responded");

        if !status.is_success() {
            return Err(GeneratorError::Status {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        extract_text(&text)
    }
}

/// Pull the concatenated text parts of the first candidate out of a response
/// body. A candidate without text yields an empty string.
fn extract_text(body: &str) -> Result<String, GeneratorError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GeneratorError::MalformedEnvelope(e.to_string()))?;

    let text = envelope
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect::<String>())
        .unwrap_or_default();

    Ok(text)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().chars().take(MAX_ERROR_MESSAGE_LEN).collect(),
    }
}

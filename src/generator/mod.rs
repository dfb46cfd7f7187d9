//! Boundary to the external generative-language service.
//!
//! The rest of the crate only sees the [`Generator`] trait: a prompt plus a
//! response schema goes in, raw response text comes out. [`GeminiClient`] is
//! the production implementation; tests inject scripted fakes.

pub mod gemini;
pub mod schema;

pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, GeminiConfig};
use thiserror::Error;

/// One structured-output request to the generator
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_schema: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("no API key configured (set GEMINI_API_KEY or API_KEY)")]
    MissingCredential,
    #[error("request to generator failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generator returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unreadable generator response: {0}")]
    MalformedEnvelope(String),
}

/// A content generator that honors a JSON response schema.
///
/// Implementations are shared across worker threads, so they must be
/// `Send + Sync`. The returned text is untrusted: callers parse and validate it.
pub trait Generator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError>;
}

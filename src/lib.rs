//! Startup Sunsets - Browse an archive of failed startups generated on demand
//!
//! Case files are not stored anywhere: each category browse or free-text
//! search asks an external generative-language service for a
//! schema-constrained JSON batch, which is normalized into [`CaseFile`]
//! records and shown in a terminal UI. The crate provides:
//!
//! - A [`Generator`] boundary with a Gemini implementation
//! - A [`RetrievalService`] that turns intents into identified records
//! - A view-state [`Controller`] with last-request-wins retrieval handling
//! - An interactive ratatui front end and a small JSON-printing CLI
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use startup_sunsets::catalog::find_category;
//! use startup_sunsets::generator::{GeminiClient, GeminiConfig};
//! use startup_sunsets::RetrievalService;
//!
//! let client = GeminiClient::new(GeminiConfig {
//!     api_key: std::env::var("GEMINI_API_KEY").ok(),
//!     ..GeminiConfig::default()
//! })?;
//! let service = RetrievalService::new(Arc::new(client));
//! let fintech = find_category("fintech").expect("built-in category");
//! for record in service.fetch_by_category(fintech).records() {
//!     println!("{} ({}): {}", record.name, record.lifespan(), record.lesson_learned);
//! }
//! # Ok::<(), startup_sunsets::generator::GeneratorError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod generator;
pub mod logging;
pub mod models;
pub mod retrieval;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use controller::{Controller, RetrievalDispatcher, Screen};
pub use generator::Generator;
pub use models::{CaseFile, CategoryDescriptor};
pub use retrieval::{FetchOutcome, RetrievalService};

//! Retrieval service: user intents in, identified case files out.
//!
//! Each operation builds an instruction, asks the injected [`Generator`] for
//! schema-constrained JSON, and normalizes the reply. Nothing is cached and
//! nothing is retried; every call re-queries the generator.
//!
//! Failures never escape as errors. They come back as
//! [`FetchOutcome::Failed`] so a caller that only wants records can call
//! [`FetchOutcome::into_records`] and treat a failure as an empty batch, while
//! a caller that cares can tell "nothing found" from "service unreachable".

pub mod normalize;
pub mod prompts;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::generator::schema::case_file_schema;
use crate::generator::{GenerationRequest, Generator};
use crate::models::{CaseFile, CategoryDescriptor};
use normalize::normalize_response;

/// Id namespace for query-sourced batches; category batches use the category id
pub const SEARCH_NAMESPACE: &str = "search";

/// A non-empty set of records from one retrieval
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub records: Vec<CaseFile>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Batch),
    /// The generator answered but reported no companies
    Empty,
    /// Transport, service or schema failure, with a human-readable reason
    Failed(String),
}

impl FetchOutcome {
    /// Records of a successful batch; empty for `Empty` and `Failed`
    pub fn records(&self) -> &[CaseFile] {
        match self {
            FetchOutcome::Found(batch) => &batch.records,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<CaseFile> {
        match self {
            FetchOutcome::Found(batch) => batch.records,
            FetchOutcome::Empty | FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

pub struct RetrievalService {
    generator: Arc<dyn Generator>,
    next_batch: AtomicU64,
}

impl RetrievalService {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator, next_batch: AtomicU64::new(0) }
    }

    /// Fetch five failed companies for a category, analyzed through its focus lens
    pub fn fetch_by_category(&self, category: &CategoryDescriptor) -> FetchOutcome {
        info!(category = category.id, focus = category.focus, "fetching category case files");
        self.fetch(prompts::category_prompt(category), category.id)
    }

    /// Deep-dive a named company, or fetch five failures related to a topic
    pub fn fetch_by_query(&self, query: &str) -> FetchOutcome {
        info!(query, "fetching search case files");
        self.fetch(prompts::query_prompt(query), SEARCH_NAMESPACE)
    }

    fn fetch(&self, prompt: String, namespace: &str) -> FetchOutcome {
        let batch = self.next_batch.fetch_add(1, Ordering::Relaxed);
        let request = GenerationRequest { prompt, response_schema: case_file_schema() };

        let text = match self.generator.generate(&request) {
            Ok(text) => text,
            Err(e) => {
                warn!(namespace, batch, error = %e, "generator call failed");
                return FetchOutcome::Failed(e.to_string());
            }
        };

        match normalize_response(&text, namespace, batch) {
            Ok(records) if records.is_empty() => {
                info!(namespace, batch, "generator returned no case files");
                FetchOutcome::Empty
            }
            Ok(records) => {
                info!(namespace, batch, count = records.len(), "case files received");
                FetchOutcome::Found(Batch { records, fetched_at: Utc::now() })
            }
            Err(e) => {
                warn!(namespace, batch, error = %e, "discarding malformed generator response");
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::catalog::find_category;
    use crate::generator::GeneratorError;

    /// Replies with a fixed result and records every prompt it saw
    struct FixedGenerator {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl FixedGenerator {
        fn new(reply: Result<String, u16>) -> Arc<Self> {
            Arc::new(Self { reply, prompts: Mutex::new(Vec::new()) })
        }
    }

    impl Generator for FixedGenerator {
        fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(GeneratorError::Status {
                    status: *status,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    fn five_companies() -> String {
        let items: Vec<_> = (0..5)
            .map(|i| {
                json!({
                    "name": format!("Company {}", i),
                    "industry": "FinTech",
                    "founded": "2015",
                    "founders": "A. Founder",
                    "raised": "$10M",
                    "description": "Did things.",
                    "lessonLearned": "Premature Scaling",
                    "whatIf": "Could have won.",
                    "analogy": "Like a sandcastle.",
                    "mentalModel": "Sunk Cost Fallacy",
                    "pivotStrategy": "Slow down.",
                    "sourceUrl": "https://www.bbc.co.uk/news/example"
                })
            })
            .collect();
        serde_json::Value::Array(items).to_string()
    }

    #[test]
    fn test_fetch_by_category_found() {
        let generator = FixedGenerator::new(Ok(five_companies()));
        let service = RetrievalService::new(generator.clone());
        let fintech = find_category("fintech").unwrap();

        let outcome = service.fetch_by_category(fintech);

        assert_eq!(outcome.records().len(), 5);
        assert!(outcome.records().iter().all(|r| r.id.starts_with("fintech-0-")));
        assert!(outcome.failure().is_none());
        assert!(generator.prompts.lock().unwrap()[0].contains("Regulation & Capital"));
    }

    #[test]
    fn test_fetch_by_query_uses_search_namespace() {
        let service = RetrievalService::new(FixedGenerator::new(Ok(five_companies())));

        let records = service.fetch_by_query("Neobanks").into_records();

        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.id.starts_with("search-0-")));
    }

    #[test]
    fn test_batches_never_share_ids() {
        let service = RetrievalService::new(FixedGenerator::new(Ok(five_companies())));
        let fintech = find_category("fintech").unwrap();

        let first = service.fetch_by_category(fintech).into_records();
        let second = service.fetch_by_category(fintech).into_records();

        assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
    }

    #[test]
    fn test_generator_error_is_failed_outcome() {
        let service = RetrievalService::new(FixedGenerator::new(Err(503)));

        let outcome = service.fetch_by_query("Cloud Kitchens");

        assert!(outcome.records().is_empty());
        assert!(outcome.failure().unwrap().contains("503"));
    }

    #[test]
    fn test_malformed_response_is_failed_outcome() {
        let service = RetrievalService::new(FixedGenerator::new(Ok("not json".to_string())));

        let outcome = service.fetch_by_query("Cloud Kitchens");

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_empty_array_is_empty_outcome() {
        let service = RetrievalService::new(FixedGenerator::new(Ok("[]".to_string())));

        assert_eq!(service.fetch_by_query("Nothing"), FetchOutcome::Empty);
    }
}

use serde::{Deserialize, Serialize};

/// A failed-startup record as displayed to the user.
///
/// `id` is assigned locally at normalization time and is only unique within
/// the batch (and service instance) that produced it. Every other field is
/// generated prose and is never checked for factual accuracy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFile {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub founded: String,
    pub founders: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunset: Option<String>,
    pub raised: String,
    pub description: String,
    pub lesson_learned: String,
    pub what_if: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
    pub analogy: String,
    pub mental_model: String,
    pub pivot_strategy: String,
    pub source_url: String,
}

impl CaseFile {
    /// Operating period for list rows, e.g. `2015 - 2019` or `2015 - ?`
    pub fn lifespan(&self) -> String {
        format!("{} - {}", self.founded, self.sunset.as_deref().unwrap_or("?"))
    }
}

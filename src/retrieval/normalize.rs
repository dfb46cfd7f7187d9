//! Turns raw generator text into identified, sanitized case files.
//!
//! The generator is asked for a schema-constrained JSON array, but nothing
//! guarantees it complied. A batch is accepted whole or not at all: any parse
//! error, missing required field or blank required field rejects it.

use serde::Deserialize;
use thiserror::Error;

use crate::models::CaseFile;
use crate::utils::sanitize_generated_text;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("response is not a JSON array of case files: {0}")]
    Parse(String),
    #[error("case file {index} has an empty '{field}' field")]
    BlankField { index: usize, field: &'static str },
}

/// A case file exactly as the generator emitted it, before an id is assigned
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedCaseFile {
    name: String,
    industry: String,
    founded: String,
    founders: String,
    #[serde(default)]
    sunset: Option<String>,
    raised: String,
    description: String,
    lesson_learned: String,
    what_if: String,
    #[serde(default)]
    focus_area: Option<String>,
    analogy: String,
    mental_model: String,
    pivot_strategy: String,
    source_url: String,
}

impl GeneratedCaseFile {
    fn required_fields(&self) -> [(&'static str, &str); 12] {
        [
            ("name", self.name.as_str()),
            ("industry", self.industry.as_str()),
            ("founded", self.founded.as_str()),
            ("founders", self.founders.as_str()),
            ("raised", self.raised.as_str()),
            ("description", self.description.as_str()),
            ("lessonLearned", self.lesson_learned.as_str()),
            ("whatIf", self.what_if.as_str()),
            ("analogy", self.analogy.as_str()),
            ("mentalModel", self.mental_model.as_str()),
            ("pivotStrategy", self.pivot_strategy.as_str()),
            ("sourceUrl", self.source_url.as_str()),
        ]
    }

    fn into_case_file(self, id: String) -> CaseFile {
        CaseFile {
            id,
            name: clean(&self.name),
            industry: clean(&self.industry),
            founded: clean(&self.founded),
            founders: clean(&self.founders),
            sunset: clean_optional(self.sunset),
            raised: clean(&self.raised),
            description: clean(&self.description),
            lesson_learned: clean(&self.lesson_learned),
            what_if: clean(&self.what_if),
            focus_area: clean_optional(self.focus_area),
            analogy: clean(&self.analogy),
            mental_model: clean(&self.mental_model),
            pivot_strategy: clean(&self.pivot_strategy),
            source_url: clean(&self.source_url),
        }
    }
}

fn clean(text: &str) -> String {
    sanitize_generated_text(text).trim().to_string()
}

fn clean_optional(text: Option<String>) -> Option<String> {
    text.map(|t| clean(&t)).filter(|t| !t.is_empty())
}

/// Parse a generator response into case files with ids `{namespace}-{batch}-{index}`.
///
/// Blank text is an empty batch, mirroring a generator that found nothing.
pub fn normalize_response(
    text: &str,
    namespace: &str,
    batch: u64,
) -> Result<Vec<CaseFile>, NormalizeError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let generated: Vec<GeneratedCaseFile> =
        serde_json::from_str(text.trim()).map_err(|e| NormalizeError::Parse(e.to_string()))?;

    for (index, item) in generated.iter().enumerate() {
        // Blank after sanitizing counts as blank: escape codes alone are not content
        if let Some((field, _)) =
            item.required_fields().into_iter().find(|(_, value)| clean(value).is_empty())
        {
            return Err(NormalizeError::BlankField { index, field });
        }
    }

    Ok(generated
        .into_iter()
        .enumerate()
        .map(|(index, item)| item.into_case_file(format!("{}-{}-{}", namespace, batch, index)))
        .collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn generated_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "industry": "FinTech",
            "founded": "2014",
            "founders": "Jane Doe",
            "sunset": "2020",
            "raised": "$120M",
            "description": "Neobank for freelancers.",
            "lessonLearned": "Regulatory Debt",
            "whatIf": "It might have become a chartered bank.",
            "focusArea": "Regulation",
            "analogy": "Like opening a restaurant without a health permit.",
            "mentalModel": "Compliance Moat",
            "pivotStrategy": "Partner with a sponsor bank first.",
            "sourceUrl": "https://www.theverge.com/example"
        })
    }

    #[test]
    fn test_assigns_batch_scoped_ids() {
        let text = json!([generated_json("A"), generated_json("B"), generated_json("C")]).to_string();
        let records = normalize_response(&text, "fintech", 7).unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["fintech-7-0", "fintech-7-1", "fintech-7-2"]);
        assert_eq!(records[1].name, "B");
        assert_eq!(records[0].lesson_learned, "Regulatory Debt");
    }

    #[test]
    fn test_blank_text_is_empty_batch() {
        assert!(normalize_response("", "search", 0).unwrap().is_empty());
        assert!(normalize_response("  \n", "search", 0).unwrap().is_empty());
        assert!(normalize_response("[]", "search", 0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = normalize_response("Sorry, I can't help with that.", "search", 0).unwrap_err();
        assert!(matches!(err, NormalizeError::Parse(_)));
    }

    #[test]
    fn test_object_instead_of_array_is_parse_error() {
        let text = generated_json("Solo").to_string();
        assert!(matches!(normalize_response(&text, "search", 0), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_missing_required_field_rejects_whole_batch() {
        let mut broken = generated_json("Broken");
        broken.as_object_mut().unwrap().remove("pivotStrategy");
        let text = json!([generated_json("Fine"), broken]).to_string();

        let err = normalize_response(&text, "saas", 1).unwrap_err();
        match err {
            NormalizeError::Parse(message) => assert!(message.contains("pivotStrategy")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_blank_required_field_rejects_whole_batch() {
        let mut blank = generated_json("Blank");
        blank["founders"] = json!("   ");
        let text = json!([generated_json("Fine"), blank]).to_string();

        assert_eq!(
            normalize_response(&text, "saas", 1).unwrap_err(),
            NormalizeError::BlankField { index: 1, field: "founders" }
        );
    }

    #[test]
    fn test_escape_only_field_counts_as_blank() {
        let mut sneaky = generated_json("Sneaky");
        sneaky["raised"] = json!("\u{1b}[2J");
        let text = json!([sneaky]).to_string();

        assert_eq!(
            normalize_response(&text, "saas", 1).unwrap_err(),
            NormalizeError::BlankField { index: 0, field: "raised" }
        );
    }

    #[test]
    fn test_optional_fields_absent_or_blank_become_none() {
        let mut absent = generated_json("Absent");
        absent.as_object_mut().unwrap().remove("sunset");
        absent.as_object_mut().unwrap().remove("focusArea");
        let mut blank = generated_json("Blank");
        blank["sunset"] = json!("");

        let text = json!([absent, blank]).to_string();
        let records = normalize_response(&text, "search", 2).unwrap();

        assert_eq!(records[0].sunset, None);
        assert_eq!(records[0].focus_area, None);
        assert_eq!(records[1].sunset, None);
        assert_eq!(records[1].focus_area.as_deref(), Some("Regulation"));
    }

    #[test]
    fn test_text_is_sanitized_and_trimmed() {
        let mut noisy = generated_json("\u{1b}[31m Quibi \u{1b}[0m");
        noisy["description"] = json!("Short-form video.\r\nShut down in 2020.");
        let text = json!([noisy]).to_string();

        let records = normalize_response(&text, "search", 0).unwrap();
        assert_eq!(records[0].name, "Quibi");
        assert_eq!(records[0].description, "Short-form video.\nShut down in 2020.");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut extra = generated_json("Extra");
        extra["confidence"] = json!("high");
        let text = json!([extra]).to_string();

        assert_eq!(normalize_response(&text, "search", 0).unwrap().len(), 1);
    }
}

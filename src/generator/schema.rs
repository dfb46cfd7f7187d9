use serde_json::{Value, json};

/// Fields every generated case file must carry
pub const REQUIRED_FIELDS: [&str; 12] = [
    "name",
    "industry",
    "founded",
    "founders",
    "raised",
    "lessonLearned",
    "whatIf",
    "description",
    "analogy",
    "mentalModel",
    "pivotStrategy",
    "sourceUrl",
];

/// Response schema for a batch of case files: an array of objects with string
/// fields, `sunset` and `focusArea` optional.
pub fn case_file_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "industry": { "type": "STRING" },
                "founded": { "type": "STRING" },
                "founders": {
                    "type": "STRING",
                    "description": "Names of the key founders (e.g. 'Elizabeth Holmes' or 'Adam Neumann')"
                },
                "sunset": { "type": "STRING" },
                "raised": { "type": "STRING" },
                "description": { "type": "STRING" },
                "lessonLearned": {
                    "type": "STRING",
                    "description": "A short 2-3 word failure category e.g., 'Premature Scaling'"
                },
                "whatIf": {
                    "type": "STRING",
                    "description": "A wistful sentence about their potential success."
                },
                "focusArea": { "type": "STRING" },
                "analogy": {
                    "type": "STRING",
                    "description": "A simple real-world analogy explaining the failure (e.g., 'Like trying to boil the ocean with a match')."
                },
                "mentalModel": {
                    "type": "STRING",
                    "description": "The specific cognitive bias or business concept (e.g., 'The Sunk Cost Fallacy')."
                },
                "pivotStrategy": {
                    "type": "STRING",
                    "description": "One specific strategic move that could have saved them."
                },
                "sourceUrl": {
                    "type": "STRING",
                    "description": "A specific, valid URL to a news article about the failure (New York Times, The Verge, BBC, TechCrunch). Do not use broken paths."
                }
            },
            "required": REQUIRED_FIELDS
        }
    })
}

//! Instruction texts sent to the generator.

use crate::models::CategoryDescriptor;

/// Number of companies requested per batch
pub const BATCH_SIZE: usize = 5;

pub fn category_prompt(category: &CategoryDescriptor) -> String {
    format!(
        "Task: List {count} REAL, VERIFIABLE failed startups in the {name} industry.

STRICT RULES:
1. REAL COMPANIES ONLY. Do not invent synthetic startups.
2. Provide a valid 'sourceUrl' for each. Prioritize major publishers (NYT, BBC, Verge, Wired) over niche blogs to ensure links work.
3. Focus on high-profile failures where lessons are clear.

Analysis Requirements:
- Include the names of the Founders.
- Focus on these failure points: {focus}.
- \"Mental Model\": A business concept to remember (e.g., \"Blitzscaling Trap\").
- \"Simple Analogy\": Explain it to a 5-year-old.
- \"Pivot Strategy\": A concrete strategic change they missed.
",
        count = BATCH_SIZE,
        name = category.name,
        focus = category.focus,
    )
}

pub fn query_prompt(query: &str) -> String {
    format!(
        "Task: Analyze the REAL startup failure: \"{query}\".

STRICT RULES:
1. If the query matches a real failed company, analyze it deeply.
2. If it's a general topic, find {count} REAL failed companies in that space.
3. Provide valid 'sourceUrl' links. Avoid generic homepages; link to specific \"Shut down\" or \"Post-mortem\" articles from reputable news sources (Verge, NYT, BBC, TechCrunch).

Output Analysis:
- Include Founder Names.
- Deep dive with mental models and analogies.
",
        query = query,
        count = BATCH_SIZE,
    )
}

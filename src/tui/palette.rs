//! Search palette overlay state.
//!
//! The palette holds its own input buffer and a list of trending sectors
//! ranked against that buffer with nucleo's fuzzy matcher. The typed text is
//! offered as the first entry once it is non-blank, so blank input can never
//! be submitted.

use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher};

use super::MAX_INPUT_LEN;
use crate::catalog::TRENDING_SECTORS;

pub struct SearchPalette {
    input: String,
    suggestions: Vec<&'static str>,
    selected: usize,
    matcher: Matcher,
}

impl SearchPalette {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            suggestions: TRENDING_SECTORS.to_vec(),
            selected: 0,
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Submittable entries: the typed text (if non-blank), then ranked suggestions
    pub fn entries(&self) -> Vec<&str> {
        let typed = self.input.trim();
        let mut entries = Vec::with_capacity(self.suggestions.len() + 1);
        if !typed.is_empty() {
            entries.push(typed);
        }
        entries.extend(self.suggestions.iter().copied().filter(|s| *s != typed));
        entries
    }

    pub fn selected_entry(&self) -> Option<String> {
        self.entries().get(self.selected).map(|s| s.to_string())
    }

    pub fn push(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LEN {
            self.input.push(c);
            self.rerank();
        }
    }

    pub fn pop(&mut self) {
        if self.input.pop().is_some() {
            self.rerank();
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let total = self.entries().len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as isize + delta).max(0) as usize;
        self.selected = next.min(total - 1);
    }

    fn rerank(&mut self) {
        let query = self.input.trim();
        self.suggestions = if query.is_empty() {
            TRENDING_SECTORS.to_vec()
        } else {
            let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
            pattern
                .match_list(TRENDING_SECTORS.iter().copied(), &mut self.matcher)
                .into_iter()
                .map(|(sector, _score)| sector)
                .collect()
        };
        self.selected = 0;
    }
}

impl Default for SearchPalette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> SearchPalette {
        let mut palette = SearchPalette::new();
        for c in text.chars() {
            palette.push(c);
        }
        palette
    }

    #[test]
    fn test_empty_palette_lists_all_sectors() {
        let palette = SearchPalette::new();

        assert_eq!(palette.entries(), TRENDING_SECTORS.to_vec());
        assert_eq!(palette.selected_entry().as_deref(), Some("BNPL (Buy Now Pay Later)"));
    }

    #[test]
    fn test_typed_text_comes_first() {
        let palette = typed("kitchen");
        let entries = palette.entries();

        assert_eq!(entries[0], "kitchen");
        assert!(entries.contains(&"Cloud Kitchens"));
        assert!(!entries.contains(&"NFT Marketplaces"));
    }

    #[test]
    fn test_whitespace_input_is_not_an_entry() {
        let palette = typed("   ");

        assert_eq!(palette.entries(), TRENDING_SECTORS.to_vec());
    }

    #[test]
    fn test_unmatched_text_is_only_entry() {
        let palette = typed("zzqx");

        assert_eq!(palette.entries(), vec!["zzqx"]);
    }

    #[test]
    fn test_selection_bounds() {
        let mut palette = typed("truck");
        assert_eq!(palette.entries(), vec!["truck", "Autonomous Trucking"]);

        palette.move_selection(5);
        assert_eq!(palette.selected_entry().as_deref(), Some("Autonomous Trucking"));

        palette.move_selection(-5);
        assert_eq!(palette.selected_entry().as_deref(), Some("truck"));
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut palette = SearchPalette::new();
        palette.move_selection(3);
        assert_eq!(palette.selected(), 3);

        palette.push('n');
        assert_eq!(palette.selected(), 0);
    }

    #[test]
    fn test_pop_restores_full_list() {
        let mut palette = typed("n");
        palette.pop();

        assert_eq!(palette.input(), "");
        assert_eq!(palette.entries(), TRENDING_SECTORS.to_vec());
    }

    #[test]
    fn test_input_length_limit() {
        let mut palette = SearchPalette::new();
        for _ in 0..(MAX_INPUT_LEN + 10) {
            palette.push('a');
        }

        assert_eq!(palette.input().chars().count(), MAX_INPUT_LEN);
    }
}

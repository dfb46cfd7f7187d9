use crate::catalog::{CATEGORIES, QUICK_TAGS};
use crate::models::CategoryDescriptor;

/// One selectable row on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingItem {
    Category(&'static CategoryDescriptor),
    QuickTag(&'static str),
}

/// Categories first, then the quick-search tags
pub fn landing_items() -> Vec<LandingItem> {
    CATEGORIES
        .iter()
        .map(LandingItem::Category)
        .chain(QUICK_TAGS.iter().copied().map(LandingItem::QuickTag))
        .collect()
}

use serde::Serialize;

/// A browsable industry grouping.
///
/// `focus` is both shown to the user and passed into the retrieval prompt as
/// the lens the generator should analyze failures through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub focus: &'static str,
}

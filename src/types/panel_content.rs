use crate::types::suggestion::Suggestion;

/// What the suggestion panel is currently showing. `Loading`, `NoResults`,
/// and `Error` render as a single non-selectable placeholder row; only
/// `Results` rows can be highlighted or committed.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelContent {
    /// Nothing has been rendered yet.
    Empty,
    Loading,
    Results(Vec<Suggestion>),
    NoResults,
    Error,
}

impl PanelContent {
    /// Number of selectable rows.
    pub fn result_count(&self) -> usize {
        match self {
            PanelContent::Results(suggestions) => suggestions.len(),
            _ => 0,
        }
    }
}

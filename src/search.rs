//! The search index: the registry flattened into a filterable list.
//!
//! Matching is deliberately plain: case-insensitive substring against the
//! label or the description, no typo tolerance. Entries whose label matches
//! rank ahead of entries matched only on description, and each bucket keeps
//! registry order, so results are stable for a given query.

use crate::content::{NavGroup, Operation};
use serde::Serialize;

/// One navigable search result.
#[derive(Clone, Serialize)]
pub struct SearchEntry {
    /// Section id to navigate to when selected.
    pub id: String,
    /// Display label, matched first.
    pub label: String,
    /// Owning group's title, shown alongside the result.
    pub group_tag: String,
    /// Longer prose, matched when the label does not hit.
    pub description: String,
}

/// The flattened, ordered list of every navigable target.
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Flattens the content tables in reading order: each group's menu
    /// entries, then its operations.
    #[must_use]
    pub fn build(groups: &[NavGroup], operations: &[Operation]) -> Self {
        let mut entries = Vec::new();
        for group in groups {
            for e in &group.entries {
                entries.push(SearchEntry {
                    id: e.id.clone(),
                    label: e.label.clone(),
                    group_tag: group.title.clone(),
                    description: e.summary.clone(),
                });
            }
            for op in operations.iter().filter(|op| op.group_id == group.id) {
                entries.push(SearchEntry {
                    id: op.id.clone(),
                    label: op.title.clone(),
                    group_tag: group.title.clone(),
                    description: op.description.clone(),
                });
            }
        }
        Self { entries }
    }

    /// An index over pre-built entries.
    #[must_use]
    pub fn from_entries(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Every entry, in reading order.
    #[must_use]
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Entries matching the query: label matches first, then
    /// description-only matches, each bucket in reading order.
    ///
    /// An empty (or all-whitespace) query returns the full list.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.entries.iter().collect();
        }
        let mut label_hits = Vec::new();
        let mut description_hits = Vec::new();
        for entry in &self.entries {
            if entry.label.to_lowercase().contains(&needle) {
                label_hits.push(entry);
            } else if entry.description.to_lowercase().contains(&needle) {
                description_hits.push(entry);
            }
        }
        label_hits.extend(description_hits);
        label_hits
    }
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;

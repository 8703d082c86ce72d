//! The section registry: every addressable block of the document, in reading
//! order, with its group membership.
//!
//! Built once at startup from the content tables and validated against the
//! document layout. A menu entry or operation whose id has no rendered anchor
//! is a development-time integrity error, so construction fails fast rather
//! than letting navigation degrade silently later.

use crate::content::{NavGroup, Operation};
use crate::document::Layout;
use std::collections::HashMap;

/// An addressable block of content with a stable id.
#[derive(Clone, Debug)]
pub struct Section {
    /// Unique, stable anchor id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Id of the owning [`Group`].
    pub group_id: String,
    /// Whether this section appears in the sidebar menu. Operation sections
    /// do not; they highlight their group's overview entry instead.
    pub is_menu: bool,
}

/// A named cluster of sections shown together in the sidebar.
#[derive(Clone, Debug)]
pub struct Group {
    /// Unique group id.
    pub id: String,
    /// Group heading.
    pub title: String,
    /// Ids of every section in the group, menu entries first.
    pub section_ids: Vec<String>,
    /// The section highlighted in the menu when a non-menu member is active.
    pub overview_id: String,
}

/// Integrity failure detected while building the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A configured id has no rendered anchor in the document.
    #[error("section '{id}' has no anchor in the document")]
    MissingAnchor {
        /// The offending section id.
        id: String,
    },
    /// The same id was configured twice.
    #[error("section id '{id}' is configured more than once")]
    DuplicateId {
        /// The offending section id.
        id: String,
    },
    /// An operation references a group that does not exist.
    #[error("operation '{id}' references unknown group '{group_id}'")]
    UnknownGroup {
        /// The offending operation id.
        id: String,
        /// The group id it referenced.
        group_id: String,
    },
    /// A group has no menu entries, so it has no overview section.
    #[error("group '{id}' has no menu entries")]
    EmptyGroup {
        /// The offending group id.
        id: String,
    },
    /// The content tables produced no sections at all.
    #[error("the document has no sections")]
    Empty,
}

/// Immutable, ordered view of every registered section.
#[derive(Debug)]
pub struct Registry {
    sections: Vec<Section>,
    groups: Vec<Group>,
    by_id: HashMap<String, usize>,
    group_by_id: HashMap<String, usize>,
}

impl Registry {
    /// Builds the registry from the content tables, checking every id against
    /// the layout's anchors.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if an id is duplicated, lacks an anchor,
    /// an operation names a missing group, a group has no menu entries, or
    /// no sections are configured at all.
    pub fn build(
        groups: &[NavGroup],
        operations: &[Operation],
        layout: &Layout,
    ) -> Result<Self, RegistryError> {
        let mut sections = Vec::new();
        let mut out_groups = Vec::new();
        let mut by_id = HashMap::new();
        let mut group_by_id = HashMap::new();

        for group in groups {
            let overview_id = group
                .entries
                .first()
                .map(|e| e.id.clone())
                .ok_or_else(|| RegistryError::EmptyGroup {
                    id: group.id.clone(),
                })?;
            let mut section_ids = Vec::new();
            for e in &group.entries {
                section_ids.push(e.id.clone());
                push_section(
                    &mut sections,
                    &mut by_id,
                    layout,
                    Section {
                        id: e.id.clone(),
                        label: e.label.clone(),
                        group_id: group.id.clone(),
                        is_menu: true,
                    },
                )?;
            }
            for op in operations.iter().filter(|op| op.group_id == group.id) {
                section_ids.push(op.id.clone());
                push_section(
                    &mut sections,
                    &mut by_id,
                    layout,
                    Section {
                        id: op.id.clone(),
                        label: op.title.clone(),
                        group_id: group.id.clone(),
                        is_menu: false,
                    },
                )?;
            }
            group_by_id.insert(group.id.clone(), out_groups.len());
            out_groups.push(Group {
                id: group.id.clone(),
                title: group.title.clone(),
                section_ids,
                overview_id,
            });
        }

        if let Some(op) = operations
            .iter()
            .find(|op| !group_by_id.contains_key(&op.group_id))
        {
            return Err(RegistryError::UnknownGroup {
                id: op.id.clone(),
                group_id: op.group_id.clone(),
            });
        }
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self {
            sections,
            groups: out_groups,
            by_id,
            group_by_id,
        })
    }

    /// All sections in reading order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All groups in reading order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Looks up a section by id.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.by_id.get(id).map(|&i| &self.sections[i])
    }

    /// The group a section belongs to.
    #[must_use]
    pub fn group_of(&self, id: &str) -> Option<&Group> {
        let section = self.section(id)?;
        self.group_by_id
            .get(&section.group_id)
            .map(|&i| &self.groups[i])
    }

    /// The menu entry that should highlight when `id` is active: the id
    /// itself for menu sections, otherwise the group's overview section.
    ///
    /// Unregistered ids are returned unchanged; callers validate separately.
    #[must_use]
    pub fn menu_target<'a>(&'a self, id: &'a str) -> &'a str {
        match self.section(id) {
            Some(section) if !section.is_menu => self
                .group_of(id)
                .map_or(id, |group| group.overview_id.as_str()),
            _ => id,
        }
    }

    /// The default active section: first in reading order.
    #[must_use]
    pub fn first_id(&self) -> &str {
        &self.sections[0].id
    }

    /// The menu section following `id` in reading order, if any.
    #[must_use]
    pub fn next_menu_id(&self, id: &str) -> Option<&str> {
        let from = self.by_id.get(self.menu_target(id)).copied()?;
        self.sections[from + 1..]
            .iter()
            .find(|s| s.is_menu)
            .map(|s| s.id.as_str())
    }

    /// The menu section preceding `id` in reading order, if any.
    #[must_use]
    pub fn prev_menu_id(&self, id: &str) -> Option<&str> {
        let from = self.by_id.get(self.menu_target(id)).copied()?;
        self.sections[..from]
            .iter()
            .rev()
            .find(|s| s.is_menu)
            .map(|s| s.id.as_str())
    }
}

fn push_section(
    sections: &mut Vec<Section>,
    by_id: &mut HashMap<String, usize>,
    layout: &Layout,
    section: Section,
) -> Result<(), RegistryError> {
    if by_id.contains_key(&section.id) {
        return Err(RegistryError::DuplicateId { id: section.id });
    }
    if !layout.has_anchor(&section.id) {
        return Err(RegistryError::MissingAnchor { id: section.id });
    }
    by_id.insert(section.id.clone(), sections.len());
    sections.push(section);
    Ok(())
}

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;

//! Categorized presentation tree built from a track's raw attributes.
//!
//! A tree is a flat list of category nodes, each holding attribute leaves.
//! Nodes remember the untranslated key they were built from so a locale
//! switch or a search never has to work backwards from display text.

mod categories;
mod report;

use std::collections::HashSet;

use crate::catalog::{Locale, translate_attribute, translate_category};
use crate::format::format_value;
use crate::media::Track;

pub use categories::*;
pub use report::render_report;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Category,
    Attribute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub kind: NodeKind,
    /// Category name or raw attribute key.
    pub key: String,
    pub label: String,
    pub value: Option<String>,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    fn category(name: &str, locale: Locale, children: Vec<DisplayNode>) -> Self {
        Self {
            kind: NodeKind::Category,
            key: name.to_string(),
            label: translate_category(name, locale),
            value: None,
            children,
        }
    }

    fn attribute(key: &str, raw: &str, locale: Locale) -> Self {
        Self {
            kind: NodeKind::Attribute,
            key: key.to_string(),
            label: translate_attribute(key, locale),
            value: Some(format_value(key, raw)),
            children: Vec::new(),
        }
    }

    pub fn is_category(&self) -> bool {
        self.kind == NodeKind::Category
    }

    /// This node's label in `locale`, derived from its key.
    pub fn label_in(&self, locale: Locale) -> String {
        match self.kind {
            NodeKind::Category => translate_category(&self.key, locale),
            NodeKind::Attribute => translate_attribute(&self.key, locale),
        }
    }
}

/// Group `track`'s attributes into category nodes for display in `locale`.
///
/// Relevant categories come first in their fixed order, each listing its
/// present keys in declared order; a key is shown under the first relevant
/// category that claims it. Keys no category claims end up under
/// "Other Properties". Blank values are never shown and empty categories
/// are dropped.
pub fn build_tree(track: &Track, locale: Locale) -> Vec<DisplayNode> {
    let mut nodes = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();

    for name in relevant_categories(&track.track_type) {
        let Some(spec) = category_spec(name) else {
            continue;
        };

        let mut leaves = Vec::new();
        for &key in spec.keys {
            if emitted.contains(key) {
                continue;
            }
            if let Some(raw) = track.get(key) {
                emitted.insert(key);
                leaves.push(DisplayNode::attribute(key, raw, locale));
            }
        }

        if !leaves.is_empty() {
            nodes.push(DisplayNode::category(name, locale, leaves));
        }
    }

    let others: Vec<DisplayNode> = track
        .present()
        .filter(|(key, _)| !is_categorized(key))
        .map(|(key, raw)| DisplayNode::attribute(key, raw, locale))
        .collect();
    if !others.is_empty() {
        nodes.push(DisplayNode::category(OTHER_PROPERTIES, locale, others));
    }

    nodes
}

#[cfg(test)]
mod tests;

//! Visibility filtering of a display tree against a search query.
//!
//! Matching is a case-insensitive substring test against a node's shown
//! label and value and its label in every supported locale,
//! so a Chinese query finds attributes while the UI is in English and the
//! other way around.

use std::collections::{HashMap, HashSet};

use crate::catalog::Locale;
use crate::tree::DisplayNode;

/// Position of a node in a tree: a category index and, for leaves, the
/// index within that category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub category: usize,
    pub leaf: Option<usize>,
}

impl NodeId {
    pub fn category(category: usize) -> Self {
        Self {
            category,
            leaf: None,
        }
    }

    pub fn leaf(category: usize, leaf: usize) -> Self {
        Self {
            category,
            leaf: Some(leaf),
        }
    }
}

/// Result of filtering a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    visible: HashMap<NodeId, bool>,
    forced_open: HashSet<usize>,
}

impl Visibility {
    /// Unknown ids are reported as not visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.visible.get(&id).copied().unwrap_or(false)
    }

    /// Whether a category must be shown expanded because a descendant matched.
    pub fn is_forced_open(&self, category: usize) -> bool {
        self.forced_open.contains(&category)
    }

    pub fn visible_leaf_count(&self) -> usize {
        self.visible
            .iter()
            .filter(|(id, shown)| id.leaf.is_some() && **shown)
            .count()
    }
}

/// Compute which nodes of `tree` remain visible for `query`.
///
/// An empty (or all-whitespace) query shows everything and forces nothing
/// open. Otherwise a leaf is visible when it matches or its category's own
/// label matches; a category is visible when its label matches or any leaf
/// does, and is forced open only in the latter case.
pub fn compute_visibility(tree: &[DisplayNode], query: &str) -> Visibility {
    let needle = query.trim().to_lowercase();
    let mut out = Visibility::default();

    for (ci, category) in tree.iter().enumerate() {
        if needle.is_empty() {
            out.visible.insert(NodeId::category(ci), true);
            for li in 0..category.children.len() {
                out.visible.insert(NodeId::leaf(ci, li), true);
            }
            continue;
        }

        let category_matched = matches(category, &needle);
        let mut any_leaf = false;
        for (li, leaf) in category.children.iter().enumerate() {
            let leaf_matched = matches(leaf, &needle);
            any_leaf |= leaf_matched;
            out.visible
                .insert(NodeId::leaf(ci, li), leaf_matched || category_matched);
        }

        out.visible
            .insert(NodeId::category(ci), category_matched || any_leaf);
        if any_leaf {
            out.forced_open.insert(ci);
        }
    }

    out
}

fn matches(node: &DisplayNode, needle: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(needle);

    hit(&node.label)
        || node.value.as_deref().is_some_and(hit)
        || Locale::ALL.iter().any(|&locale| hit(&node.label_in(locale)))
}

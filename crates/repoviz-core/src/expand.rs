//! Expansion state for the interactive tree view.
//!
//! A node's identity is derived, not stored on the node: the names of its
//! ancestors and its own name joined by `/`, starting from a synthetic root.
//! The state operates purely on identity strings and never inspects node
//! content, which keeps it decoupled from the tree model.
//!
//! Known limitation: sibling nodes sharing a name at the same depth collide
//! under this scheme, so toggling one toggles the other. This mirrors the
//! backend's contract of returning base names; see DESIGN.md.

use std::collections::HashSet;

/// Identity of the synthetic root above all top-level entries.
pub const ROOT_IDENTITY: &str = "";

/// Derive a child's identity from its parent's identity and its base name.
pub fn child_identity(parent: &str, name: &str) -> String {
    format!("{parent}/{name}")
}

/// The set of node identities currently expanded.
///
/// Scoped to one snapshot's lifetime; replaced via [`ExpansionState::reset`]
/// when a new snapshot loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Fresh state with only the synthetic root expanded, so top-level
    /// entries are visible from the start.
    pub fn new() -> Self {
        let mut expanded = HashSet::new();
        expanded.insert(ROOT_IDENTITY.to_string());
        Self { expanded }
    }

    pub fn is_expanded(&self, identity: &str) -> bool {
        self.expanded.contains(identity)
    }

    /// Expand a collapsed node or collapse an expanded one. Toggling twice
    /// restores the prior state; no other identity is affected.
    pub fn toggle(&mut self, identity: &str) {
        if !self.expanded.remove(identity) {
            self.expanded.insert(identity.to_string());
        }
    }

    /// Drop all user expansions, returning to the initial root-only set.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new()
    }
}

//! Traversal and rendering of the tree forest.
//!
//! Both outputs share one depth-first, pre-order walk with children visited
//! in received order. They differ in exactly one way: the interactive view
//! stops at collapsed directories (cost proportional to visible rows), while
//! the text export always covers the entire forest.

use crate::expand::{ExpansionState, ROOT_IDENTITY, child_identity};
use crate::tree::TreeNode;

/// One row of the interactive tree view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    /// Derived node identity, used as the toggle key and the list key.
    pub identity: String,
    pub name: String,
    /// Number of ancestors below the synthetic root.
    pub depth: usize,
    pub is_dir: bool,
    /// Whether this row's own subtree is currently expanded.
    pub expanded: bool,
}

/// Rows of the interactive view for the current expansion state.
///
/// A collapsed directory's subtree is not traversed at all.
pub fn visible_rows(forest: &[TreeNode], expansion: &ExpansionState) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    walk(forest, ROOT_IDENTITY, 0, Some(expansion), &mut rows);
    rows
}

/// Plain-text export of the entire forest, independent of expansion state.
///
/// One newline-terminated line per node: two spaces of indent per depth
/// level, the entry name, and a trailing `/` on directories.
pub fn export_text(forest: &[TreeNode]) -> String {
    let mut rows = Vec::new();
    walk(forest, ROOT_IDENTITY, 0, None, &mut rows);

    let mut out = String::new();
    for row in rows {
        let suffix = if row.is_dir { "/" } else { "" };
        out.push_str(&format!("{}{}{}\n", "  ".repeat(row.depth), row.name, suffix));
    }
    out
}

/// Shared pre-order walk. `expansion = None` visits everything (export mode);
/// otherwise a collapsed directory short-circuits its subtree.
fn walk(
    nodes: &[TreeNode],
    parent: &str,
    depth: usize,
    expansion: Option<&ExpansionState>,
    out: &mut Vec<TreeRow>,
) {
    for node in nodes {
        let identity = child_identity(parent, &node.name);
        let expanded = expansion.is_none_or(|e| e.is_expanded(&identity));
        out.push(TreeRow {
            identity: identity.clone(),
            name: node.name.clone(),
            depth,
            is_dir: node.is_dir(),
            expanded,
        });
        if node.is_dir() && expanded {
            walk(node.children(), &identity, depth + 1, expansion, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn file(name: &str) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            kind: NodeKind::File,
            children: None,
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            name: name.to_string(),
            kind: NodeKind::Directory,
            children: Some(children),
        }
    }

    /// Forest with 7 nodes total, 3 of them under `src/ui`.
    fn sample_forest() -> Vec<TreeNode> {
        vec![
            dir(
                "src",
                vec![
                    dir("ui", vec![file("tree.rs"), file("form.rs"), file("mod.rs")]),
                    file("main.rs"),
                ],
            ),
            file("README.md"),
        ]
    }

    fn count_nodes(nodes: &[TreeNode]) -> usize {
        nodes.iter().map(|n| 1 + count_nodes(n.children())).sum()
    }

    #[test]
    fn test_collapsed_directory_short_circuits_subtree() {
        let forest = sample_forest();
        let rows = visible_rows(&forest, &ExpansionState::new());

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["src", "README.md"]);
        assert!(rows.iter().all(|r| r.depth == 0));
    }

    #[test]
    fn test_expansion_reveals_children_one_level_at_a_time() {
        let forest = sample_forest();
        let mut expansion = ExpansionState::new();
        expansion.toggle("/src");

        let names: Vec<_> = visible_rows(&forest, &expansion)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        // `ui` is visible but still collapsed, so its files are not.
        assert_eq!(names, ["src", "ui", "main.rs", "README.md"]);

        expansion.toggle("/src/ui");
        let rows = visible_rows(&forest, &expansion);
        let names: Vec<_> = rows.iter().map(|r| r.name.clone()).collect();
        assert_eq!(
            names,
            ["src", "ui", "tree.rs", "form.rs", "mod.rs", "main.rs", "README.md"]
        );
        assert_eq!(rows[2].depth, 2);
        assert_eq!(rows[2].identity, "/src/ui/tree.rs");
    }

    #[test]
    fn test_export_is_complete_regardless_of_expansion() {
        let forest = sample_forest();
        let text = export_text(&forest);
        assert_eq!(text.lines().count(), count_nodes(&forest));
        // Export never consults expansion state; a fully collapsed view
        // still exports everything.
        assert!(text.contains("tree.rs"));
    }

    #[test]
    fn test_export_format_and_order() {
        let forest = vec![
            dir("src", vec![file("a.txt")]),
            dir("docs", vec![]),
            file("README.md"),
        ];
        assert_eq!(export_text(&forest), "src/\n  a.txt\ndocs/\nREADME.md\n");
    }

    #[test]
    fn test_export_order_fidelity_is_recursive() {
        let forest = vec![dir(
            "top",
            vec![file("a"), dir("b", vec![file("b1"), file("b2")]), file("c")],
        )];
        let text = export_text(&forest);
        let lines: Vec<_> = text.lines().map(str::trim).collect();
        assert_eq!(lines, ["top/", "a", "b/", "b1", "b2", "c"]);
    }

    #[test]
    fn test_interactive_scenario_matches_export() {
        let forest = vec![dir("src", vec![file("a.txt")])];
        let mut expansion = ExpansionState::new();

        let names: Vec<_> = visible_rows(&forest, &expansion)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, ["src"]);

        expansion.toggle("/src");
        let names: Vec<_> = visible_rows(&forest, &expansion)
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, ["src", "a.txt"]);

        // Export is identical before and after the toggle.
        assert_eq!(export_text(&forest), "src/\n  a.txt\n");
    }
}

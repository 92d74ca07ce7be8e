//! Tree data model for repository snapshots.
//!
//! Pure data constructed from the backend's JSON response. The model is a
//! forest: a repository root commonly has several top-level entries, each an
//! independent tree. Child order is significant and preserved exactly as
//! received; it determines both the visual and the exported ordering.

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Kind of a file-system entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One file-system entry and (for directories) its children.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TreeNode {
    /// Base name of the entry, no path separators.
    pub name: String,
    /// Wire values are `"file"` and `"directory"`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered children; only meaningful for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Children in received order, empty for files and childless directories.
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Descriptive repository metadata, passed through from the backend unmodified.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RepoInfo {
    pub name: String,
    pub stars: u64,
    pub forks: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// One complete result of a successful structure fetch.
///
/// Created atomically from a response body and replaced wholesale on the next
/// successful fetch; never partially mutated.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RepositorySnapshot {
    pub repo_info: RepoInfo,
    pub structure: Vec<TreeNode>,
}

impl RepositorySnapshot {
    /// Parse and validate a backend response body.
    ///
    /// Fails with [`SubmitError::MalformedTree`] when a node's kind is not
    /// recognized, a `children` field is not a sequence, or a file node
    /// carries a non-empty children list. Files with children are rejected
    /// rather than silently normalized.
    pub fn parse(body: &str) -> Result<Self, SubmitError> {
        let snapshot: Self =
            serde_json::from_str(body).map_err(|e| SubmitError::MalformedTree(e.to_string()))?;
        validate_forest(&snapshot.structure)?;
        Ok(snapshot)
    }
}

fn validate_forest(nodes: &[TreeNode]) -> Result<(), SubmitError> {
    for node in nodes {
        match node.kind {
            NodeKind::File => {
                if node.children.as_ref().is_some_and(|c| !c.is_empty()) {
                    return Err(SubmitError::MalformedTree(format!(
                        "file node '{}' carries children",
                        node.name
                    )));
                }
            }
            NodeKind::Directory => validate_forest(node.children())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let body = r#"{
            "status": "success",
            "repo_info": {"name": "demo", "stars": 12, "forks": 3},
            "structure": [
                {"name": "src", "type": "directory", "children": [
                    {"name": "a.txt", "type": "file"}
                ]},
                {"name": "README.md", "type": "file"}
            ]
        }"#;

        let snapshot = RepositorySnapshot::parse(body).unwrap();
        assert_eq!(snapshot.repo_info.name, "demo");
        assert_eq!(snapshot.repo_info.stars, 12);
        assert_eq!(snapshot.repo_info.description, None);
        assert_eq!(snapshot.structure.len(), 2);
        assert!(snapshot.structure[0].is_dir());
        assert_eq!(snapshot.structure[0].children()[0].name, "a.txt");
        assert!(!snapshot.structure[1].is_dir());
    }

    #[test]
    fn test_child_order_is_preserved() {
        let body = r#"{
            "repo_info": {"name": "demo", "stars": 0, "forks": 0},
            "structure": [
                {"name": "c", "type": "file"},
                {"name": "a", "type": "file"},
                {"name": "b", "type": "file"}
            ]
        }"#;

        let snapshot = RepositorySnapshot::parse(body).unwrap();
        let names: Vec<_> = snapshot.structure.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let body = r#"{
            "repo_info": {"name": "demo", "stars": 0, "forks": 0},
            "structure": [{"name": "x", "type": "symlink"}]
        }"#;

        assert!(matches!(
            RepositorySnapshot::parse(body),
            Err(SubmitError::MalformedTree(_))
        ));
    }

    #[test]
    fn test_children_must_be_a_sequence() {
        let body = r#"{
            "repo_info": {"name": "demo", "stars": 0, "forks": 0},
            "structure": [{"name": "src", "type": "directory", "children": "nope"}]
        }"#;

        assert!(matches!(
            RepositorySnapshot::parse(body),
            Err(SubmitError::MalformedTree(_))
        ));
    }

    #[test]
    fn test_file_with_children_is_rejected() {
        let body = r#"{
            "repo_info": {"name": "demo", "stars": 0, "forks": 0},
            "structure": [{"name": "src", "type": "directory", "children": [
                {"name": "odd.txt", "type": "file", "children": [
                    {"name": "nested", "type": "file"}
                ]}
            ]}]
        }"#;

        let err = RepositorySnapshot::parse(body).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedTree(ref msg) if msg.contains("odd.txt")));
    }

    #[test]
    fn test_file_with_empty_children_is_tolerated() {
        let body = r#"{
            "repo_info": {"name": "demo", "stars": 0, "forks": 0},
            "structure": [{"name": "a.txt", "type": "file", "children": []}]
        }"#;

        assert!(RepositorySnapshot::parse(body).is_ok());
    }
}

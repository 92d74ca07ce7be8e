//! Core logic for the repository structure visualizer.
//!
//! Everything in this crate is pure and browser-free so it can be unit tested
//! natively:
//!
//! - [`tree`] - The file/directory tree model received from the backend
//! - [`expand`] - Per-node expansion state keyed by derived node identities
//! - [`render`] - Traversal into visible rows and into the plain-text export
//! - [`readiness`] - The backend health state machine
//! - [`submit`] - Readiness-gated submission of a structure request
//!
//! The web layer owns all side effects (fetching, timers, signals) and drives
//! these types from event handlers.

pub mod error;
pub mod expand;
pub mod readiness;
pub mod render;
pub mod submit;
pub mod tree;

pub use error::SubmitError;
pub use expand::{ExpansionState, ROOT_IDENTITY, child_identity};
pub use readiness::{ProbeOutcome, ReadinessState};
pub use render::{TreeRow, export_text, visible_rows};
pub use tree::{NodeKind, RepoInfo, RepositorySnapshot, TreeNode};

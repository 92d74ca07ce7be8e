//! Repository structure visualizer UI components.
//!
//! Components:
//! - [`Visualizer`] - Main page layout
//! - [`UrlForm`] - Repository URL submission form
//! - [`RepoHeader`] - Repository metadata header with text export
//! - [`TreeView`] - Interactive, expandable tree of the snapshot

mod form;
mod header;
mod tree;
#[allow(clippy::module_inception)]
mod visualizer;

pub use form::UrlForm;
pub use header::RepoHeader;
pub use tree::TreeView;
pub use visualizer::Visualizer;

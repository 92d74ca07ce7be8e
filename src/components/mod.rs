//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Backend readiness banner and its polling driver
//! - [`visualizer`] - Repository structure visualizer view

pub mod icons;
pub mod status;
pub mod visualizer;

pub use visualizer::Visualizer;

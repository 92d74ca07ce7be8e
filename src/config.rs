//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the masthead.
pub const APP_NAME: &str = "GitHub Repository Visualizer";

/// Subtitle displayed under the masthead.
pub const APP_TAGLINE: &str = "Enter a GitHub repository URL to visualize its structure";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the repository-inspection backend.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Delay between health probes while the backend is not ready (milliseconds).
pub const HEALTH_RETRY_DELAY_MS: u32 = 5000;

/// Health probe endpoint.
pub fn health_url() -> String {
    format!("{API_BASE_URL}/health")
}

/// Structure fetch endpoint.
pub fn structure_url() -> String {
    format!("{API_BASE_URL}/structure")
}

// =============================================================================
// UI Configuration
// =============================================================================

/// How long the "Copied!" confirmation stays visible (milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Indentation per tree depth level in the interactive view (rem).
pub const TREE_INDENT_REM: f32 = 1.5;

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

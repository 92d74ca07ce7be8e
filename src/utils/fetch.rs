//! Network fetching utilities with timeout support.
//!
//! Provides async fetch functions with timeout racing. The health probe uses
//! [`get_text`]; structure submissions use [`post_json`]. Both surface a
//! [`FetchError`] that distinguishes transport-level failures (unreachable,
//! timed out) from HTTP error responses, because the readiness poller
//! classifies them differently.

use std::fmt;

use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Errors
// =============================================================================

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (connection refused, CORS, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status) without a usable body
    HttpError(u16),
    /// HTTP error response carrying a backend-provided detail message
    ApiError(String),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// Request timed out
    Timeout,
}

impl FetchError {
    /// Whether the failure means the service could not be reached at all,
    /// as opposed to answering with an error.
    pub fn is_unreachable(&self) -> bool {
        !matches!(self, Self::HttpError(_) | Self::ApiError(_))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ApiError(detail) => write!(f, "{}", detail),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// This is a reusable utility for implementing timeout behavior on any
/// JavaScript Promise using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    // Race the promises
    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch text from a URL with a GET request. Used by the health probe, which
/// only cares about success vs. failure class.
pub async fn get_text(url: &str) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;

    let response = dispatch(request).await?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }
    read_text(&response).await
}

/// POST a JSON body to a URL and return the response body text.
///
/// On a non-2xx response the body is inspected for a backend-provided
/// `detail` message so the user sees the backend's own wording (e.g.
/// "Repository or specified branch not found").
pub async fn post_json(url: &str, body: &serde_json::Value) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body.to_string()));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response = dispatch(request).await?;
    if !response.ok() {
        let status = response.status();
        return Err(match error_detail(&response).await {
            Some(detail) => FetchError::ApiError(detail),
            None => FetchError::HttpError(status),
        });
    }
    read_text(&response).await
}

/// Dispatch a request, racing it against the configured timeout.
async fn dispatch(request: Request) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => result.dyn_into().map_err(|_| FetchError::InvalidContent),
    }
}

/// Read a response body as text.
async fn read_text(response: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Extract the `detail` field from an error response body, if present.
async fn error_detail(response: &Response) -> Option<String> {
    let body = read_text(response).await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(str::to_string)
}

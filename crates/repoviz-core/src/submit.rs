//! Readiness-gated submission of a structure request.

use std::future::Future;

use crate::error::SubmitError;
use crate::readiness::ReadinessState;
use crate::tree::RepositorySnapshot;

/// Submit one structure request through `transport`.
///
/// The backend must have been confirmed ready, otherwise this fails with
/// [`SubmitError::BackendNotReady`] before the transport is invoked. The
/// transport's `Ok` value is the raw response body; its `Err` is a
/// transport-level message surfaced to the user as-is.
///
/// All failures are terminal for this one request (no automatic retry), and
/// the previously displayed snapshot is untouched by construction: the caller
/// replaces it only on `Ok`, and resets its expansion state when it does.
pub async fn submit<F, Fut>(
    readiness: ReadinessState,
    transport: F,
) -> Result<RepositorySnapshot, SubmitError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    if !readiness.is_ready() {
        return Err(SubmitError::BackendNotReady);
    }

    let body = transport().await.map_err(SubmitError::Transport)?;
    RepositorySnapshot::parse(&body)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const GOOD_BODY: &str = r#"{
        "repo_info": {"name": "demo", "stars": 1, "forks": 0},
        "structure": [{"name": "README.md", "type": "file"}]
    }"#;

    #[tokio::test]
    async fn test_submit_while_not_ready_never_invokes_transport() {
        for state in [
            ReadinessState::Checking,
            ReadinessState::Starting,
            ReadinessState::Unavailable,
        ] {
            let called = Cell::new(false);
            let result = submit(state, || async {
                called.set(true);
                Ok(GOOD_BODY.to_string())
            })
            .await;

            assert_eq!(result.unwrap_err(), SubmitError::BackendNotReady);
            assert!(!called.get(), "transport must not run while {state:?}");
        }
    }

    #[tokio::test]
    async fn test_submit_parses_snapshot_when_ready() {
        let snapshot = submit(ReadinessState::Ready, || async {
            Ok(GOOD_BODY.to_string())
        })
        .await
        .unwrap();

        assert_eq!(snapshot.repo_info.name, "demo");
        assert_eq!(snapshot.structure.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        let result = submit(ReadinessState::Ready, || async {
            Err("connection reset".to_string())
        })
        .await;

        assert_eq!(
            result.unwrap_err(),
            SubmitError::Transport("connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let result = submit(ReadinessState::Ready, || async {
            Ok(r#"{"repo_info": {"name": "x", "stars": 0, "forks": 0}, "structure": [
                {"name": "y", "type": "link"}
            ]}"#
                .to_string())
        })
        .await;

        assert!(matches!(result, Err(SubmitError::MalformedTree(_))));
    }

    /// A failed follow-up submission leaves the displayed snapshot exactly as
    /// it was: callers assign only on `Ok`.
    #[tokio::test]
    async fn test_failed_submission_leaves_prior_snapshot_intact() {
        let mut displayed: Option<RepositorySnapshot> = None;

        if let Ok(snap) = submit(ReadinessState::Ready, || async {
            Ok(GOOD_BODY.to_string())
        })
        .await
        {
            displayed = Some(snap);
        }
        let first = displayed.clone().unwrap();

        if let Ok(snap) = submit(ReadinessState::Ready, || async {
            Err("backend went away".to_string())
        })
        .await
        {
            displayed = Some(snap);
        }

        assert_eq!(displayed.unwrap(), first);
    }
}

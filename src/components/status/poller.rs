//! Health polling driver.
//!
//! Single-flight loop around the pure state machine in `repoviz-core`: probe,
//! apply the transition, publish the new state, sleep, repeat. Polling stops
//! permanently once the backend is ready. Only one probe is ever outstanding,
//! and the cancellation flag invalidates the loop when the owning component
//! is torn down, so no probe fires after disposal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use repoviz_core::{ProbeOutcome, ReadinessState};

use crate::app::AppContext;
use crate::config::{HEALTH_RETRY_DELAY_MS, health_url};
use crate::utils::{FetchError, get_text};

/// Classify one probe attempt. An unreachable service is presumed to be
/// cold-starting; a service that answers with an error status is up but
/// unhealthy. The body carries no semantics.
fn classify(result: Result<String, FetchError>) -> ProbeOutcome {
    match result {
        Ok(_) => ProbeOutcome::Up,
        Err(e) if e.is_unreachable() => ProbeOutcome::Unreachable,
        Err(_) => ProbeOutcome::ErrorStatus,
    }
}

/// Start the polling loop, bound to the lifetime of the calling component.
pub fn start(ctx: AppContext) {
    let cancelled = Arc::new(AtomicBool::new(false));
    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.store(true, Ordering::Relaxed));
    }

    spawn_local(async move {
        loop {
            let outcome = classify(get_text(&health_url()).await);
            if cancelled.load(Ordering::Relaxed) {
                break;
            }

            let next = ctx.readiness.get_untracked().after_probe(outcome);
            ctx.readiness.set(next);
            if !next.polls_again() {
                web_sys::console::log_1(&"health: backend ready".into());
                break;
            }
            if next == ReadinessState::Unavailable {
                web_sys::console::warn_1(&"health: backend answered with an error status".into());
            }

            TimeoutFuture::new(HEALTH_RETRY_DELAY_MS).await;
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
        }
    });
}

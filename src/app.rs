//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! narrow mutators every component goes through to change shared state.

use leptos::prelude::*;

use repoviz_core::{ExpansionState, ReadinessState, RepositorySnapshot};

use crate::components::Visualizer;

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// Each piece of shared state is owned by exactly one signal and mutated only
/// through the methods below, so every transition is a discrete reaction to
/// one dispatched event:
/// - **snapshot** - replaced wholesale on a successful fetch, never edited
/// - **expansion** - mutated only by [`AppContext::toggle`], reset on load
/// - **readiness** - written only by the health poller driver
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The currently displayed repository snapshot, if any.
    pub snapshot: RwSignal<Option<RepositorySnapshot>>,
    /// Expansion state scoped to the current snapshot.
    pub expansion: RwSignal<ExpansionState>,
    /// Backend availability as observed by the health poller.
    pub readiness: RwSignal<ReadinessState>,
    /// User-visible message of the last failed submission.
    pub submit_error: RwSignal<Option<String>>,
    /// Whether a submission is currently in flight.
    pub loading: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(None),
            expansion: RwSignal::new(ExpansionState::new()),
            readiness: RwSignal::new(ReadinessState::default()),
            submit_error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    /// Replace the displayed snapshot wholesale, reset expansion to the
    /// root-only set, and clear any stale error.
    pub fn load_snapshot(&self, snapshot: RepositorySnapshot) {
        self.snapshot.set(Some(snapshot));
        self.expansion.update(|e| e.reset());
        self.submit_error.set(None);
    }

    /// Surface a submission failure. The previously displayed snapshot and
    /// its expansion state are left untouched.
    pub fn submit_failed(&self, message: String) {
        self.submit_error.set(Some(message));
    }

    /// Toggle the expansion of one node identity.
    pub fn toggle(&self, identity: &str) {
        self.expansion.update(|e| e.toggle(identity));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: ui-sans-serif, system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 2rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <Visualizer />
        </ErrorBoundary>
    }
}

//! Main visualizer page.
//!
//! Masthead, readiness banner, URL form, error banner, and - once a snapshot
//! is loaded - the repository panel with header and interactive tree.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::status::Status;
use crate::config::{APP_NAME, APP_TAGLINE};

use super::{RepoHeader, TreeView, UrlForm};

stylance::import_crate_style!(css, "src/components/visualizer/visualizer.module.css");

/// Visualizer page component.
#[component]
pub fn Visualizer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_snapshot = Signal::derive(move || ctx.snapshot.with(|s| s.is_some()));
    let error = ctx.submit_error;

    view! {
        <div class=css::page>
            <div class=css::masthead>
                <h1 class=css::title>{APP_NAME}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </div>

            <Status />
            <UrlForm />

            <Show when=move || error.get().is_some()>
                <div class=css::error role="alert">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || has_snapshot.get()>
                <div class=css::panel>
                    <RepoHeader />
                    <div class=css::panelBody>
                        <TreeView />
                    </div>
                </div>
            </Show>
        </div>
    }
}

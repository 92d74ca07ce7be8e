//! Repository metadata header with text export.
//!
//! Shows the repo name, star/fork counts, and optional description - all
//! passed through from the backend unmodified - plus the Copy Structure
//! button. The export always covers the full forest, regardless of what is
//! currently expanded.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use repoviz_core::{RepoInfo, export_text};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::utils::clipboard;

stylance::import_crate_style!(css, "src/components/visualizer/visualizer.module.css");

/// Repository header component.
#[component]
pub fn RepoHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let copied = RwSignal::new(false);

    let info = Signal::derive(move || {
        ctx.snapshot
            .with(|s| s.as_ref().map(|s| s.repo_info.clone()))
            .unwrap_or_else(|| RepoInfo {
                name: String::new(),
                stars: 0,
                forks: 0,
                description: None,
            })
    });

    let handle_copy = move |_: leptos::ev::MouseEvent| {
        let Some(text) = ctx
            .snapshot
            .with_untracked(|s| s.as_ref().map(|s| export_text(&s.structure)))
        else {
            return;
        };
        spawn_local(async move {
            if clipboard::write_text(&text).await {
                copied.set(true);
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                copied.set(false);
            }
        });
    };

    view! {
        <div class=css::panelHeader>
            <div class=css::repoMeta>
                <Icon icon=ic::REPO />
                <span class=css::repoName>{move || info.get().name}</span>
                <span class=css::repoCount>
                    <Icon icon=ic::STAR />
                    {move || info.get().stars}
                </span>
                <span class=css::repoCount>
                    <Icon icon=ic::FORK />
                    {move || info.get().forks}
                </span>
                {move || {
                    info.get()
                        .description
                        .map(|d| view! { <span class=css::repoDescription>{d}</span> })
                }}
            </div>
            <button class=css::copyButton on:click=handle_copy>
                {move || {
                    if copied.get() {
                        view! {
                            <Icon icon=ic::CHECK />
                            <span>"Copied!"</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Icon icon=ic::COPY />
                            <span>"Copy Structure"</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </div>
    }
}

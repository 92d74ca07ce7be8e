//! Repository URL submission form.
//!
//! Owns the submission glue: the readiness gate and response parsing live in
//! `repoviz-core`; this component only supplies the transport and routes the
//! outcome into the app context. URL normalization is the backend's concern -
//! the raw input is passed through untouched.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use repoviz_core::submit;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::structure_url;
use crate::utils::post_json;

stylance::import_crate_style!(css, "src/components/visualizer/form.module.css");

/// URL form component.
#[component]
pub fn UrlForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (url, set_url) = signal(String::new());

    // Resubmission is a UI concern: the button is disabled while a request
    // is in flight or the backend is not ready.
    let disabled = Signal::derive(move || ctx.loading.get() || !ctx.readiness.get().is_ready());

    let handle_input = move |ev: ev::Event| {
        let value = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        set_url.set(value);
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if ctx.loading.get_untracked() {
            return;
        }

        let raw = url.get_untracked();
        ctx.loading.set(true);
        ctx.submit_error.set(None);

        spawn_local(async move {
            let readiness = ctx.readiness.get_untracked();
            let result = submit::submit(readiness, || async move {
                post_json(&structure_url(), &json!({ "url": raw }))
                    .await
                    .map_err(|e| e.to_string())
            })
            .await;

            match result {
                Ok(snapshot) => ctx.load_snapshot(snapshot),
                Err(e) => {
                    web_sys::console::error_1(&format!("submit failed: {e}").into());
                    ctx.submit_failed(e.to_string());
                }
            }
            ctx.loading.set(false);
        });
    };

    view! {
        <form class=css::form on:submit=handle_submit>
            <input
                class=css::input
                type="text"
                autocomplete="off"
                spellcheck="false"
                placeholder="https://github.com/username/repository"
                prop:value=url
                on:input=handle_input
            />
            <button class=css::button type="submit" disabled=disabled>
                {move || {
                    if ctx.loading.get() {
                        view! {
                            <span class=css::spin><Icon icon=ic::SPINNER /></span>
                            <span>"Loading..."</span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Icon icon=ic::REPO />
                            <span>"Visualize"</span>
                        }
                            .into_any()
                    }
                }}
            </button>
        </form>
    }
}

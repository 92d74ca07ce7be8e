//! Backend readiness banner.
//!
//! Shows one advisory line per readiness state and owns the polling driver:
//! starting it here ties the retry timer's lifetime to this component, so
//! tearing the banner down cancels any pending probe.

mod poller;

use leptos::prelude::*;
use leptos_icons::Icon;

use repoviz_core::ReadinessState;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Advisory message for each readiness state.
fn advisory(state: ReadinessState) -> &'static str {
    match state {
        ReadinessState::Checking => "Checking backend availability...",
        ReadinessState::Ready => "Backend ready",
        ReadinessState::Starting => "Backend is starting up, retrying shortly...",
        ReadinessState::Unavailable => "Backend reported an error, retrying shortly...",
    }
}

/// Readiness banner component.
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    poller::start(ctx);

    let state = ctx.readiness;
    let bar_class = move || match state.get() {
        ReadinessState::Ready => format!("{} {}", css::bar, css::ready),
        ReadinessState::Checking => format!("{} {}", css::bar, css::checking),
        ReadinessState::Starting | ReadinessState::Unavailable => {
            format!("{} {}", css::bar, css::waiting)
        }
    };

    view! {
        <div class=bar_class role="status">
            {move || {
                (!state.get().is_ready())
                    .then(|| view! { <span class=css::spin><Icon icon=ic::SPINNER /></span> })
            }}
            <span>{move || advisory(state.get())}</span>
        </div>
    }
}

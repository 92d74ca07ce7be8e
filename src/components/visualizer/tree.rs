//! Interactive tree view.
//!
//! Renders the rows computed by `repoviz_core::visible_rows`: clicking a
//! directory row toggles its identity, clicking a file row is a no-op. Rows
//! for a collapsed directory's subtree are never materialized, so rendering
//! cost tracks the visible portion of the tree.

use leptos::prelude::*;
use leptos_icons::Icon;

use repoviz_core::{TreeRow, visible_rows};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TREE_INDENT_REM;

stylance::import_crate_style!(css, "src/components/visualizer/tree.module.css");

/// Interactive tree component.
#[component]
pub fn TreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let rows = Signal::derive(move || {
        ctx.snapshot.with(|snapshot| {
            let Some(snapshot) = snapshot else {
                return Vec::new();
            };
            ctx.expansion
                .with(|expansion| visible_rows(&snapshot.structure, expansion))
        })
    });

    view! {
        <div class=css::tree role="tree">
            <For
                each=move || rows.get()
                // Expansion is part of the key so a toggled row re-renders
                // its chevron.
                key=|row| (row.identity.clone(), row.expanded)
                children=move |row| {
                    view! { <TreeRowItem row=row /> }
                }
            />
        </div>
    }
}

#[component]
fn TreeRowItem(row: TreeRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let TreeRow {
        identity,
        name,
        depth,
        is_dir,
        expanded,
    } = row;

    let padding = format!("padding-left: {}rem", depth as f32 * TREE_INDENT_REM);
    let aria_label = if is_dir {
        format!("Folder: {name}")
    } else {
        format!("File: {name}")
    };

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            ctx.toggle(&identity);
        }
    };

    let row_class = if is_dir {
        format!("{} {}", css::row, css::rowDir)
    } else {
        css::row.to_string()
    };

    view! {
        <div
            class=row_class
            style=padding
            on:click=handle_click
            role="treeitem"
            aria-label=aria_label
            aria-expanded=is_dir.then(|| expanded.to_string())
        >
            <span class=css::slot aria-hidden="true">
                {is_dir
                    .then(|| {
                        let chevron = if expanded { ic::CHEVRON_DOWN } else { ic::CHEVRON_RIGHT };
                        view! { <Icon icon=chevron /> }
                    })}
            </span>
            <span class=if is_dir { css::iconDir } else { css::iconFile }>
                <Icon icon=if is_dir { ic::FOLDER } else { ic::FILE_TEXT } />
            </span>
            <span class=css::name>{name}</span>
        </div>
    }
}

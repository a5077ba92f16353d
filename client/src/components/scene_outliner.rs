//! Scene outliner: tree of scene objects with selection, visibility and lock
//! controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stateless with respect to scene truth. Rows come from
//! `scene::outliner::outliner_rows`; every click becomes an `OutlinerIntent`
//! for the page controller.

#[cfg(test)]
#[path = "scene_outliner_test.rs"]
mod scene_outliner_test;

use leptos::prelude::*;
use scene::ObjectKind;
use scene::outliner::{OutlinerIntent, OutlinerRow, outliner_rows};
use scene::{SceneObject, Selection};

const ROW_BASE_INDENT_PX: usize = 8;
const ROW_DEPTH_INDENT_PX: usize = 14;

#[component]
pub fn SceneOutliner(
    #[prop(into)] objects: Signal<Vec<SceneObject>>,
    #[prop(into)] selection: Signal<Selection>,
    on_intent: Callback<OutlinerIntent>,
) -> impl IntoView {
    let rows = move || objects.with(|objects| selection.with(|selection| outliner_rows(objects, selection)));
    let nothing_selected = move || selection.with(Selection::is_empty);

    let on_group = move |_: leptos::ev::MouseEvent| {
        let members = selection.with(|s| s.ids().to_vec());
        if !members.is_empty() {
            on_intent.run(OutlinerIntent::CreateGroup(members));
        }
    };

    view! {
        <section class="panel outliner">
            <header class="panel__header">
                <span class="panel__title">"Scene"</span>
                <span class="panel__count">{move || objects.with(Vec::len)}</span>
                <div class="panel__actions">
                    <button
                        class="panel__btn"
                        title="Group selected objects"
                        disabled=nothing_selected
                        on:click=on_group
                    >
                        "Group"
                    </button>
                    <button
                        class="panel__btn"
                        title="Clear selection"
                        disabled=nothing_selected
                        on:click=move |_| on_intent.run(OutlinerIntent::ClearSelection)
                    >
                        "Clear"
                    </button>
                </div>
            </header>
            <ul class="outliner__list">
                {move || {
                    rows()
                        .into_iter()
                        .map(|row| view! { <OutlinerRowView row=row on_intent=on_intent/> })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}

#[component]
fn OutlinerRowView(row: OutlinerRow, on_intent: Callback<OutlinerIntent>) -> impl IntoView {
    let select_id = row.id.clone();
    let visibility_id = row.id.clone();
    let lock_id = row.id.clone();

    let row_hidden = !row.visible;
    let visibility_title = if row.visible { "Hide" } else { "Show" };
    let lock_title = if row.locked { "Unlock" } else { "Lock" };

    let on_select = move |ev: leptos::ev::MouseEvent| {
        let multi = is_multi_select(ev.ctrl_key(), ev.meta_key(), ev.shift_key());
        on_intent.run(OutlinerIntent::Select {
            id: select_id.clone(),
            multi,
        });
    };
    let on_visibility = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_intent.run(OutlinerIntent::ToggleVisibility(visibility_id.clone()));
    };
    let on_lock = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_intent.run(OutlinerIntent::ToggleLock(lock_id.clone()));
    };

    view! {
        <li
            class="outliner__row"
            class:outliner__row--selected=row.selected
            class:outliner__row--hidden=row_hidden
            class:outliner__row--locked=row.locked
            style:padding-left=row_indent(row.depth)
            on:click=on_select
        >
            <span class=format!("outliner__icon outliner__icon--{}", row.kind.as_str())>{kind_glyph(row.kind)}</span>
            <span class="outliner__name">{row.name}</span>
            <button
                class="outliner__toggle"
                title=visibility_title
                on:click=on_visibility
            >
                {if row.visible { "◉" } else { "○" }}
            </button>
            <button
                class="outliner__toggle"
                class:outliner__toggle--on=row.locked
                title=lock_title
                on:click=on_lock
            >
                {if row.locked { "🔒" } else { "🔓" }}
            </button>
        </li>
    }
}

/// Ctrl, Cmd and Shift clicks all extend the selection.
fn is_multi_select(ctrl: bool, meta: bool, shift: bool) -> bool {
    ctrl || meta || shift
}

fn row_indent(depth: usize) -> String {
    format!("{}px", ROW_BASE_INDENT_PX + depth * ROW_DEPTH_INDENT_PX)
}

fn kind_glyph(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Brick => "▭",
        ObjectKind::Anchor => "⚓",
        ObjectKind::Group => "▣",
    }
}

//! Breadcrumb trail above the creator toolbar.

use leptos::prelude::*;
use scene::LayoutAction;
use scene::breadcrumb::{BreadcrumbEvent, BreadcrumbItem, resolve_click};

/// Renders `items` separated by slashes. The last step is the current
/// location and is never clickable.
#[component]
pub fn Breadcrumb(
    items: Vec<BreadcrumbItem>,
    on_navigate: Callback<String>,
    on_action: Callback<LayoutAction>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    let trail = StoredValue::new(items.clone());

    let on_step = move |index: usize| match trail.with_value(|items| resolve_click(items, index)) {
        Some(BreadcrumbEvent::Navigate(path)) => on_navigate.run(path),
        Some(BreadcrumbEvent::Action(action)) => on_action.run(action),
        None => {}
    };

    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            {items
                .into_iter()
                .enumerate()
                .map(move |(index, item)| {
                    let is_current = index == last;
                    let inert = is_current || item.target.is_none();
                    view! {
                        <span class="breadcrumb__step">
                            {(index > 0).then(|| view! { <span class="breadcrumb__separator">"/"</span> })}
                            <button
                                class="breadcrumb__link"
                                class:breadcrumb__link--current=is_current
                                disabled=inert
                                on:click=move |_| on_step(index)
                            >
                                {item.label}
                            </button>
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

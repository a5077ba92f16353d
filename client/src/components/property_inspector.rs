//! Property inspector for the single selected scene object.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `ObjectProperties` derived by the page controller and reports each
//! committed field as a `PropertyEdit`. Numeric fields are parsed leniently;
//! input that does not parse is dropped. Locked objects render read-only
//! except for the lock toggle itself.

#[cfg(test)]
#[path = "property_inspector_test.rs"]
mod property_inspector_test;

use leptos::prelude::*;
use scene::ObjectProperties;
use scene::properties::{Axis, PropertyEdit, Vec3, clamp_opacity, parse_number_input};

#[component]
pub fn PropertyInspector(
    #[prop(into)] properties: Signal<Option<ObjectProperties>>,
    #[prop(into)] selected_count: Signal<usize>,
    on_change: Callback<PropertyEdit>,
) -> impl IntoView {
    view! {
        <section class="panel inspector">
            <header class="panel__header">
                <span class="panel__title">"Properties"</span>
            </header>
            {move || match properties.get() {
                Some(props) => view! { <InspectorFields props=props on_change=on_change/> }.into_any(),
                None => {
                    let count = selected_count.get();
                    view! {
                        <div class="inspector__empty">
                            <span class="inspector__empty-label">{empty_state_label(count)}</span>
                            <span class="inspector__empty-hint">{empty_state_hint(count)}</span>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn InspectorFields(props: ObjectProperties, on_change: Callback<PropertyEdit>) -> impl IntoView {
    let locked = props.locked;
    let transform = props.transform;
    let emit = move |edit: PropertyEdit| on_change.run(edit);

    let on_name = move |ev: leptos::ev::Event| emit(PropertyEdit::Name(event_target_value(&ev)));
    let on_color = move |ev: leptos::ev::Event| emit(PropertyEdit::Color(event_target_value(&ev)));
    let on_opacity = move |ev: leptos::ev::Event| {
        if let Some(value) = parse_number_input(&event_target_value(&ev)) {
            emit(PropertyEdit::Opacity(clamp_opacity(value)));
        }
    };
    let on_visible = move |ev: leptos::ev::Event| emit(PropertyEdit::Visible(event_target_checked(&ev)));
    let on_locked = move |ev: leptos::ev::Event| emit(PropertyEdit::Locked(event_target_checked(&ev)));

    let on_position = Callback::new(move |(axis, value): (Axis, f64)| emit(PropertyEdit::Position(axis, value)));
    let on_rotation = Callback::new(move |(axis, value): (Axis, f64)| emit(PropertyEdit::Rotation(axis, value)));
    let on_scale = Callback::new(move |(axis, value): (Axis, f64)| emit(PropertyEdit::Scale(axis, value)));

    let metadata = props
        .metadata
        .into_iter()
        .map(|(key, value)| view! { <MetaRow label=key value=value/> })
        .collect::<Vec<_>>();

    view! {
        <div class="inspector__section inspector__identity">
            <span class="inspector__kind">{props.kind.label()}</span>
            <span class="inspector__id">{short_id(&props.id)}</span>
        </div>

        <div class="inspector__section">
            <label class="inspector__label" for="inspector-name">"Name"</label>
            <input
                id="inspector-name"
                class="inspector__input"
                prop:value=props.name
                disabled=locked
                on:change=on_name
            />
        </div>

        <div class="inspector__section">
            <span class="inspector__section-title">"Transform"</span>
            <VectorRow label="Position" value=transform.position disabled=locked on_commit=on_position/>
            <VectorRow label="Rotation" value=transform.rotation disabled=locked on_commit=on_rotation/>
            <VectorRow label="Scale" value=transform.scale disabled=locked on_commit=on_scale/>
        </div>

        <div class="inspector__section">
            <span class="inspector__section-title">"Appearance"</span>
            <div class="inspector__inline">
                <span class="inspector__label">"Material"</span>
                <span class="inspector__value">{props.material}</span>
            </div>
            <div class="inspector__inline">
                <label class="inspector__label" for="inspector-color">"Color"</label>
                <input
                    id="inspector-color"
                    class="inspector__color"
                    type="color"
                    prop:value=props.color
                    disabled=locked
                    on:change=on_color
                />
            </div>
            <div class="inspector__inline">
                <label class="inspector__label" for="inspector-opacity">"Opacity"</label>
                <input
                    id="inspector-opacity"
                    class="inspector__input"
                    inputmode="decimal"
                    prop:value=format_number(props.opacity)
                    disabled=locked
                    on:change=on_opacity
                />
            </div>
        </div>

        <div class="inspector__section">
            <label class="inspector__check">
                <input type="checkbox" prop:checked=props.visible disabled=locked on:change=on_visible/>
                "Visible"
            </label>
            <label class="inspector__check">
                <input type="checkbox" prop:checked=locked on:change=on_locked/>
                "Locked"
            </label>
        </div>

        <div class="inspector__section inspector__meta">
            <span class="inspector__section-title">"Metadata"</span>
            {metadata}
        </div>
    }
}

#[component]
fn VectorRow(
    label: &'static str,
    value: Vec3,
    disabled: bool,
    on_commit: Callback<(Axis, f64)>,
) -> impl IntoView {
    view! {
        <div class="inspector__vector">
            <span class="inspector__label">{label}</span>
            {Axis::ALL
                .into_iter()
                .map(move |axis| {
                    view! {
                        <input
                            class="inspector__input inspector__input--axis"
                            inputmode="decimal"
                            title=format!("{label} {}", axis.label())
                            prop:value=format_number(value.get(axis))
                            disabled=disabled
                            on:change=move |ev| {
                                if let Some(parsed) = parse_number_input(&event_target_value(&ev)) {
                                    on_commit.run((axis, parsed));
                                }
                            }
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn MetaRow(label: String, value: String) -> impl IntoView {
    view! {
        <div class="inspector__meta-row">
            <span class="inspector__label">{label}</span>
            <span class="inspector__value">{value}</span>
        </div>
    }
}

fn empty_state_label(selected: usize) -> String {
    match selected {
        0 => "No selection".to_owned(),
        1 => "Selected object not found".to_owned(),
        n => format!("{n} objects selected"),
    }
}

fn empty_state_hint(selected: usize) -> &'static str {
    match selected {
        0 => "Select an object in the scene outliner to edit it.",
        1 => "The selected id is not part of this scene.",
        _ => "Select a single object to edit its properties.",
    }
}

/// Trim trailing zeros so `1.0` renders as `1` and `0.250` as `0.25`.
fn format_number(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn short_id(id: &str) -> String {
    const MAX: usize = 14;
    if id.chars().count() <= MAX {
        id.to_owned()
    } else {
        let head: String = id.chars().take(MAX).collect();
        format!("{head}…")
    }
}

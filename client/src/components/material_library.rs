//! Material library: searchable catalog with favorites and downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search/category/favorites filter is the only state kept here. The
//! selected material and the shelf (favorites, downloads) belong to the page
//! controller and arrive as signals; clicks leave as `MaterialIntent`.

#[cfg(test)]
#[path = "material_library_test.rs"]
mod material_library_test;

use leptos::prelude::*;
use scene::material::{Material, MaterialCategory, MaterialFilter, MaterialIntent, MaterialShelf};

#[component]
pub fn MaterialLibrary(
    materials: Vec<Material>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] shelf: Signal<MaterialShelf>,
    on_intent: Callback<MaterialIntent>,
) -> impl IntoView {
    let filter = RwSignal::new(MaterialFilter::default());
    let catalog = StoredValue::new(materials);

    let visible = move || {
        let current = filter.get();
        shelf.with(|shelf| {
            catalog.with_value(|all| current.apply(all, shelf).into_iter().cloned().collect::<Vec<_>>())
        })
    };

    view! {
        <section class="panel materials">
            <header class="panel__header">
                <span class="panel__title">"Materials"</span>
                <span class="panel__count">{move || visible().len()}</span>
            </header>

            <div class="materials__filters">
                <input
                    class="materials__search"
                    type="search"
                    placeholder="Search materials"
                    prop:value=move || filter.get().query
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    class="materials__category"
                    on:change=move |ev| filter.update(|f| f.category = parse_category(&event_target_value(&ev)))
                >
                    <option value="">"All categories"</option>
                    {MaterialCategory::ALL
                        .into_iter()
                        .map(|category| view! { <option value=category.as_str()>{category.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <label class="materials__favorites-only">
                    <input
                        type="checkbox"
                        prop:checked=move || filter.get().favorites_only
                        on:change=move |ev| filter.update(|f| f.favorites_only = event_target_checked(&ev))
                    />
                    "Favorites"
                </label>
            </div>

            <ul class="materials__grid">
                {move || {
                    let items = visible();
                    if items.is_empty() {
                        return view! { <li class="materials__empty">"No materials match."</li> }.into_any();
                    }
                    items
                        .into_iter()
                        .map(|material| {
                            view! {
                                <MaterialCard
                                    material=material
                                    selected=selected
                                    shelf=shelf
                                    on_intent=on_intent
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </ul>
        </section>
    }
}

#[component]
fn MaterialCard(
    material: Material,
    selected: Signal<Option<String>>,
    shelf: Signal<MaterialShelf>,
    on_intent: Callback<MaterialIntent>,
) -> impl IntoView {
    let is_selected = {
        let id = material.id.clone();
        move || selected.with(|s| s.as_deref() == Some(id.as_str()))
    };
    let is_favorite = {
        let id = material.id.clone();
        move || shelf.with(|s| s.is_favorite(&id))
    };
    let is_downloaded = {
        let id = material.id.clone();
        move || shelf.with(|s| s.is_downloaded(&id))
    };

    let select_id = material.id.clone();
    let favorite_id = material.id.clone();
    let download_id = material.id;

    let on_select = move |_: leptos::ev::MouseEvent| on_intent.run(MaterialIntent::Select(select_id.clone()));
    let on_favorite = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_intent.run(MaterialIntent::ToggleFavorite(favorite_id.clone()));
    };
    let on_download = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        on_intent.run(MaterialIntent::Download(download_id.clone()));
    };

    let favorite_glyph = {
        let is_favorite = is_favorite.clone();
        move || if is_favorite() { "★" } else { "☆" }
    };
    let download_label = {
        let is_downloaded = is_downloaded.clone();
        move || if is_downloaded() { "Downloaded" } else { "Download" }
    };

    view! {
        <li class="material-card" class:material-card--selected=is_selected on:click=on_select>
            <span class="material-card__swatch" style:background=material.color></span>
            <span class="material-card__name">{material.name}</span>
            <span class="material-card__meta">
                {format!("{} · {}", material.category.label(), format_size(material.size_kb))}
            </span>
            <div class="material-card__actions">
                <button
                    class="material-card__btn"
                    class:material-card__btn--on=is_favorite
                    title="Favorite"
                    on:click=on_favorite
                >
                    {favorite_glyph}
                </button>
                <button
                    class="material-card__btn"
                    disabled=is_downloaded
                    title="Download"
                    on:click=on_download
                >
                    {download_label}
                </button>
            </div>
        </li>
    }
}

fn parse_category(value: &str) -> Option<MaterialCategory> {
    MaterialCategory::ALL
        .into_iter()
        .find(|category| category.as_str() == value)
}

fn format_size(size_kb: u32) -> String {
    if size_kb >= 1024 {
        format!("{:.1} MB", f64::from(size_kb) / 1024.0)
    } else {
        format!("{size_kb} KB")
    }
}

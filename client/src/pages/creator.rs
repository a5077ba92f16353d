//! Creator page: owner of the page controller and host of the layout shell.
//!
//! ARCHITECTURE
//! ============
//! `CreatorPage` keeps one `RwSignal<PageController>`. Every panel receives
//! derived read-only signals plus a callback; the callback hands the intent
//! to the controller inside a single signal update. Requests meant for the
//! embedding page (back, navigate) leave through the optional host callbacks.
//!
//! `CreatorRoute` is the router-facing wrapper that maps those host callbacks
//! onto client-side navigation.

#[cfg(test)]
#[path = "creator_test.rs"]
mod creator_test;

use std::fmt::Display;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use scene::material::MaterialIntent;
use scene::outliner::OutlinerIntent;
use scene::properties::PropertyEdit;
use scene::{HostRequest, LayoutAction, PageController};

use crate::components::layout_shell::LayoutShell;
use crate::components::material_library::MaterialLibrary;
use crate::components::property_inspector::PropertyInspector;
use crate::components::scene_outliner::SceneOutliner;
use crate::util::fullscreen;

pub const DEFAULT_PROJECT_NAME: &str = "Riverside Pavilion";

/// The creator interface. All host callbacks are optional; without them the
/// corresponding requests are only logged.
#[component]
pub fn CreatorPage(
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional)] on_action: Option<Callback<LayoutAction>>,
    #[prop(optional)] on_navigate: Option<Callback<String>>,
    #[prop(optional, into)] project_name: Option<String>,
) -> impl IntoView {
    let controller = RwSignal::new(PageController::demo());

    let objects = Signal::derive(move || controller.with(|c| c.objects.clone()));
    let selection = Signal::derive(move || controller.with(|c| c.selection.clone()));
    let selected_count = Signal::derive(move || controller.with(|c| c.selection.len()));
    let properties = Signal::derive(move || controller.with(PageController::properties));
    let telemetry = Signal::derive(move || controller.with(PageController::telemetry));
    let panels = Signal::derive(move || controller.with(|c| c.panels));
    let selected_material = Signal::derive(move || controller.with(|c| c.selected_material.clone()));
    let shelf = Signal::derive(move || controller.with(|c| c.shelf.clone()));
    let catalog = controller.with_untracked(|c| c.materials().to_vec());

    let handle_action = Callback::new(move |action: LayoutAction| {
        let request = controller.try_update(|c| c.handle_layout_action(&action)).flatten();
        if let Some(observer) = on_action {
            observer.run(action);
        }
        match request {
            Some(HostRequest::Back) => match on_back {
                Some(back) => back.run(()),
                None => log::debug!("creator: back requested without a host handler"),
            },
            Some(HostRequest::Navigate(path)) => match on_navigate {
                Some(navigate) => navigate.run(path),
                None => log::debug!("creator: navigation to {path} requested without a host handler"),
            },
            None => {}
        }
    });

    let handle_outliner = Callback::new(move |intent: OutlinerIntent| {
        report_outcome("outliner", controller.try_update(|c| c.handle_outliner(intent)));
    });

    let handle_edit = Callback::new(move |edit: PropertyEdit| {
        report_outcome("property edit", controller.try_update(|c| c.handle_property_edit(edit)));
    });

    let handle_material = Callback::new(move |intent: MaterialIntent| {
        report_outcome("material library", controller.try_update(|c| c.handle_material(intent)));
    });

    view! {
        <LayoutShell
            project_name=project_title(project_name)
            panels=panels
            telemetry=telemetry
            selected_count=selected_count
            on_action=handle_action
            outliner=move || view! {
                <SceneOutliner objects=objects selection=selection on_intent=handle_outliner/>
            }
            properties=move || view! {
                <PropertyInspector
                    properties=properties
                    selected_count=selected_count
                    on_change=handle_edit
                />
            }
            materials=move || view! {
                <MaterialLibrary
                    materials=catalog.clone()
                    selected=selected_material
                    shelf=shelf
                    on_intent=handle_material
                />
            }
        />
    }
}

/// Route wrapper: back returns to the landing page, navigation requests go
/// through the router, and the fullscreen action drives the browser API.
#[component]
pub fn CreatorRoute() -> impl IntoView {
    let navigate = use_navigate();
    let pending_route = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(path) = pending_route.get() {
            pending_route.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_back = Callback::new(move |()| pending_route.set(Some("/".to_owned())));
    let on_navigate = Callback::new(move |path: String| pending_route.set(Some(path)));
    let on_action = Callback::new(move |action: LayoutAction| {
        log::debug!("creator action: {}", action.name());
        if action == LayoutAction::Fullscreen {
            let active = fullscreen::toggle();
            log::info!("fullscreen {}", if active { "entered" } else { "left" });
        }
    });

    view! {
        <CreatorPage
            on_back=on_back
            on_action=on_action
            on_navigate=on_navigate
            project_name=DEFAULT_PROJECT_NAME
        />
    }
}

fn project_title(name: Option<String>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.trim().to_owned(),
        _ => DEFAULT_PROJECT_NAME.to_owned(),
    }
}

/// Log a rejected intent. Returns whether the intent was applied.
fn report_outcome<E: Display>(context: &str, outcome: Option<Result<(), E>>) -> bool {
    match outcome {
        Some(Ok(())) => true,
        Some(Err(e)) => {
            log::warn!("{context}: {e}");
            false
        }
        None => {
            log::warn!("{context}: creator state is no longer available");
            false
        }
    }
}

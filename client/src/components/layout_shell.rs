//! Layout shell: breadcrumb, toolbar, side panels, viewport and status bar.
//!
//! ARCHITECTURE
//! ============
//! The shell owns the transient chrome state (`ShellState`) and nothing
//! else. Every control below it reports through one dispatch callback: the
//! shell applies the action to its own state, then forwards it unchanged
//! through `on_action` so the page controller sees every action. Panel
//! bodies are passed in as view slots; the shell only decides whether each
//! slot is shown.

#[cfg(test)]
#[path = "layout_shell_test.rs"]
mod layout_shell_test;

use leptos::prelude::*;
use scene::LayoutAction;
use scene::breadcrumb::creator_trail;
use scene::panels::PanelVisibility;
use scene::shell::ShellState;
use scene::telemetry::Telemetry;

use crate::components::breadcrumb::Breadcrumb;
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;
use crate::components::viewport::Viewport;

#[component]
pub fn LayoutShell(
    #[prop(into)] project_name: String,
    #[prop(into)] panels: Signal<PanelVisibility>,
    #[prop(into)] telemetry: Signal<Telemetry>,
    #[prop(into)] selected_count: Signal<usize>,
    on_action: Callback<LayoutAction>,
    #[prop(into)] outliner: ViewFn,
    #[prop(into)] properties: ViewFn,
    #[prop(into)] materials: ViewFn,
) -> impl IntoView {
    let shell = RwSignal::new(ShellState::default());

    let dispatch = Callback::new(move |action: LayoutAction| {
        let mut chrome_changed = false;
        shell.update(|state| chrome_changed = state.apply(&action));
        if chrome_changed {
            log::debug!("shell: {} applied", action.name());
        }
        on_action.run(action);
    });
    let on_navigate = Callback::new(move |path: String| dispatch.run(LayoutAction::Navigate { path }));

    view! {
        <div class="layout-shell" class:layout-shell--fullscreen=move || shell.get().fullscreen>
            <div class="layout-shell__top">
                <Breadcrumb items=creator_trail(&project_name) on_navigate=on_navigate on_action=dispatch/>
                <Toolbar shell=shell panels=panels on_action=dispatch/>
            </div>

            <div class="layout-shell__body">
                <Show when=move || panels.get().outliner>
                    <aside class="layout-shell__left">{outliner.run()}</aside>
                </Show>

                <main class="layout-shell__center">
                    <Viewport shell=shell selected_count=selected_count/>
                </main>

                <aside
                    class="layout-shell__right"
                    class:layout-shell__right--empty=move || !right_column_visible(panels.get())
                >
                    <Show when=move || panels.get().properties>{properties.run()}</Show>
                    <Show when=move || panels.get().materials>{materials.run()}</Show>
                </aside>
            </div>

            <StatusBar telemetry=telemetry shell=shell/>
        </div>
    }
}

fn right_column_visible(panels: PanelVisibility) -> bool {
    panels.properties || panels.materials
}

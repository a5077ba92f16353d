//! Creator toolbar: project actions, tool modes, view settings, playback and
//! panel toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every button reports a `LayoutAction` through `on_action`; active states
//! are read back from the shell's chrome state and the page's panel flags.

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod toolbar_test;

use leptos::prelude::*;
use scene::LayoutAction;
use scene::panels::{Panel, PanelVisibility};
use scene::playback::PlaybackState;
use scene::shell::{ShellState, ToolMode};
use scene::viewport::ViewMode;

#[component]
pub fn Toolbar(
    #[prop(into)] shell: Signal<ShellState>,
    #[prop(into)] panels: Signal<PanelVisibility>,
    on_action: Callback<LayoutAction>,
) -> impl IntoView {
    let emit = move |action: LayoutAction| on_action.run(action);
    let playback = move || shell.get().playback;

    view! {
        <header class="toolbar">
            <div class="toolbar__group">
                <button class="toolbar__btn" title="New project" on:click=move |_| emit(LayoutAction::NewProject)>
                    "New"
                </button>
                <button class="toolbar__btn" title="Save project" on:click=move |_| emit(LayoutAction::SaveProject)>
                    "Save"
                </button>
            </div>

            <span class="toolbar__divider"></span>

            <div class="toolbar__group">
                {ToolMode::ALL
                    .into_iter()
                    .map(move |tool| {
                        view! {
                            <button
                                class="toolbar__btn"
                                class:toolbar__btn--active=move || shell.get().active_tool == tool
                                title=tool_title(tool)
                                on:click=move |_| emit(LayoutAction::SetTool { tool })
                            >
                                {tool.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <span class="toolbar__divider"></span>

            <div class="toolbar__group">
                {ViewMode::ALL
                    .into_iter()
                    .map(move |mode| {
                        view! {
                            <button
                                class="toolbar__btn"
                                class:toolbar__btn--active=move || shell.get().view_mode == mode
                                title=format!("{} view", mode.label())
                                on:click=move |_| emit(LayoutAction::SetViewMode { mode })
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="toolbar__btn"
                    class:toolbar__btn--active=move || shell.get().grid_visible
                    title="Toggle grid"
                    on:click=move |_| emit(LayoutAction::ToggleGrid)
                >
                    "Grid"
                </button>
                <button
                    class="toolbar__btn"
                    class:toolbar__btn--active=move || shell.get().snap_enabled
                    title="Toggle snapping"
                    on:click=move |_| emit(LayoutAction::ToggleSnap)
                >
                    "Snap"
                </button>
            </div>

            <span class="toolbar__divider"></span>

            <div class="toolbar__group">
                <button
                    class="toolbar__btn toolbar__btn--play"
                    class:toolbar__btn--active=move || playback() == PlaybackState::Playing
                    title="Start construction"
                    on:click=move |_| emit(LayoutAction::StartConstruction)
                >
                    "Play"
                </button>
                <button
                    class="toolbar__btn"
                    class:toolbar__btn--active=move || playback() == PlaybackState::Paused
                    title="Pause construction"
                    on:click=move |_| emit(LayoutAction::PauseConstruction)
                >
                    "Pause"
                </button>
                <button
                    class="toolbar__btn"
                    title="Stop construction"
                    on:click=move |_| emit(LayoutAction::StopConstruction)
                >
                    "Stop"
                </button>
            </div>

            <div class="toolbar__spacer"></div>

            <div class="toolbar__group">
                {Panel::ALL
                    .into_iter()
                    .map(move |panel| {
                        view! {
                            <button
                                class="toolbar__btn"
                                class:toolbar__btn--active=move || panels.get().is_visible(panel)
                                title=format!("Toggle {} panel", panel.label())
                                on:click=move |_| emit(LayoutAction::TogglePanel { panel })
                            >
                                {panel.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="toolbar__btn"
                    class:toolbar__btn--active=move || shell.get().fullscreen
                    title="Fullscreen"
                    on:click=move |_| emit(LayoutAction::Fullscreen)
                >
                    "Full"
                </button>
            </div>
        </header>
    }
}

fn tool_title(tool: ToolMode) -> String {
    format!("{} ({})", tool.label(), tool.shortcut())
}

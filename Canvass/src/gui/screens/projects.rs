//! Projects screen
//!
//! Project list over the manifest library: create (name + memory scope),
//! rename, delete (through the confirm gate), and a detail pane for the
//! selected project.

use std::thread;

use floem::event::{Event, EventListener};
use floem::ext_event::create_ext_action;
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;

use crate::gui::shared::{colors, field_label, ghost_button, input_style};
use crate::gui::state::{AppState, DeleteTarget, ProjectsState};
use crate::gui::utils::ext_action_scope;
use crate::projects::{MemoryScope, Project};

/// Result type for background library operations
enum ProjectsResult {
    ListDone {
        projects: Vec<Project>,
        error: Option<String>,
    },
    CreateDone {
        project: Option<Project>,
        error: Option<String>,
    },
    RenameDone {
        old_name: String,
        project: Option<Project>,
        error: Option<String>,
    },
    DeleteDone {
        name: String,
        error: Option<String>,
    },
}

fn create_result_sender(state: ProjectsState) -> impl FnOnce(ProjectsResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_projects_result(state, result);
    })
}

/// Keep the selection valid after the list changes.
fn fix_selection(state: &ProjectsState) {
    let projects = state.projects.get_untracked();
    let active = state.active.get_untracked();
    let still_there = active
        .as_deref()
        .is_some_and(|name| projects.iter().any(|p| p.name == name));
    if !still_there {
        state.active.set(projects.front().map(|p| p.name.clone()));
    }
}

/// Handle results from background library operations. Owns every flag
/// reset and the only writes into the project list.
fn handle_projects_result(state: ProjectsState, result: ProjectsResult) {
    match result {
        ProjectsResult::ListDone { projects, error } => {
            if let Some(err) = error {
                tracing::error!("project listing failed: {err}");
                state.status_message.set(format!("Listing failed: {err}"));
            } else {
                state.projects.set(projects.into_iter().collect());
                fix_selection(&state);
            }
            state.loading.set(false);
        }
        ProjectsResult::CreateDone { project, error } => {
            if let Some(err) = error {
                tracing::error!("project creation failed: {err}");
                state.status_message.set(format!("Create failed: {err}"));
            } else if let Some(project) = project {
                let name = project.name.clone();
                state.projects.update(|projects| projects.push_back(project));
                state.active.set(Some(name));
                state.reset_new_modal();
            }
        }
        ProjectsResult::RenameDone {
            old_name,
            project,
            error,
        } => {
            if let Some(err) = error {
                tracing::error!("project rename failed: {err}");
                state.status_message.set(format!("Rename failed: {err}"));
            } else if let Some(project) = project {
                let new_name = project.name.clone();
                state.projects.update(|projects| {
                    if let Some(slot) = projects.iter_mut().find(|p| p.name == old_name) {
                        *slot = project;
                    }
                });
                if state.active.get_untracked().as_deref() == Some(old_name.as_str()) {
                    state.active.set(Some(new_name));
                }
                state.reset_rename_modal();
            }
        }
        ProjectsResult::DeleteDone { name, error } => {
            if let Some(err) = error {
                tracing::error!("project delete failed for '{name}': {err}");
                state.status_message.set(format!("Delete failed: {err}"));
            } else {
                state.projects.update(|projects| projects.retain(|p| p.name != name));
                fix_selection(&state);
            }
        }
    }
}

/// List all projects on a background thread.
pub fn load_projects(state: ProjectsState) {
    state.loading.set(true);
    let library = state.library.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match library.list() {
            Ok(projects) => ProjectsResult::ListDone {
                projects,
                error: None,
            },
            Err(e) => ProjectsResult::ListDone {
                projects: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Create a project from the new-project modal.
fn create_project(state: ProjectsState) {
    let name = state.new_name.get_untracked();
    if name.trim().is_empty() {
        return;
    }
    let library = state.library.clone();
    let scope = state.new_scope.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match library.create(&name, scope) {
            Ok(project) => ProjectsResult::CreateDone {
                project: Some(project),
                error: None,
            },
            Err(e) => ProjectsResult::CreateDone {
                project: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Rename the project held in the rename modal.
fn rename_project(state: ProjectsState) {
    let Some(old_name) = state.rename_target.get_untracked() else {
        return;
    };
    let new_name = state.rename_name.get_untracked();
    if new_name.trim().is_empty() {
        return;
    }
    let library = state.library.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match library.rename(&old_name, &new_name) {
            Ok(project) => ProjectsResult::RenameDone {
                old_name,
                project: Some(project),
                error: None,
            },
            Err(e) => ProjectsResult::RenameDone {
                old_name,
                project: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Remove a project. Called by the confirm dispatcher only.
pub fn delete_project(state: ProjectsState, name: String) {
    let library = state.library.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match library.delete(&name) {
            Ok(()) => ProjectsResult::DeleteDone { name, error: None },
            Err(e) => ProjectsResult::DeleteDone {
                name,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

fn row_menu(state: ProjectsState, app: AppState, name: String) -> impl IntoView {
    let menu_open = state.menu_open;
    let name_for_gate = name.clone();
    let name_for_rename = name.clone();
    let name_for_check = name.clone();

    v_stack((
        label(|| "Rename")
            .style(|s| {
                s.width_full()
                    .padding_horiz(12.0)
                    .padding_vert(8.0)
                    .font_size(13.0)
                    .color(colors().text_primary)
                    .cursor(CursorStyle::Pointer)
                    .hover(|s| s.background(colors().bg_surface))
            })
            .on_click_stop(move |_| {
                menu_open.set(None);
                state.rename_name.set(name_for_rename.clone());
                state.rename_target.set(Some(name_for_rename.clone()));
            }),
        label(|| "Delete")
            .style(|s| {
                s.width_full()
                    .padding_horiz(12.0)
                    .padding_vert(8.0)
                    .font_size(13.0)
                    .color(colors().error)
                    .cursor(CursorStyle::Pointer)
                    .hover(|s| s.background(colors().error_bg))
            })
            .on_click_stop(move |_| {
                menu_open.set(None);
                app.request_delete(
                    name_for_gate.clone(),
                    DeleteTarget::Project {
                        name: name_for_gate.clone(),
                    },
                );
            }),
    ))
    .style(move |s| {
        let c = colors();
        let s = s
            .absolute()
            .inset_top(34.0)
            .inset_right(0.0)
            .width(144.0)
            .flex_col()
            .background(c.bg_base)
            .border(1.0)
            .border_color(c.border)
            .border_radius(8.0)
            .box_shadow_blur(16.0)
            .box_shadow_color(Color::rgba8(0, 0, 0, 40))
            .z_index(50);
        if menu_open.get().as_deref() == Some(name_for_check.as_str()) {
            s
        } else {
            s.display(floem::style::Display::None)
        }
    })
    // Presses inside the menu must not reach the screen's close-on-click
    .on_event_stop(EventListener::PointerDown, |_| {})
}

fn project_row(state: ProjectsState, app: AppState, project: Project) -> impl IntoView {
    let name = project.name.clone();
    let active = state.active;
    let menu_open = state.menu_open;

    let name_for_select = name.clone();
    let name_for_style = name.clone();
    let name_for_toggle = name.clone();
    let name_for_menu = name.clone();
    let display_name = name.clone();

    h_stack((
        label(move || format!("📁 {display_name}")).style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .text_ellipsis()
                .flex_grow(1.0)
        }),
        container(
            label(|| "⋯")
                .style(move |s| {
                    let c = colors();
                    s.padding_horiz(6.0)
                        .padding_vert(2.0)
                        .border_radius(6.0)
                        .font_size(14.0)
                        .color(c.text_muted)
                        .cursor(CursorStyle::Pointer)
                        .hover(|s| s.background(colors().bg_elevated))
                })
                .on_event_stop(EventListener::PointerDown, move |_| {
                    let toggled = if menu_open.get_untracked().as_deref()
                        == Some(name_for_toggle.as_str())
                    {
                        None
                    } else {
                        Some(name_for_toggle.clone())
                    };
                    menu_open.set(toggled);
                })
                .on_click_stop(|_| {}),
        ),
        row_menu(state, app, name_for_menu),
    ))
    .style(move |s| {
        let c = colors();
        let is_active = active.get().as_deref() == Some(name_for_style.as_str());
        let s = s
            .width_full()
            .items_center()
            .padding_horiz(12.0)
            .padding_vert(10.0)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer)
            .color(if is_active {
                c.text_primary
            } else {
                c.text_secondary
            });
        if is_active {
            s.background(c.bg_elevated)
        } else {
            s.hover(move |s| s.background(c.bg_surface).color(c.text_primary))
        }
    })
    .on_click_stop(move |_| {
        menu_open.set(None);
        active.set(Some(name_for_select.clone()));
    })
}

fn projects_sidebar(state: ProjectsState, app: AppState) -> impl IntoView {
    let projects = state.projects;
    let new_modal_open = state.new_modal_open;
    let state_for_rows = state.clone();

    v_stack((
        v_stack((
            label(|| "Projects").style(|s| {
                s.font_size(20.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            label(|| "Organize your campaign work").style(|s| {
                s.font_size(12.0)
                    .margin_top(4.0)
                    .color(colors().text_secondary)
            }),
        ))
        .style(|s| {
            s.width_full()
                .padding(24.0)
                .border_bottom(1.0)
                .border_color(colors().border)
        }),
        v_stack((
            button(label(|| "+ New Project"))
                .style(|s| {
                    let c = colors();
                    s.width_full()
                        .justify_center()
                        .padding_vert(8.0)
                        .font_size(13.0)
                        .font_weight(Weight::MEDIUM)
                        .border(0.0)
                        .border_radius(8.0)
                        .background(c.text_primary)
                        .color(c.text_inverse)
                        .cursor(CursorStyle::Pointer)
                        .hover(|s| s.background(colors().text_secondary))
                })
                .action(move || {
                    new_modal_open.set(true);
                }),
            dyn_stack(
                move || projects.get(),
                |project| project.name.clone(),
                move |project| project_row(state_for_rows.clone(), app.clone(), project),
            )
            .style(|s| s.width_full().flex_col().gap(4.0).margin_top(16.0)),
        ))
        .style(|s| s.width_full().padding(16.0)),
    ))
    .style(|s| {
        let c = colors();
        s.width(256.0)
            .height_full()
            .flex_col()
            .background(c.bg_base)
            .border_right(1.0)
            .border_color(c.border)
    })
}

fn project_detail(project: Project) -> impl IntoView {
    let title = project.name.clone();
    let prompt_placeholder = format!("Start a new chat in {}...", project.name);
    let scope = project.memory;
    let prompt = RwSignal::new(String::new());

    v_stack((
        h_stack((
            label(move || format!("📁 {title}")).style(|s| {
                s.font_size(28.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            label(move || format!("Memory: {}", scope.label())).style(|s| {
                let c = colors();
                s.padding_horiz(12.0)
                    .padding_vert(6.0)
                    .font_size(12.0)
                    .border(1.0)
                    .border_color(c.border)
                    .border_radius(100.0)
                    .color(c.text_secondary)
            }),
        ))
        .style(|s| s.width_full().items_center()),
        v_stack((
            text_input(prompt)
                .placeholder(prompt_placeholder)
                .style(|s| {
                    let c = colors();
                    s.width_full()
                        .padding(16.0)
                        .font_size(15.0)
                        .border(0.0)
                        .background(c.bg_base)
                        .color(c.text_primary)
                })
                .on_event_cont(EventListener::KeyDown, move |event| {
                    if let Event::KeyDown(key_event) = event {
                        if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                            prompt.set(String::new());
                        }
                    }
                }),
            h_stack((
                empty().style(|s| s.flex_grow(1.0)),
                button(label(|| "→"))
                    .style(|s| {
                        let c = colors();
                        s.width(36.0)
                            .height(36.0)
                            .items_center()
                            .justify_center()
                            .border(0.0)
                            .border_radius(8.0)
                            .background(c.text_primary)
                            .color(c.text_inverse)
                            .cursor(CursorStyle::Pointer)
                    })
                    .disabled(move || prompt.get().trim().is_empty())
                    .action(move || {
                        prompt.set(String::new());
                    }),
            ))
            .style(|s| s.width_full().padding(12.0).items_center()),
        ))
        .style(|s| {
            let c = colors();
            s.width_full()
                .margin_top(32.0)
                .background(c.bg_base)
                .border(1.0)
                .border_color(c.border)
                .border_radius(12.0)
                .box_shadow_blur(8.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 10))
        }),
        label(move || scope.description()).style(|s| {
            s.font_size(12.0)
                .margin_top(16.0)
                .color(colors().text_muted)
        }),
    ))
    .style(|s| s.width_full())
}

fn detail_pane(state: ProjectsState) -> impl IntoView {
    let projects = state.projects;
    let active = state.active;

    dyn_container(
        move || {
            let name = active.get();
            projects
                .get()
                .iter()
                .find(|p| Some(&p.name) == name.as_ref())
                .cloned()
        },
        move |selected| match selected {
            Some(project) => project_detail(project).into_any(),
            None => v_stack((
                label(|| "📁").style(|s| s.font_size(40.0)),
                label(|| "Select a project to view details").style(|s| {
                    s.font_size(13.0)
                        .margin_top(16.0)
                        .color(colors().text_secondary)
                }),
            ))
            .style(|s| s.size_full().items_center().justify_center())
            .into_any(),
        },
    )
    .style(|s| s.width_full().height_full())
}

fn scope_option(state: ProjectsState, scope: MemoryScope) -> impl IntoView {
    let selected = state.new_scope;

    v_stack((
        h_stack((
            label(move || scope.label()).style(|s| {
                s.font_size(13.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            empty().style(|s| s.flex_grow(1.0)),
            label(move || if selected.get() == scope { "✓" } else { "" })
                .style(|s| s.font_size(13.0).color(colors().text_primary)),
        ))
        .style(|s| s.width_full().items_center()),
        label(move || scope.description()).style(|s| {
            s.font_size(12.0)
                .margin_top(4.0)
                .color(colors().text_secondary)
        }),
    ))
    .style(move |s| {
        let c = colors();
        let s = s
            .width_full()
            .padding(12.0)
            .border(1.0)
            .border_radius(8.0)
            .cursor(CursorStyle::Pointer);
        if selected.get() == scope {
            s.border_color(c.border_strong).background(c.bg_surface)
        } else {
            s.border_color(c.border)
                .hover(move |s| s.background(c.bg_surface))
        }
    })
    .on_click_stop(move |_| {
        selected.set(scope);
    })
}

fn new_project_modal(state: ProjectsState) -> impl IntoView {
    let open = state.new_modal_open;
    let name = state.new_name;

    let state_for_shared = state.clone();
    let state_for_project_only = state.clone();
    let state_for_create = state.clone();
    let state_for_cancel = state.clone();
    let state_for_dismiss = state.clone();
    let state_for_escape = state.clone();

    container(
        v_stack((
            label(|| "New Project").style(|s| {
                s.font_size(18.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            field_label("Name"),
            text_input(name)
                .placeholder("e.g. Fall Campaign Strategy")
                .style(input_style),
            field_label("Memory"),
            label(|| "Note that this setting can't be changed later.").style(|s| {
                s.font_size(11.0).color(colors().text_muted)
            }),
            scope_option(state_for_shared, MemoryScope::Shared),
            scope_option(state_for_project_only, MemoryScope::ProjectOnly),
            h_stack((
                ghost_button("Cancel").on_click_stop(move |_| {
                    state_for_cancel.reset_new_modal();
                }),
                button(label(|| "Create Project"))
                    .style(|s| {
                        let c = colors();
                        s.padding_horiz(16.0)
                            .padding_vert(8.0)
                            .font_size(13.0)
                            .font_weight(Weight::MEDIUM)
                            .border(0.0)
                            .border_radius(8.0)
                            .background(c.text_primary)
                            .color(c.text_inverse)
                            .cursor(CursorStyle::Pointer)
                    })
                    .disabled(move || name.get().trim().is_empty())
                    .action(move || {
                        create_project(state_for_create.clone());
                    }),
            ))
            .style(|s| s.width_full().justify_end().gap(8.0).margin_top(8.0)),
        ))
        .style(|s| {
            let c = colors();
            s.width(480.0)
                .padding(24.0)
                .gap(12.0)
                .background(c.bg_base)
                .border_radius(12.0)
                .box_shadow_blur(20.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 60))
        })
        .on_click_stop(|_| {}),
    )
    .style(move |s| {
        let s = s
            .absolute()
            .inset_top(0.0)
            .inset_left(0.0)
            .inset_right(0.0)
            .inset_bottom(0.0)
            .items_center()
            .justify_center()
            .background(Color::rgba8(0, 0, 0, 100))
            .z_index(100);
        if open.get() {
            s
        } else {
            s.display(floem::style::Display::None)
        }
    })
    .on_click_stop(move |_| {
        state_for_dismiss.reset_new_modal();
    })
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                state_for_escape.reset_new_modal();
            }
        }
    })
    .keyboard_navigable()
}

fn rename_project_modal(state: ProjectsState) -> impl IntoView {
    let target = state.rename_target;
    let name = state.rename_name;

    let state_for_submit = state.clone();
    let state_for_save = state.clone();
    let state_for_cancel = state.clone();
    let state_for_dismiss = state.clone();
    let state_for_escape = state.clone();

    container(
        v_stack((
            label(|| "Rename Project").style(|s| {
                s.font_size(18.0)
                    .font_weight(Weight::SEMIBOLD)
                    .color(colors().text_primary)
            }),
            field_label("Name"),
            text_input(name)
                .style(input_style)
                .on_event_cont(EventListener::KeyDown, move |event| {
                    if let Event::KeyDown(key_event) = event {
                        if key_event.key.logical_key == Key::Named(NamedKey::Enter) {
                            rename_project(state_for_submit.clone());
                        }
                    }
                }),
            h_stack((
                ghost_button("Cancel").on_click_stop(move |_| {
                    state_for_cancel.reset_rename_modal();
                }),
                button(label(|| "Save"))
                    .style(|s| {
                        let c = colors();
                        s.padding_horiz(16.0)
                            .padding_vert(8.0)
                            .font_size(13.0)
                            .font_weight(Weight::MEDIUM)
                            .border(0.0)
                            .border_radius(8.0)
                            .background(c.text_primary)
                            .color(c.text_inverse)
                            .cursor(CursorStyle::Pointer)
                    })
                    .disabled(move || name.get().trim().is_empty())
                    .action(move || {
                        rename_project(state_for_save.clone());
                    }),
            ))
            .style(|s| s.width_full().justify_end().gap(8.0).margin_top(8.0)),
        ))
        .style(|s| {
            let c = colors();
            s.width(480.0)
                .padding(24.0)
                .gap(12.0)
                .background(c.bg_base)
                .border_radius(12.0)
                .box_shadow_blur(20.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 60))
        })
        .on_click_stop(|_| {}),
    )
    .style(move |s| {
        let s = s
            .absolute()
            .inset_top(0.0)
            .inset_left(0.0)
            .inset_right(0.0)
            .inset_bottom(0.0)
            .items_center()
            .justify_center()
            .background(Color::rgba8(0, 0, 0, 100))
            .z_index(100);
        if target.get().is_some() {
            s
        } else {
            s.display(floem::style::Display::None)
        }
    })
    .on_click_stop(move |_| {
        state_for_dismiss.reset_rename_modal();
    })
    .on_event_stop(EventListener::KeyDown, move |event| {
        if let Event::KeyDown(key_event) = event {
            if key_event.key.logical_key == Key::Named(NamedKey::Escape) {
                state_for_escape.reset_rename_modal();
            }
        }
    })
    .keyboard_navigable()
}

/// The projects screen.
pub fn projects_screen(state: ProjectsState, app: AppState) -> impl IntoView {
    let menu_open = state.menu_open;
    let status = state.status_message;
    let state_for_sidebar = state.clone();
    let state_for_detail = state.clone();
    let state_for_new = state.clone();
    let state_for_rename = state.clone();

    h_stack((
        projects_sidebar(state_for_sidebar, app),
        container(
            scroll(
                container(
                    v_stack((
                        detail_pane(state_for_detail),
                        label(move || status.get()).style(|s| {
                            s.font_size(12.0)
                                .margin_top(12.0)
                                .color(colors().text_secondary)
                        }),
                    ))
                    .style(|s| s.width_full().max_width(896.0).padding_horiz(32.0).padding_vert(48.0)),
                )
                .style(|s| s.width_full().justify_center()),
            )
            .style(|s| s.size_full()),
        )
        .style(|s| {
            s.flex_grow(1.0)
                .flex_basis(0.0)
                .height_full()
                .background(colors().bg_base)
        }),
        new_project_modal(state_for_new),
        rename_project_modal(state_for_rename),
    ))
    .style(|s| s.size_full())
    .on_event_cont(EventListener::PointerDown, move |_| {
        if menu_open.get_untracked().is_some() {
            menu_open.set(None);
        }
    })
}

//! Canvass GUI - campaign management desktop app
//!
//! Built with Floem. One window, sidebar navigation over screen views:
//! - Home prompt launcher and assistant chat
//! - Files for uploaded campaign documents
//! - Candidate Profile with bio, platform, opponents, and the brand kit
//! - Drafts, Guardrails, and Projects
//!
//! Screens own their state structs and background operations; this
//! module wires stores, config, and the shared deletion dialog.

pub mod screens;
pub mod shared;
pub mod state;
pub mod utils;

use std::sync::Arc;

use floem::Application;
use floem::event::EventListener;
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use floem::window::WindowConfig;
use hustings::prelude::*;

use crate::projects::ProjectLibrary;
use shared::{Theme, colors, confirm_dialog, init_theme};
use state::{
    ActiveScreen, AppState, ChatState, ConfigState, DraftsState, FilesState, GuardrailsState,
    PersistedConfig, ProfileState, ProjectsState,
};

/// Run the Canvass GUI application
pub fn run_app() -> crate::Result<()> {
    let persisted = PersistedConfig::load();

    let store = Arc::new(DiskStore::open_default()?);
    let storage = Arc::new(DiskStorage::open_default()?);
    let library = Arc::new(ProjectLibrary::open_default()?);
    library.ensure_defaults()?;

    let width = persisted.window.width;
    let height = persisted.window.height;

    tracing::info!("starting canvass for workspace {}", persisted.workspace_id);

    Application::new()
        .window(
            move |_| {
                app_view(
                    persisted.clone(),
                    store.clone(),
                    storage.clone(),
                    library.clone(),
                )
            },
            Some(WindowConfig::default().size((width, height)).title("Canvass")),
        )
        .run();

    Ok(())
}

fn app_view(
    persisted: PersistedConfig,
    store: Arc<DiskStore>,
    storage: Arc<DiskStorage>,
    library: Arc<ProjectLibrary>,
) -> impl IntoView {
    let theme = init_theme(persisted.theme);
    let config = ConfigState::new(&persisted);

    let app = AppState::new(persisted.active_screen);
    let workspace_id = config.workspace_id;

    let assistant: Arc<dyn Assistant> = Arc::new(OfflineAssistant);
    let chat = ChatState::new(assistant);
    let files = FilesState::new(storage.clone(), workspace_id);
    let profile = ProfileState::new(store.clone(), storage, workspace_id);
    let drafts = DraftsState::new(store.clone(), workspace_id);
    let guardrails = GuardrailsState::new(store, workspace_id);
    let projects = ProjectsState::new(library);

    // Kick off the initial loads; results marshal back on the UI thread.
    screens::files::load_files(files.clone());
    screens::profile::load_profile(profile.clone());
    screens::drafts::load_drafts(drafts.clone());
    screens::guardrails::load_guardrails(guardrails.clone());
    screens::projects::load_projects(projects.clone());

    let active = app.active_screen;

    let body_app = app.clone();
    let body_chat = chat.clone();
    let body_files = files.clone();
    let body_profile = profile.clone();
    let body_drafts = drafts.clone();
    let body_projects = projects.clone();
    let screen_body = dyn_container(
        move || active.get(),
        move |screen| match screen {
            ActiveScreen::Home => {
                screens::home::home_screen(body_chat.clone(), body_app.clone()).into_any()
            }
            ActiveScreen::Chats => screens::chat::chat_screen(body_chat.clone()).into_any(),
            ActiveScreen::Files => {
                screens::files::files_screen(body_files.clone(), body_app.clone()).into_any()
            }
            ActiveScreen::CandidateProfile => {
                screens::profile::profile_screen(body_profile.clone(), body_app.clone()).into_any()
            }
            ActiveScreen::Drafts => {
                screens::drafts::drafts_screen(body_drafts.clone(), body_app.clone()).into_any()
            }
            ActiveScreen::Guardrails => {
                screens::guardrails::guardrails_screen(guardrails.clone()).into_any()
            }
            ActiveScreen::Projects => {
                screens::projects::projects_screen(body_projects.clone(), body_app.clone())
                    .into_any()
            }
        },
    )
    .style(|s| {
        s.width_full()
            .flex_grow(1.0)
            .flex_basis(0.0)
            .min_height(0.0)
    });

    let dispatch_profile = profile.clone();
    let close_profile = profile;
    let close_config = config.clone();

    h_stack((
        app_sidebar(app.clone(), config),
        v_stack((app_header(), screen_body)).style(|s| {
            s.height_full()
                .flex_grow(1.0)
                .flex_basis(0.0)
                .min_width(0.0)
                .background(colors().bg_base)
        }),
        confirm_dialog(app.delete_gate, move |target| {
            screens::dispatch_delete(&dispatch_profile, &files, &drafts, &projects, target);
        }),
    ))
    .style(|s| s.size_full().background(colors().bg_base))
    .window_title(|| "Canvass".to_string())
    .on_event(EventListener::WindowClosed, move |_| {
        use floem::event::EventPropagation;

        let dirty = close_profile.session.with_untracked(|s| s.is_dirty());
        let should_quit = if dirty {
            let response = rfd::MessageDialog::new()
                .set_title("Unsaved Changes")
                .set_description(
                    "The candidate profile has unsaved changes. Are you sure you want to quit?",
                )
                .set_buttons(rfd::MessageButtons::YesNo)
                .show();
            response == rfd::MessageDialogResult::Yes
        } else {
            true
        };

        if should_quit {
            let mut persisted = PersistedConfig::load();
            persisted.theme = theme.get_untracked();
            persisted.workspace_id = close_config.workspace_id.get_untracked();
            persisted.active_screen = active.get_untracked();
            persisted.last_upload_dir = close_config.last_upload_dir.get_untracked();
            persisted.last_export_dir = close_config.last_export_dir.get_untracked();
            persisted.save();
            // Background threads keep the process alive otherwise
            std::process::exit(0);
        }

        EventPropagation::Stop
    })
}

// ==================== Shell chrome ====================

fn nav_button(active: RwSignal<ActiveScreen>, screen: ActiveScreen) -> impl IntoView {
    label(move || screen.label())
        .style(move |s| {
            let c = colors();
            let s = s
                .width_full()
                .padding_horiz(12.0)
                .padding_vert(8.0)
                .border_radius(8.0)
                .font_size(13.0)
                .cursor(CursorStyle::Pointer);
            if active.get() == screen {
                s.background(c.bg_selected)
                    .color(c.text_primary)
                    .font_weight(Weight::MEDIUM)
            } else {
                s.color(c.text_secondary)
                    .hover(move |s| s.background(c.bg_hover).color(c.text_primary))
            }
        })
        .on_click_stop(move |_| active.set(screen))
}

/// Segmented Light / Dark / System control at the sidebar bottom.
fn theme_control(config: ConfigState) -> impl IntoView {
    let theme = shared::theme_signal().unwrap_or_else(|| init_theme(Theme::default()));

    h_stack_from_iter([Theme::Light, Theme::Dark, Theme::System].into_iter().map(
        move |option| {
            let config = config.clone();
            label(move || option.label())
                .style(move |s| {
                    let c = colors();
                    let s = s
                        .flex_grow(1.0)
                        .flex_basis(0.0)
                        .justify_center()
                        .padding_vert(4.0)
                        .font_size(11.0)
                        .border_radius(6.0)
                        .cursor(CursorStyle::Pointer);
                    if theme.get() == option {
                        s.background(c.bg_selected)
                            .color(c.text_primary)
                            .font_weight(Weight::MEDIUM)
                    } else {
                        s.color(c.text_muted).hover(move |s| s.color(c.text_primary))
                    }
                })
                .on_click_stop(move |_| {
                    theme.set(option);
                    config.set_theme(option);
                })
        },
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .padding(3.0)
            .gap(2.0)
            .border_radius(8.0)
            .background(c.bg_surface)
            .border(1.0)
            .border_color(c.border)
    })
}

fn app_sidebar(app: AppState, config: ConfigState) -> impl IntoView {
    let active = app.active_screen;

    v_stack((
        label(|| "🗳️ Canvass").style(|s| {
            s.padding_horiz(20.0)
                .padding_vert(22.0)
                .font_size(16.0)
                .font_weight(Weight::BOLD)
                .color(colors().text_primary)
        }),
        v_stack_from_iter(
            ActiveScreen::sidebar()
                .into_iter()
                .map(move |screen| nav_button(active, screen)),
        )
        .style(|s| s.width_full().padding_horiz(12.0).gap(2.0)),
        empty().style(|s| s.flex_grow(1.0)),
        container(theme_control(config)).style(|s| s.width_full().padding(12.0)),
    ))
    .style(|s| {
        let c = colors();
        s.width(240.0)
            .height_full()
            .background(c.bg_surface)
            .border_right(1.0)
            .border_color(c.border)
    })
}

fn app_header() -> impl IntoView {
    h_stack((
        label(|| "💼 Demo Candidate for Congress")
            .style(|s| s.font_size(13.0).color(colors().text_secondary)),
        empty().style(|s| s.flex_grow(1.0)),
        label(|| "⋯").style(|s| {
            let c = colors();
            s.font_size(16.0)
                .color(c.text_muted)
                .hover(move |s| s.color(c.text_secondary))
        }),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .height(64.0)
            .items_center()
            .padding_horiz(24.0)
            .border_bottom(1.0)
            .border_color(c.border)
            .background(c.bg_base)
    })
}

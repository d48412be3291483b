//! Candidate profile screen
//!
//! Four-tab editor over the per-workspace candidate record: bio and core
//! values, platform issues, opponents, and the brand kit. Edits accumulate
//! in the working tier of the editing session; the Save button in each tab
//! header is the only path that writes back to the store.

mod bio;
mod brand_kit;
mod issues;
mod opponents;
mod picker_modal;

use std::path::PathBuf;
use std::thread;

use floem::ext_event::create_ext_action;
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use hustings::prelude::*;

use crate::gui::shared::{colors, inner_nav_button, inner_sidebar_style};
use crate::gui::state::{AppState, BRAND_ASSETS_BUCKET, ProfileState, ProfileTab};
use crate::gui::utils::ext_action_scope;

/// Result type for background profile operations
enum ProfileResult {
    LoadDone {
        profile: Option<CandidateProfile>,
        error: Option<String>,
    },
    SaveDone {
        stored: Option<CandidateProfile>,
        error: Option<String>,
    },
    LogoUploadDone {
        stored: Vec<StoredFile>,
        error: Option<String>,
    },
    PhotoUploadDone {
        stored: Vec<StoredFile>,
        error: Option<String>,
    },
    ExportDone {
        dest: String,
        error: Option<String>,
    },
}

fn create_result_sender(state: ProfileState) -> impl FnOnce(ProfileResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_profile_result(state, result);
    })
}

/// Handle results from background profile operations. Owns every flag
/// reset and the only merges into the editing session.
fn handle_profile_result(state: ProfileState, result: ProfileResult) {
    match result {
        ProfileResult::LoadDone { profile, error } => {
            if let Some(err) = error {
                tracing::error!("profile load failed: {err}");
                state.status_message.set(format!("Load failed: {err}"));
            } else {
                let workspace_id = state.workspace_id.get_untracked();
                let session = ProfileSession::begin(&workspace_id, profile);
                state.sync_inputs(session.working());
                state.session.set(session);
            }
            state.loading.set(false);
        }
        ProfileResult::SaveDone { stored, error } => {
            if let Some(err) = error {
                tracing::error!("profile save failed: {err}");
                state.status_message.set(format!("Save failed: {err}"));
            } else if let Some(record) = stored {
                state.sync_inputs(&record);
                state.session.update(|session| session.mark_saved(record));
                state.status_message.set("Profile saved".to_string());
            }
            state.saving.set(false);
        }
        ProfileResult::LogoUploadDone { stored, error } => {
            if let Some(err) = error {
                tracing::error!("logo upload failed: {err}");
                rfd::MessageDialog::new()
                    .set_title("Upload Failed")
                    .set_description("Failed to upload logo. Please check server permissions.")
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            } else {
                let assets = as_uploads(stored);
                state
                    .session
                    .update(|session| session.working_mut().brand_kit.add_logos(assets));
            }
            state.uploading.set(false);
        }
        ProfileResult::PhotoUploadDone { stored, error } => {
            if let Some(err) = error {
                tracing::error!("photo upload failed: {err}");
                rfd::MessageDialog::new()
                    .set_title("Upload Failed")
                    .set_description("Failed to upload photo. Please check server permissions.")
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            } else {
                let assets = as_uploads(stored);
                state
                    .session
                    .update(|session| session.working_mut().brand_kit.add_photos(assets));
            }
            state.uploading.set(false);
        }
        ProfileResult::ExportDone { dest, error } => {
            if let Some(err) = error {
                tracing::error!("asset export failed: {err}");
                state.status_message.set(format!("Export failed: {err}"));
            } else {
                state.status_message.set(format!("Saved to {dest}"));
            }
        }
    }
}

fn as_uploads(stored: Vec<StoredFile>) -> Vec<BrandAsset> {
    stored
        .into_iter()
        .map(|file| BrandAsset::upload(file.id, file.url, file.name))
        .collect()
}

/// Load the workspace's candidate record on a background thread.
pub fn load_profile(state: ProfileState) {
    state.loading.set(true);
    let store = state.store.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.get_profile(&workspace_id) {
            Ok(profile) => ProfileResult::LoadDone {
                profile,
                error: None,
            },
            Err(e) => ProfileResult::LoadDone {
                profile: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Write the whole working profile back to the store.
fn save_profile(state: ProfileState) {
    if state.saving.get_untracked() {
        return;
    }
    state.saving.set(true);
    state.status_message.set(String::new());

    let store = state.store.clone();
    let snapshot = state
        .session
        .with_untracked(|session| session.save_snapshot());
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match store.upsert_profile(&snapshot) {
            Ok(stored) => ProfileResult::SaveDone {
                stored: Some(stored),
                error: None,
            },
            Err(e) => ProfileResult::SaveDone {
                stored: None,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Pick image files and push them through the batch coordinator into the
/// brand asset bucket. `wrap` picks the section the handler merges into.
fn upload_assets(
    state: ProfileState,
    title: &str,
    wrap: fn(Vec<StoredFile>, Option<String>) -> ProfileResult,
) {
    if state.uploading.get_untracked() {
        return;
    }
    let Some(paths) = rfd::FileDialog::new().set_title(title).pick_files() else {
        return;
    };
    if paths.is_empty() {
        return;
    }

    state.uploading.set(true);
    let storage = state.storage.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match read_and_upload(&storage, &workspace_id, &paths) {
            Ok(stored) => wrap(stored, None),
            Err(e) => wrap(Vec::new(), Some(e)),
        };
        send(result);
    });
}

/// A read failure aborts before anything uploads.
fn read_and_upload(
    storage: &DiskStorage,
    workspace_id: &str,
    paths: &[PathBuf],
) -> std::result::Result<Vec<StoredFile>, String> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(UploadFile::from_path(path).map_err(|e| e.to_string())?);
    }
    upload_batch(storage, BRAND_ASSETS_BUCKET, workspace_id, &files).map_err(|e| e.to_string())
}

fn upload_logos(state: ProfileState) {
    upload_assets(state, "Select Logos to Upload", |stored, error| {
        ProfileResult::LogoUploadDone { stored, error }
    });
}

fn upload_photos(state: ProfileState) {
    upload_assets(state, "Select Photos to Upload", |stored, error| {
        ProfileResult::PhotoUploadDone { stored, error }
    });
}

/// Save an uploaded brand asset back out through the system dialog. The
/// asset id doubles as its bucket-relative storage path.
fn export_asset(state: ProfileState, name: &str, path: String) {
    let Some(dest) = rfd::FileDialog::new()
        .set_title("Save File As")
        .set_file_name(name)
        .save_file()
    else {
        return;
    };

    let storage = state.storage.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let dest_display = dest.display().to_string();
        let result = match storage
            .read_file(BRAND_ASSETS_BUCKET, &path)
            .and_then(|bytes| std::fs::write(&dest, bytes).map_err(hustings::Error::from))
        {
            Ok(()) => ProfileResult::ExportDone {
                dest: dest_display,
                error: None,
            },
            Err(e) => ProfileResult::ExportDone {
                dest: dest_display,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Mirror the bio inputs into the working profile so the dirty check
/// sees text edits, not just list mutations.
fn bind_bio_inputs(state: &ProfileState) {
    let session = state.session;

    let full_name = state.full_name;
    floem::reactive::create_effect(move |_| {
        let value = full_name.get();
        let stale = session.with_untracked(|s| s.working().full_name != value);
        if stale {
            session.update(|s| s.working_mut().full_name = value.clone());
        }
    });

    let bio = state.bio;
    floem::reactive::create_effect(move |_| {
        let value = bio.get();
        let stale = session.with_untracked(|s| s.working().bio != value);
        if stale {
            session.update(|s| s.working_mut().bio = value.clone());
        }
    });
}

/// Save button shared by every tab header.
fn save_button(state: ProfileState) -> impl IntoView {
    let saving = state.saving;
    button(label(move || {
        if saving.get() {
            "Saving...".to_string()
        } else {
            "Save Changes".to_string()
        }
    }))
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
    .disabled(move || saving.get())
    .action(move || save_profile(state.clone()))
}

/// Tab heading pair, left of the header actions.
fn tab_header(title: &'static str, subtitle: &'static str) -> impl IntoView {
    v_stack((
        label(move || title).style(|s| {
            s.font_size(24.0)
                .font_weight(Weight::MEDIUM)
                .color(colors().text_primary)
        }),
        label(move || subtitle)
            .style(|s| s.font_size(13.0).margin_top(4.0).color(colors().text_secondary)),
    ))
}

fn profile_sidebar(state: ProfileState) -> impl IntoView {
    let active_tab = state.active_tab;

    v_stack((
        v_stack((
            label(|| "Profile").style(|s| {
                s.font_size(20.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            label(|| "Manage candidate details").style(|s| {
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
        v_stack_from_iter(ProfileTab::all().map(|tab| {
            inner_nav_button(
                tab.label(),
                move || active_tab.get() == tab,
                move || active_tab.set(tab),
            )
        }))
        .style(|s| s.width_full().padding(16.0).gap(4.0)),
    ))
    .style(inner_sidebar_style)
}

/// The candidate profile screen.
pub fn profile_screen(state: ProfileState, app: AppState) -> impl IntoView {
    bind_bio_inputs(&state);

    let loading = state.loading;
    let active_tab = state.active_tab;
    let status = state.status_message;

    h_stack((
        profile_sidebar(state.clone()),
        scroll(
            container(
                v_stack((
                    dyn_container(
                        move || (loading.get(), active_tab.get()),
                        {
                            let state = state.clone();
                            let app = app.clone();
                            move |(is_loading, tab)| {
                                if is_loading {
                                    label(|| "Loading candidate details...")
                                        .style(|s| s.font_size(13.0).color(colors().text_secondary))
                                        .into_any()
                                } else {
                                    match tab {
                                        ProfileTab::Bio => bio::bio_tab(state.clone()).into_any(),
                                        ProfileTab::Issues => {
                                            issues::issues_tab(state.clone(), app.clone())
                                                .into_any()
                                        }
                                        ProfileTab::Opponents => {
                                            opponents::opponents_tab(state.clone(), app.clone())
                                                .into_any()
                                        }
                                        ProfileTab::BrandKit => {
                                            brand_kit::brand_kit_tab(state.clone(), app.clone())
                                                .into_any()
                                        }
                                    }
                                }
                            }
                        },
                    )
                    .style(|s| s.width_full()),
                    label(move || status.get()).style(|s| {
                        s.font_size(12.0)
                            .margin_top(16.0)
                            .color(colors().text_secondary)
                    }),
                ))
                .style(|s| s.width_full().max_width(896.0).padding(32.0)),
            )
            .style(|s| s.width_full().justify_center()),
        )
        .style(|s| {
            s.flex_grow(1.0)
                .flex_basis(0.0)
                .min_width(0.0)
                .height_full()
                .background(colors().bg_base)
        }),
        issues::add_issue_modal(state.clone()),
        opponents::add_opponent_modal(state.clone()),
        picker_modal::color_picker_modal(state),
    ))
    .style(|s| s.size_full())
}

//! Files screen
//!
//! Campaign document manager over the storage collaborator: list, batch
//! upload, export, and delete (through the confirm gate).

use std::path::PathBuf;
use std::thread;

use floem::ext_event::create_ext_action;
use floem::prelude::*;
use floem::style::CursorStyle;
use floem::text::Weight;
use hustings::prelude::*;

use crate::gui::shared::{colors, primary_button, screen_header};
use crate::gui::state::{AppState, DOCUMENTS_BUCKET, DeleteTarget, FilesState};
use crate::gui::utils::{ext_action_scope, human_size};

/// Result type for background storage operations
enum FilesResult {
    ListDone {
        files: Vec<StoredFile>,
        error: Option<String>,
    },
    UploadDone {
        stored: Vec<StoredFile>,
        error: Option<String>,
    },
    DeleteDone {
        path: String,
        error: Option<String>,
    },
    ExportDone {
        dest: String,
        error: Option<String>,
    },
}

fn create_result_sender(state: FilesState) -> impl FnOnce(FilesResult) {
    create_ext_action(ext_action_scope(), move |result| {
        handle_files_result(state, result);
    })
}

/// Handle results from background storage operations. Owns every flag
/// reset and the only merges into the file list.
fn handle_files_result(state: FilesState, result: FilesResult) {
    match result {
        FilesResult::ListDone { files, error } => {
            if let Some(err) = error {
                tracing::error!("file listing failed: {err}");
                state.status_message.set(format!("Listing failed: {err}"));
            } else {
                state.files.set(files.into_iter().collect());
            }
            state.loading.set(false);
        }
        FilesResult::UploadDone { stored, error } => {
            if let Some(err) = error {
                tracing::error!("upload failed: {err}");
                rfd::MessageDialog::new()
                    .set_title("Upload Failed")
                    .set_description("Failed to upload files. Please check server permissions.")
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
                state.status_message.set(format!("Upload failed: {err}"));
            } else {
                let count = stored.len();
                // Newest first, matching the listing order
                state.files.update(|files| {
                    for file in stored.into_iter().rev() {
                        files.push_front(file);
                    }
                });
                state.status_message.set(format!(
                    "Uploaded {count} file{}",
                    if count == 1 { "" } else { "s" }
                ));
            }
            state.uploading.set(false);
        }
        FilesResult::DeleteDone { path, error } => {
            if let Some(err) = error {
                tracing::error!("delete failed for {path}: {err}");
                state.status_message.set(format!("Delete failed: {err}"));
            } else {
                state.files.update(|files| files.retain(|f| f.path != path));
            }
        }
        FilesResult::ExportDone { dest, error } => {
            if let Some(err) = error {
                tracing::error!("export failed: {err}");
                state.status_message.set(format!("Export failed: {err}"));
            } else {
                state.status_message.set(format!("Saved to {dest}"));
            }
        }
    }
}

/// List the workspace's documents on a background thread.
pub fn load_files(state: FilesState) {
    state.loading.set(true);
    let storage = state.storage.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match storage.list_files(DOCUMENTS_BUCKET, &workspace_id) {
            Ok(files) => FilesResult::ListDone { files, error: None },
            Err(e) => FilesResult::ListDone {
                files: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Pick documents with the system dialog and upload them as one batch.
fn upload_documents(state: FilesState) {
    if state.uploading.get_untracked() {
        return;
    }
    let Some(paths) = rfd::FileDialog::new()
        .set_title("Select Documents to Upload")
        .pick_files()
    else {
        return;
    };
    if paths.is_empty() {
        return;
    }

    state.uploading.set(true);
    state.status_message.set(format!(
        "Uploading {} file{}...",
        paths.len(),
        if paths.len() == 1 { "" } else { "s" }
    ));

    let storage = state.storage.clone();
    let workspace_id = state.workspace_id.get_untracked();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = read_and_upload(&*storage, &workspace_id, &paths);
        send(result);
    });
}

/// Read the picked files and push them through the batch coordinator.
/// A read failure aborts before anything uploads.
fn read_and_upload(storage: &DiskStorage, workspace_id: &str, paths: &[PathBuf]) -> FilesResult {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match UploadFile::from_path(path) {
            Ok(file) => files.push(file),
            Err(e) => {
                return FilesResult::UploadDone {
                    stored: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        }
    }
    match upload_batch(storage, DOCUMENTS_BUCKET, workspace_id, &files) {
        Ok(stored) => FilesResult::UploadDone {
            stored,
            error: None,
        },
        Err(e) => FilesResult::UploadDone {
            stored: Vec::new(),
            error: Some(e.to_string()),
        },
    }
}

/// Remove a stored document. Called by the confirm dispatcher only.
pub fn delete_document(state: FilesState, path: String) {
    let storage = state.storage.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match storage.delete_file(DOCUMENTS_BUCKET, &path) {
            Ok(()) => FilesResult::DeleteDone { path, error: None },
            Err(e) => FilesResult::DeleteDone {
                path,
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

/// Save a stored document back out through the system dialog.
fn export_document(state: FilesState, file: &StoredFile) {
    let Some(dest) = rfd::FileDialog::new()
        .set_title("Save File As")
        .set_file_name(&file.name)
        .save_file()
    else {
        return;
    };

    let storage = state.storage.clone();
    let path = file.path.clone();
    let send = create_result_sender(state);

    thread::spawn(move || {
        let result = match storage
            .read_file(DOCUMENTS_BUCKET, &path)
            .and_then(|bytes| std::fs::write(&dest, bytes).map_err(hustings::Error::from))
        {
            Ok(()) => FilesResult::ExportDone {
                dest: dest.display().to_string(),
                error: None,
            },
            Err(e) => FilesResult::ExportDone {
                dest: dest.display().to_string(),
                error: Some(e.to_string()),
            },
        };
        send(result);
    });
}

fn upload_area(state: FilesState) -> impl IntoView {
    h_stack((
        v_stack((
            label(|| "Upload Documents").style(|s| {
                s.font_size(13.0)
                    .font_weight(Weight::MEDIUM)
                    .color(colors().text_primary)
            }),
            label(|| "Support for PDF, Images, and Office files.").style(|s| {
                s.font_size(13.0)
                    .margin_top(2.0)
                    .color(colors().text_secondary)
            }),
        )),
        empty().style(|s| s.flex_grow(1.0)),
        primary_button("Select Files").on_click_stop(move |_| {
            upload_documents(state.clone());
        }),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .items_center()
            .padding(24.0)
            .background(c.bg_surface)
            .border(1.0)
            .border_color(c.border)
            .border_radius(12.0)
    })
}

fn header_cell(text: &'static str, width_pct: f64) -> impl IntoView {
    label(move || text).style(move |s| {
        s.width_pct(width_pct)
            .font_size(10.0)
            .font_weight(Weight::SEMIBOLD)
            .color(colors().text_muted)
    })
}

fn file_row(state: FilesState, app: AppState, file: StoredFile) -> impl IntoView {
    let name = file.name.clone();
    let badge = file
        .extension()
        .map(|e| e.to_uppercase())
        .unwrap_or_else(|| "-".to_string());
    let size = human_size(file.size);

    let file_for_export = file.clone();
    let state_for_export = state.clone();
    let delete_label = file.name.clone();
    let delete_path = file.path.clone();

    h_stack((
        label(move || name.clone()).style(|s| {
            s.width_pct(50.0)
                .font_size(13.0)
                .font_weight(Weight::MEDIUM)
                .text_ellipsis()
                .color(colors().text_primary)
        }),
        container(label(move || badge.clone()).style(|s| {
            let c = colors();
            s.padding_horiz(8.0)
                .padding_vert(2.0)
                .font_size(10.0)
                .font_weight(Weight::MEDIUM)
                .border_radius(4.0)
                .background(c.bg_elevated)
                .color(c.text_secondary)
        }))
        .style(|s| s.width_pct(16.0)),
        label(move || size.clone())
            .style(|s| s.width_pct(16.0).font_size(13.0).color(colors().text_secondary)),
        h_stack((
            label(|| "Export")
                .style(|s| {
                    s.font_size(12.0)
                        .color(colors().text_secondary)
                        .cursor(CursorStyle::Pointer)
                        .hover(|s| s.color(colors().text_primary))
                })
                .on_click_stop(move |_| {
                    export_document(state_for_export.clone(), &file_for_export);
                }),
            label(|| "Delete")
                .style(|s| {
                    s.font_size(12.0)
                        .margin_left(12.0)
                        .color(colors().error)
                        .cursor(CursorStyle::Pointer)
                })
                .on_click_stop(move |_| {
                    app.request_delete(
                        delete_label.clone(),
                        DeleteTarget::Document {
                            path: delete_path.clone(),
                        },
                    );
                }),
        ))
        .style(|s| s.width_pct(18.0).justify_end()),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .items_center()
            .padding_horiz(24.0)
            .padding_vert(14.0)
            .border_bottom(1.0)
            .border_color(c.border)
            .hover(move |s| s.background(c.bg_surface))
    })
}

fn file_table(state: FilesState, app: AppState) -> impl IntoView {
    let files = state.files;
    let state_for_rows = state.clone();

    v_stack((
        label(move || format!("Uploaded Files ({})", files.get().len())).style(|s| {
            s.font_size(13.0)
                .font_weight(Weight::SEMIBOLD)
                .margin_bottom(12.0)
                .color(colors().text_primary)
        }),
        dyn_container(
            move || files.get().is_empty(),
            move |empty_list| {
                if empty_list {
                    v_stack((
                        label(|| "No files uploaded yet").style(|s| {
                            s.font_size(13.0)
                                .font_weight(Weight::MEDIUM)
                                .color(colors().text_primary)
                        }),
                        label(|| "Upload files to see them here").style(|s| {
                            s.font_size(12.0)
                                .margin_top(4.0)
                                .color(colors().text_secondary)
                        }),
                    ))
                    .style(|s| {
                        let c = colors();
                        s.width_full()
                            .items_center()
                            .padding_vert(48.0)
                            .border(1.0)
                            .border_color(c.border)
                            .border_radius(12.0)
                    })
                    .into_any()
                } else {
                    let state = state_for_rows.clone();
                    let app = app.clone();
                    v_stack((
                        h_stack((
                            header_cell("NAME", 50.0),
                            header_cell("TYPE", 16.0),
                            header_cell("SIZE", 16.0),
                            container(label(|| "ACTIONS").style(|s| {
                                s.font_size(10.0)
                                    .font_weight(Weight::SEMIBOLD)
                                    .color(colors().text_muted)
                            }))
                            .style(|s| s.width_pct(18.0).justify_end()),
                        ))
                        .style(|s| {
                            let c = colors();
                            s.width_full()
                                .padding_horiz(24.0)
                                .padding_vert(10.0)
                                .background(c.bg_surface)
                                .border_bottom(1.0)
                                .border_color(c.border)
                        }),
                        dyn_stack(
                            move || files.get(),
                            |file| file.path.clone(),
                            move |file| file_row(state.clone(), app.clone(), file),
                        )
                        .style(|s| s.width_full().flex_col()),
                    ))
                    .style(|s| {
                        let c = colors();
                        s.width_full()
                            .flex_col()
                            .border(1.0)
                            .border_color(c.border)
                            .border_radius(12.0)
                            .background(c.bg_base)
                    })
                    .into_any()
                }
            },
        )
        .style(|s| s.width_full()),
    ))
    .style(|s| s.width_full().margin_top(24.0))
}

/// The files screen.
pub fn files_screen(state: FilesState, app: AppState) -> impl IntoView {
    let state_for_upload = state.clone();
    let state_for_table = state.clone();

    scroll(
        container(
            v_stack((
                screen_header("Files", "Manage your campaign documents and assets."),
                container(upload_area(state_for_upload)).style(|s| s.width_full().margin_top(24.0)),
                file_table(state_for_table, app),
                label(move || state.status_message.get())
                    .style(|s| s.font_size(12.0).margin_top(12.0).color(colors().text_secondary)),
            ))
            .style(|s| s.width_full().max_width(960.0).padding(32.0)),
        )
        .style(|s| s.width_full().justify_center()),
    )
    .style(|s| {
        s.flex_grow(1.0)
            .flex_basis(0.0)
            .min_height(0.0)
            .width_full()
            .background(colors().bg_base)
    })
}

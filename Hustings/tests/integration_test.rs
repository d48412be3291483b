use hustings::prelude::*;
use tempfile::tempdir;

#[test]
fn test_palette_edit_round_trip_on_disk() {
    let dir = tempdir().unwrap();
    let store = DiskStore::open(dir.path()).unwrap();

    // Never-saved workspace: the session starts from the defaults.
    let loaded = store.get_profile("ws-1").unwrap();
    assert!(loaded.is_none());
    let mut session = ProfileSession::begin("ws-1", loaded);
    assert_eq!(session.working().brand_kit.colors().len(), 4);

    // Create a color, drag it to its final value, close the editor.
    let edit = session.open_new_color();
    session.update_open_color(&ColorItem {
        hex: "#123ABC".to_string(),
        ..edit.draft
    });
    session.close_color_editor();

    let stored = store.upsert_profile(&session.save_snapshot()).unwrap();
    session.mark_saved(stored);
    assert!(!session.is_dirty());

    // Reopen from disk: the whole aggregate came back, defaults included.
    let reread = store.get_profile("ws-1").unwrap().unwrap();
    let colors = reread.brand_kit.colors();
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[4].hex, "#123ABC");
    assert_eq!(colors[4].name, "New Color");
    assert_eq!(colors[0].name, "Navy Blue");
}

#[test]
fn test_upload_merge_needs_a_second_save() {
    let dir = tempdir().unwrap();
    let store = DiskStore::open(dir.path().join("records")).unwrap();
    let storage = DiskStorage::open(dir.path().join("objects")).unwrap();

    let mut session = ProfileSession::begin("ws-1", None);
    session.working_mut().full_name = "Jordan Reyes".to_string();

    // Save goes out while the upload batch is still running.
    let snapshot = session.save_snapshot();

    let files = vec![
        UploadFile::new("logo-light.png", vec![1, 2, 3]),
        UploadFile::new("logo-dark.png", vec![4, 5, 6]),
    ];
    let uploaded = upload_batch(&storage, "brand-assets", "ws-1", &files).unwrap();
    assert_eq!(uploaded.len(), 2);
    assert_eq!(uploaded[0].name, "logo-light.png");

    let assets: Vec<BrandAsset> = uploaded
        .iter()
        .map(|f| BrandAsset::upload(f.id.clone(), f.url.clone(), f.name.clone()))
        .collect();
    session.working_mut().brand_kit.add_logos(assets);

    // The in-flight save carries the pre-upload snapshot.
    let stored = store.upsert_profile(&snapshot).unwrap();
    session.mark_saved(stored);
    assert!(session.is_dirty());
    let on_disk = store.get_profile("ws-1").unwrap().unwrap();
    assert_eq!(on_disk.brand_kit.logos().len(), 2); // still the defaults

    // Second save lands the merged logos.
    let stored = store.upsert_profile(&session.save_snapshot()).unwrap();
    session.mark_saved(stored);
    assert!(!session.is_dirty());
    let on_disk = store.get_profile("ws-1").unwrap().unwrap();
    assert_eq!(on_disk.brand_kit.logos().len(), 4);
}

#[test]
fn test_uploaded_bytes_read_back() {
    let dir = tempdir().unwrap();
    let storage = DiskStorage::open(dir.path()).unwrap();

    let file = UploadFile::new("platform survey.pdf", b"%PDF-1.4".to_vec());
    let stored = storage.upload_file("documents", "ws-1", &file).unwrap();
    assert!(stored.path.starts_with("ws-1/"));
    assert!(stored.path.ends_with(".pdf"));

    let listed = storage.list_files("documents", "ws-1").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "platform survey.pdf");
    assert_eq!(listed[0].size, 8);

    let bytes = storage.read_file("documents", &stored.path).unwrap();
    assert_eq!(bytes, b"%PDF-1.4");

    storage.delete_file("documents", &stored.path).unwrap();
    assert!(storage.list_files("documents", "ws-1").unwrap().is_empty());
}

#[test]
fn test_draft_lifecycle_on_disk() {
    let dir = tempdir().unwrap();
    let store = DiskStore::open(dir.path()).unwrap();

    let mut stump = Draft::new("ws-1", DraftKind::Speech, "Stump speech", "Friends,");
    stump.created_at = "2026-08-01T09:00:00+00:00".to_string();
    let mut rally = Draft::new("ws-1", DraftKind::Speech, "Rally open", "Good evening");
    rally.created_at = "2026-08-02T09:00:00+00:00".to_string();
    let ask = Draft::new("ws-1", DraftKind::Email, "Donor ask", "Dear supporter,");

    store.create_draft(&stump).unwrap();
    store.create_draft(&rally).unwrap();
    store.create_draft(&ask).unwrap();

    // One kind per tab, newest first.
    let speeches = store.list_drafts("ws-1", DraftKind::Speech).unwrap();
    assert_eq!(speeches.len(), 2);
    assert_eq!(speeches[0].title, "Rally open");
    assert_eq!(speeches[1].title, "Stump speech");

    let mut edited = speeches[1].clone();
    edited.body = "Friends, neighbors,".to_string();
    store.update_draft(&edited).unwrap();
    let speeches = store.list_drafts("ws-1", DraftKind::Speech).unwrap();
    assert_eq!(speeches[1].body, "Friends, neighbors,");

    store.delete_draft("ws-1", &rally.id).unwrap();
    store.delete_draft("ws-1", "no-such-id").unwrap();
    let speeches = store.list_drafts("ws-1", DraftKind::Speech).unwrap();
    assert_eq!(speeches.len(), 1);
    let emails = store.list_drafts("ws-1", DraftKind::Email).unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].title, "Donor ask");
}

#[test]
fn test_guardrails_round_trip() {
    let dir = tempdir().unwrap();
    let store = DiskStore::open(dir.path()).unwrap();

    let mut guardrails = Guardrails::empty("ws-1");
    guardrails.voice = "Plain-spoken, optimistic".to_string();
    guardrails.banned_phrases = "career politician".to_string();
    store.upsert_guardrails(&guardrails).unwrap();

    let reread = store.get_guardrails("ws-1").unwrap().unwrap();
    assert_eq!(reread, guardrails);
}

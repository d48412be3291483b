use canvass::projects::{MemoryScope, ProjectLibrary};
use tempfile::tempdir;

#[test]
fn test_project_lifecycle_on_disk() {
    let dir = tempdir().unwrap();
    let library = ProjectLibrary::open(dir.path()).unwrap();

    library.ensure_defaults().unwrap();
    let seeded = library.list().unwrap();
    assert_eq!(
        seeded.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        ["Voter Outreach", "Fall Campaign"]
    );

    // Seeding only fires on an empty library.
    library.ensure_defaults().unwrap();
    assert_eq!(library.list().unwrap().len(), 2);

    let created = library
        .create("Debate Prep", MemoryScope::ProjectOnly)
        .unwrap();
    assert_eq!(created.memory, MemoryScope::ProjectOnly);

    let renamed = library.rename("Debate Prep", "Debate Night").unwrap();
    assert_eq!(renamed.name, "Debate Night");
    assert_eq!(renamed.memory, MemoryScope::ProjectOnly);

    library.delete("Debate Night").unwrap();
    // Deleting an unknown name is a no-op, not an error.
    library.delete("Debate Night").unwrap();

    let names: Vec<_> = library.list().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Voter Outreach", "Fall Campaign"]);
}

#[test]
fn test_duplicate_names_are_rejected() {
    let dir = tempdir().unwrap();
    let library = ProjectLibrary::open(dir.path()).unwrap();

    library.create("Field Ops", MemoryScope::Shared).unwrap();
    assert!(library.create("Field Ops", MemoryScope::Shared).is_err());

    // Distinct names that slug to the same file collide too.
    assert!(library.create("Field/Ops", MemoryScope::Shared).is_err());

    library.create("GOTV", MemoryScope::Shared).unwrap();
    assert!(library.rename("GOTV", "Field Ops").is_err());
}

#[test]
fn test_manifests_are_plain_toml_files() {
    let dir = tempdir().unwrap();
    let library = ProjectLibrary::open(dir.path()).unwrap();
    library
        .create("Canvass Kickoff", MemoryScope::Shared)
        .unwrap();

    let content = std::fs::read_to_string(dir.path().join("Canvass_Kickoff.toml")).unwrap();
    assert!(content.contains("name = \"Canvass Kickoff\""));
    assert!(content.contains("memory = \"default\""));

    // A corrupt manifest is skipped with a warning, never fatal.
    std::fs::write(dir.path().join("broken.toml"), "not = [valid").unwrap();
    let listed = library.list().unwrap();
    assert_eq!(listed.len(), 1);
}

//! Label store CRUD and uniqueness tests.

use super::*;

#[test]
fn load_absent_blob_yields_empty_collection() {
    let kv = MemoryStore::new();
    let labels = Labels::load(&kv, "user1").expect("load");
    assert!(labels.is_empty());
}

#[test]
fn add_assigns_fresh_ids_and_persists() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");

    let red = labels.add("red").expect("add red");
    let blue = labels.add("blue").expect("add blue");
    assert!(!red.id.is_empty());
    assert_ne!(red.id, blue.id);

    let reloaded = Labels::load(&kv, "user1").expect("reload");
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.name_of(&red.id), "red");
    assert_eq!(reloaded.id_of("blue").expect("id"), blue.id);
}

#[test]
fn duplicate_name_is_rejected_without_growing_the_collection() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    labels.add("red").expect("add");

    let err = labels.add("red").expect_err("duplicate must fail");
    assert!(matches!(err, AppError::DuplicateLabelName(ref name) if name == "red"));
    assert_eq!(labels.len(), 1);

    // Exact match only: case differs, so this is a new label.
    labels.add("Red").expect("case-sensitive add");
    assert_eq!(labels.len(), 2);
}

#[test]
fn rename_updates_the_name_and_keeps_the_id() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    let red = labels.add("red").expect("add");

    let renamed = labels.rename(&red.id, "crimson").expect("rename");
    assert_eq!(renamed.id, red.id);
    assert_eq!(renamed.name, "crimson");

    let reloaded = Labels::load(&kv, "user1").expect("reload");
    assert!(reloaded.find_by_name("red").is_none());
    assert_eq!(reloaded.id_of("crimson").expect("id"), red.id);
}

#[test]
fn rename_to_a_taken_name_is_rejected() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    let red = labels.add("red").expect("add red");
    labels.add("blue").expect("add blue");

    let err = labels
        .rename(&red.id, "blue")
        .expect_err("taken name must fail");
    assert!(matches!(err, AppError::DuplicateLabelName(ref name) if name == "blue"));
    assert_eq!(labels.name_of(&red.id), "red");
}

#[test]
fn rename_to_own_current_name_is_rejected() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    let red = labels.add("red").expect("add");

    let err = labels
        .rename(&red.id, "red")
        .expect_err("self-rename must fail");
    assert!(matches!(err, AppError::DuplicateLabelName(_)));
}

#[test]
fn rename_unknown_id_is_not_found() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");

    let err = labels
        .rename("missing", "anything")
        .expect_err("unknown id must fail");
    assert!(matches!(err, AppError::LabelNotFound(_)));
}

#[test]
fn name_resolution_is_best_effort_but_id_resolution_fails() {
    let kv = MemoryStore::new();
    let labels = Labels::load(&kv, "user1").expect("load");

    assert_eq!(labels.name_of("dangling"), "");
    let err = labels.id_of("missing").expect_err("must fail");
    assert!(matches!(err, AppError::LabelNameNotFound(ref name) if name == "missing"));
}

#[test]
fn delete_by_id_removes_the_label_and_persists() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    let red = labels.add("red").expect("add");

    let removed = labels.delete_by_id(&red.id).expect("delete");
    assert_eq!(removed.name, "red");

    let err = labels.delete_by_id(&red.id).expect_err("must fail");
    assert!(matches!(err, AppError::LabelNotFound(_)));

    assert!(kv.get(&labels_key("user1")).expect("blob").is_some());
    let reloaded = Labels::load(&kv, "user1").expect("reload");
    assert!(reloaded.is_empty());
}

#[test]
fn names_for_skips_dangling_label_ids() {
    let kv = MemoryStore::new();
    let mut labels = Labels::load(&kv, "user1").expect("load");
    let red = labels.add("red").expect("add");

    let bmark = Bookmark::new("P1").with_label_ids(vec![red.id, "dangling".to_string()]);
    assert_eq!(labels.names_for(&bmark), ["red"]);
}

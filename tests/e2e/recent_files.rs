// End-to-end tests for the recent-files list and its menu

use crate::common::harness::EditorTestHarness;
use slate::input::commands::Action;
use slate::model::event::DocumentId;

#[test]
fn test_loaded_list_keeps_stored_order() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    let b = harness.create_file("b.txt", "B");
    let c = harness.create_file("c.txt", "C");

    harness.seed_recent_files(&[c.clone(), b.clone(), a.clone()]);

    assert_eq!(
        harness.recent_items(),
        vec![
            c.display().to_string(),
            b.display().to_string(),
            a.display().to_string()
        ]
    );
    assert_eq!(
        harness.view().recent_labels(),
        vec![
            format!("&1 {}", c.display()),
            format!("&2 {}", b.display()),
            format!("&3 {}", a.display()),
        ]
    );
    let actions: Vec<_> = harness
        .view()
        .recent_menu
        .iter()
        .map(|item| item.action)
        .collect();
    assert_eq!(
        actions,
        vec![
            Some(Action::OpenRecent(0)),
            Some(Action::OpenRecent(1)),
            Some(Action::OpenRecent(2)),
        ]
    );
}

#[test]
fn test_open_recent_entry_promotes_it() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    let b = harness.create_file("b.txt", "B");
    harness.seed_recent_files(&[a.clone(), b.clone()]);

    let opened = harness.editor_mut().open_doc_by_recent_index(1).unwrap();
    harness.editor_mut().tick();

    assert!(opened.is_some());
    assert_eq!(harness.buffer_content(), "B");
    assert_eq!(
        harness.recent_items(),
        vec![b.display().to_string(), a.display().to_string()]
    );
    assert_eq!(harness.view().recent_labels()[0], format!("&1 {}", b.display()));
}

#[test]
fn test_stale_recent_entry_is_pruned_with_warning() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    let gone = harness.work_dir().join("gone.txt");
    harness.seed_recent_files(&[gone.clone(), a.clone()]);

    harness.editor_mut().execute(Action::OpenRecent(0));

    assert_eq!(harness.editor().tab_count(), 1);
    assert_eq!(harness.view().buffers.len(), 1);
    assert_eq!(harness.view().warnings.len(), 1);
    let (title, message) = &harness.view().warnings[0];
    assert_eq!(title, "Recent");
    assert!(message.contains(&gone.display().to_string()));
    assert!(harness.view().errors.is_empty());
    assert_eq!(harness.recent_items(), vec![a.display().to_string()]);
    assert_eq!(harness.view().recent_labels(), vec![format!("&1 {}", a.display())]);
}

#[test]
fn test_out_of_range_recent_index_is_noop() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    harness.seed_recent_files(&[a]);

    assert_eq!(harness.editor_mut().open_doc_by_recent_index(5).unwrap(), None);
    assert!(!harness.editor().is_enabled(Action::OpenRecent(5)));
    assert!(harness.editor().is_enabled(Action::OpenRecent(0)));
    assert_eq!(harness.editor().tab_count(), 1);
    assert!(harness.view().warnings.is_empty());
}

#[test]
fn test_recent_menu_capped_at_five() {
    let mut harness = EditorTestHarness::new().unwrap();
    let files: Vec<_> = (0..6)
        .map(|i| harness.create_file(&format!("f{i}.txt"), "x"))
        .collect();

    for file in &files {
        harness.open_file(file).unwrap();
    }

    let labels = harness.view().recent_labels();
    assert_eq!(labels.len(), 5);
    assert_eq!(labels[0], format!("&1 {}", files[5].display()));
    assert_eq!(labels[4], format!("&5 {}", files[1].display()));
    assert!(!harness.editor().recent().contains(&files[0]));
}

#[test]
fn test_recent_list_survives_restart() {
    let mut harness = EditorTestHarness::new().unwrap();
    std::fs::create_dir_all(harness.work_dir()).unwrap();
    let first = harness.work_dir().join("first.txt");
    let second = harness.work_dir().join("second.txt");

    for target in [&first, &second] {
        harness.new_doc();
        harness.type_text("content");
        harness.queue_save(target);
        harness.editor_mut().save_doc().unwrap();
    }
    let before = harness.recent_items();

    harness.restart();

    assert_eq!(harness.recent_items(), before);
    assert_eq!(
        before,
        vec![second.display().to_string(), first.display().to_string()]
    );
}

#[test]
fn test_opening_alone_does_not_persist_until_exit() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    harness.open_file(&a).unwrap();
    assert!(!harness.recent_path().exists());

    harness.editor_mut().execute(Action::Exit);

    assert!(harness.editor().should_quit());
    harness.restart();
    assert_eq!(harness.recent_items(), vec![a.display().to_string()]);
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let mut harness = EditorTestHarness::new().unwrap();
    std::fs::write(harness.recent_path(), "{ not json").unwrap();

    harness.restart();

    assert!(harness.recent_items().is_empty());
    assert_eq!(harness.view().recent_labels(), vec!["(empty)".to_string()]);
    // The session itself is unaffected
    let id: DocumentId = harness.new_doc();
    assert_eq!(harness.editor().active_document_id(), Some(id));
}

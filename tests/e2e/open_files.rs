// End-to-end tests for opening files: dialog, duplicates, failures

use crate::common::harness::EditorTestHarness;
use slate::input::commands::Action;
use slate::DocumentError;

#[test]
fn test_open_loads_content_clean() {
    let mut harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("a.txt", "Loaded");

    let id = harness.open_file(&file).unwrap();

    assert_eq!(harness.buffer_content(), "Loaded");
    harness.assert_tab_titles(&["(untitled)", "a.txt"]);
    harness.assert_status(&format!("Opened file: {}", file.display()));
    let doc = harness.editor().document(id).unwrap();
    assert!(!doc.is_modified());
    assert_eq!(doc.path(), Some(file.as_path()));
    assert_eq!(harness.recent_items(), vec![file.display().to_string()]);
    assert_eq!(harness.view().recent_labels(), vec![format!("&1 {}", file.display())]);
}

#[test]
fn test_open_strips_byte_order_mark() {
    let mut harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("bom.txt", "\u{feff}text");

    harness.open_file(&file).unwrap();

    assert_eq!(harness.buffer_content(), "text");
}

#[test]
fn test_duplicate_open_activates_existing_tab() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "A");
    let b = harness.create_file("b.txt", "B");

    let a_id = harness.open_file(&a).unwrap();
    harness.open_file(&b).unwrap();
    assert_eq!(harness.recent_items()[0], b.display().to_string());

    let again = harness.open_file(&a).unwrap();

    assert_eq!(again, a_id);
    assert_eq!(harness.editor().tab_count(), 3);
    assert_eq!(harness.editor().active_document_id(), Some(a_id));
    harness.assert_status("Document was already open, tab activated.");
    // Touching the open file still promotes it
    assert_eq!(
        harness.recent_items(),
        vec![a.display().to_string(), b.display().to_string()]
    );
}

#[test]
fn test_duplicate_open_keeps_unsaved_edits() {
    let mut harness = EditorTestHarness::new().unwrap();
    let a = harness.create_file("a.txt", "disk");
    harness.open_file(&a).unwrap();
    harness.type_text("edited ");

    harness.open_file(&a).unwrap();

    assert_eq!(harness.buffer_content(), "edited disk");
    assert_eq!(harness.active_title(), "a.txt*");
}

#[test]
fn test_duplicate_detection_ignores_case_and_dot_segments() {
    let mut harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("notes.txt", "n");
    let id = harness.open_file(&file).unwrap();

    let upper = harness.work_dir().join("NOTES.TXT");
    let dotted = harness.work_dir().join(".").join("notes.txt");

    assert!(harness.editor().doc_opened(&upper));
    assert!(harness.editor().doc_opened(&dotted));
    assert_eq!(harness.open_file(&upper).unwrap(), id);
    assert_eq!(harness.editor().tab_count(), 2);
}

#[test]
fn test_doc_opened_false_for_unopened_path() {
    let harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("other.txt", "");

    assert!(!harness.editor().doc_opened(&file));
}

#[test]
fn test_open_missing_file_leaves_no_trace() {
    let mut harness = EditorTestHarness::new().unwrap();
    let missing = harness.work_dir().join("missing.txt");
    assert_eq!(harness.view().buffers.len(), 1);

    let err = harness.open_file(&missing).unwrap_err();

    match err.downcast_ref::<DocumentError>() {
        Some(DocumentError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(harness.editor().tab_count(), 1);
    // No text widget was created for the failed open
    assert_eq!(harness.view().buffers.len(), 1);
    assert!(harness.recent_items().is_empty());
}

#[test]
fn test_open_dialog_cancel_is_noop() {
    let mut harness = EditorTestHarness::new().unwrap();

    let opened = harness.editor_mut().open_doc().unwrap();

    assert_eq!(opened, None);
    assert_eq!(harness.view().open_prompts, 1);
    assert_eq!(harness.editor().tab_count(), 1);
}

#[test]
fn test_open_dialog_opens_chosen_file() {
    let mut harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("picked.txt", "picked");
    harness.queue_open(&file);

    harness.editor_mut().execute(Action::OpenDoc);
    harness.editor_mut().tick();

    assert_eq!(harness.active_title(), "picked.txt");
    assert_eq!(harness.buffer_content(), "picked");
}

#[test]
fn test_open_failure_through_action_is_reported() {
    let mut harness = EditorTestHarness::new().unwrap();
    harness.queue_open(harness.work_dir().join("gone.txt"));

    harness.editor_mut().execute(Action::OpenDoc);

    assert_eq!(harness.view().errors.len(), 1);
    assert_eq!(harness.view().errors[0].0, "Open error");
    assert!(harness
        .view()
        .last_status()
        .unwrap()
        .starts_with("Open failed:"));
    assert_eq!(harness.editor().tab_count(), 1);
    assert_eq!(harness.view().buffers.len(), 1);
}

#[test]
fn test_edit_after_open_marks_modified() {
    let mut harness = EditorTestHarness::new().unwrap();
    let file = harness.create_file("a.txt", "Loaded");
    harness.open_file(&file).unwrap();

    harness.type_text(">");

    assert_eq!(harness.buffer_content(), ">Loaded");
    assert_eq!(harness.active_title(), "a.txt*");
}

//! Workspace lifecycle and invariant tests.

use super::*;

fn active_is_member(workspace: &Workspace) -> bool {
    workspace
        .documents()
        .iter()
        .any(|document| document.id == workspace.active_id())
}

#[test]
fn fresh_workspace_seeds_one_javascript_document() {
    let workspace = Workspace::new();
    assert_eq!(workspace.documents().len(), 1);
    let active = workspace.get_active();
    assert_eq!(active.name, "main.js");
    assert_eq!(active.language, "javascript");
    assert!(active.content.contains("console.log"));
    assert!(active_is_member(&workspace));
}

#[test]
fn new_document_is_numbered_empty_and_active() {
    let mut workspace = Workspace::new();
    let id = workspace
        .new_document("python")
        .expect("open document")
        .id
        .clone();

    assert_eq!(workspace.documents().len(), 2);
    let active = workspace.get_active();
    assert_eq!(active.id, id);
    assert_eq!(active.name, "file2.py");
    assert!(active.content.is_empty());
}

#[test]
fn new_document_rejects_unknown_language() {
    let mut workspace = Workspace::new();
    let err = workspace.new_document("fortran").unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownLanguage("fortran".to_string()));
    assert_eq!(workspace.documents().len(), 1);
}

#[test]
fn change_language_rewrites_name_and_resets_content() {
    let mut workspace = Workspace::new();
    let id = workspace.active_id().to_string();
    workspace
        .update_content(&id, "let edited = true;")
        .expect("update");

    let document = workspace
        .change_language(&id, "typescript")
        .expect("change language");

    assert_eq!(document.language, "typescript");
    assert_eq!(document.name, "main.ts");
    assert!(document.content.contains("interface User"));
    assert!(!document.content.contains("edited"));
}

#[test]
fn change_language_on_unknown_document_mutates_nothing() {
    let mut workspace = Workspace::new();
    let before = workspace.get_active().clone();
    let err = workspace.change_language("missing", "python").unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownDocument("missing".to_string()));
    assert_eq!(workspace.get_active(), &before);
}

#[test]
fn close_last_document_is_rejected_without_mutation() {
    let mut workspace = Workspace::new();
    let id = workspace.active_id().to_string();
    let before = workspace.get_active().clone();

    let err = workspace.close_document(&id).unwrap_err();

    assert_eq!(err, WorkspaceError::CannotCloseLastDocument);
    assert_eq!(workspace.documents().len(), 1);
    assert_eq!(workspace.get_active(), &before);
}

#[test]
fn closing_the_active_document_activates_the_first_remaining() {
    let mut workspace = Workspace::new();
    let first = workspace.active_id().to_string();
    let second = workspace.new_document("javascript").unwrap().id.clone();
    let third = workspace.new_document("javascript").unwrap().id.clone();
    assert_eq!(workspace.active_id(), third);

    workspace.close_document(&third).expect("close active");

    assert_eq!(workspace.active_id(), first);
    assert!(active_is_member(&workspace));

    // Closing a non-active document leaves the selection alone.
    workspace.set_active(&second).expect("select");
    workspace.close_document(&first).expect("close inactive");
    assert_eq!(workspace.active_id(), second);
    assert!(active_is_member(&workspace));
}

#[test]
fn set_active_rejects_unknown_ids() {
    let mut workspace = Workspace::new();
    let err = workspace.set_active("missing").unwrap_err();
    assert_eq!(err, WorkspaceError::UnknownDocument("missing".to_string()));
    assert!(active_is_member(&workspace));
}

#[test]
fn update_content_is_idempotent() {
    let mut workspace = Workspace::new();
    let id = workspace.active_id().to_string();

    workspace.update_content(&id, "console.log(1);").unwrap();
    workspace.update_content(&id, "console.log(1);").unwrap();

    assert_eq!(workspace.get_active().content, "console.log(1);");
}

#[test]
fn documents_keep_insertion_order() {
    let mut workspace = Workspace::new();
    workspace.new_document("python").unwrap();
    workspace.new_document("rust").unwrap();

    let names: Vec<_> = workspace
        .documents()
        .iter()
        .map(|document| document.name.as_str())
        .collect();
    assert_eq!(names, vec!["main.js", "file2.py", "file3.rs"]);
}

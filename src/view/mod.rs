//! View boundary
//!
//! The editor core never renders anything itself. It drives an [`EditorView`]
//! supplied by the front-end: a tab container, a status line, the recent-files
//! menu, and the dialogs (open/save path pickers, close confirmation,
//! warnings and errors).

pub mod terminal;
pub mod ui;

use std::path::PathBuf;

use crate::input::commands::Action;
use crate::model::buffer::TextBuffer;
use crate::model::event::DocumentId;

/// Answer to the "save changes?" prompt shown when closing a modified document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Close without saving
    Discard,
    /// Save (asking for a path if needed), close only if the save succeeded
    SaveAndClose,
    /// Keep the document open and abort the enclosing close operation
    Cancel,
}

/// One entry of a menu published by the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub enabled: bool,
    /// Action run when the entry is chosen
    pub action: Option<Action>,
}

/// Presentation surface driven by the editor
pub trait EditorView {
    /// Create the text-editing widget backing a new tab
    fn create_buffer(&mut self, id: DocumentId) -> Box<dyn TextBuffer>;

    /// Append a tab to the tab container
    fn add_tab(&mut self, id: DocumentId, title: &str);

    /// Remove a tab from the tab container
    fn remove_tab(&mut self, id: DocumentId);

    /// Make a tab the selected one
    fn select_tab(&mut self, id: DocumentId);

    fn set_tab_title(&mut self, id: DocumentId, title: &str);

    fn set_status(&mut self, text: &str);

    /// Replace the contents of the recent-files menu
    fn set_recent_menu(&mut self, items: &[MenuItem]);

    /// Ask for a file to open; `None` when the user cancels
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a save target, seeded with `suggested_name`; `None` when cancelled
    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf>;

    /// Ask what to do with unsaved changes in `document_name`
    fn confirm_close(&mut self, document_name: &str) -> CloseDecision;

    fn show_warning(&mut self, title: &str, message: &str);

    fn show_error(&mut self, title: &str, message: &str);
}

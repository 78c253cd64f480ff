//! Document lifecycle operations for the Editor:
//! - Creating new documents
//! - Opening files (dialog, path, recent-files entry) with duplicate detection
//! - Activating tabs
//! - Closing tabs with save confirmation, singly or all at once

use std::path::Path;

use crate::model::document::{Document, DocumentError};
use crate::model::event::DocumentId;
use crate::primitives::path_utils::{paths_equal_ignore_case, resolve_absolute};
use crate::view::ui::tabs::format_tab_title;
use crate::view::{CloseDecision, EditorView};

use super::types::{
    status_opened, CloseOutcome, RECENT_WARNING_TITLE, STATUS_ALREADY_OPEN, STATUS_NEW_DOCUMENT,
};
use super::Editor;

impl<V: EditorView> Editor<V> {
    /// Create an empty untitled document in a new tab and activate it
    pub fn new_doc(&mut self) -> DocumentId {
        let id = self.alloc_document_id();
        let buffer = self.view.create_buffer(id);
        let doc = Document::new(id, buffer);
        self.attach(doc);
        tracing::info!("Created document {}", id);
        self.set_status(STATUS_NEW_DOCUMENT);
        id
    }

    /// Add a document as the last tab and make it active
    fn attach(&mut self, mut doc: Document) {
        let id = doc.id();
        doc.subscribe(self.event_tx.clone());
        let title = format_tab_title(&doc);
        self.documents.push(doc);
        self.view.add_tab(id, &title);
        self.activate(id);
    }

    /// Make the tab for `id` the active one
    ///
    /// Returns false if no such tab is open.
    pub fn activate(&mut self, id: DocumentId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.active = Some(id);
        self.view.select_tab(id);
        self.update_ui_state();
        true
    }

    /// Ask the view for a file and open it
    ///
    /// Returns `Ok(None)` if the user cancelled the dialog.
    pub fn open_doc(&mut self) -> anyhow::Result<Option<DocumentId>> {
        match self.view.pick_open_path() {
            Some(path) => self.open_path(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Open `path` in a new tab, or activate the tab that already shows it
    ///
    /// Either way the path is promoted in the recent-files list. On failure no
    /// tab is added.
    pub fn open_path(&mut self, path: &Path) -> anyhow::Result<DocumentId> {
        if let Some(id) = self.find_tab_by_path(path) {
            tracing::info!("{:?} already open in document {}", path, id);
            self.activate(id);
            let full = self.document(id).and_then(Document::path).map(Path::to_path_buf);
            if let Some(full) = full {
                self.recent.add(full);
            }
            self.rebuild_recent_menu();
            self.set_status(STATUS_ALREADY_OPEN);
            return Ok(id);
        }

        // Read before asking the view for a widget, so a failure leaves no trace
        let loaded = Document::read_file(path)?;
        let full = loaded.path().to_path_buf();

        let id = self.alloc_document_id();
        let buffer = self.view.create_buffer(id);
        let mut doc = Document::new(id, buffer);
        doc.load(loaded);

        self.attach(doc);
        self.recent.add(&full);
        self.rebuild_recent_menu();
        self.set_status(&status_opened(&full));
        Ok(id)
    }

    /// Open the recent-files entry at `index` (0 = most recent)
    ///
    /// An out-of-range index does nothing. An entry whose file is gone is
    /// reported as a warning and removed from the list.
    pub fn open_doc_by_recent_index(&mut self, index: usize) -> anyhow::Result<Option<DocumentId>> {
        let Some(path) = self.recent.get(index).map(Path::to_path_buf) else {
            tracing::debug!("Recent index {} out of range", index);
            return Ok(None);
        };

        if !path.exists() {
            let err = DocumentError::NotFound { path: path.clone() };
            tracing::warn!("Dropping stale recent entry: {}", err);
            self.view.show_warning(RECENT_WARNING_TITLE, &err.to_string());
            self.recent.remove(&path);
            self.rebuild_recent_menu();
            self.set_status(&err.to_string());
            return Ok(None);
        }

        self.open_path(&path).map(Some)
    }

    /// Whether a tab already shows `path` (compared case-insensitively after
    /// resolving to an absolute path)
    pub fn doc_opened(&self, path: &Path) -> bool {
        self.find_tab_by_path(path).is_some()
    }

    /// Find the tab whose document is bound to `path`
    pub fn find_tab_by_path(&self, path: &Path) -> Option<DocumentId> {
        let full = resolve_absolute(path).ok()?;
        self.documents
            .iter()
            .find(|doc| {
                doc.path()
                    .is_some_and(|doc_path| paths_equal_ignore_case(doc_path, &full))
            })
            .map(Document::id)
    }

    /// Close the active tab, asking about unsaved changes
    pub fn close_active_doc(&mut self) -> anyhow::Result<CloseOutcome> {
        match self.active {
            Some(id) => self.close_tab(id),
            None => Ok(CloseOutcome::NoDocument),
        }
    }

    /// Close one tab, asking about unsaved changes
    ///
    /// A save failure during "save and close" is returned as the error and
    /// the tab stays open. Closing the last tab opens a fresh empty document.
    pub fn close_tab(&mut self, id: DocumentId) -> anyhow::Result<CloseOutcome> {
        // Edits still queued in the buffer count toward the modified check
        self.process_events();

        let Some(doc) = self.document(id) else {
            return Ok(CloseOutcome::NoDocument);
        };

        if doc.is_modified() {
            let name = doc.short_name();
            match self.view.confirm_close(&name) {
                CloseDecision::Cancel => {
                    tracing::debug!("Close of document {} cancelled", id);
                    return Ok(CloseOutcome::Cancelled);
                }
                CloseDecision::Discard => {
                    tracing::debug!("Discarding changes in document {}", id);
                }
                CloseDecision::SaveAndClose => {
                    if !self.save_document(id)? {
                        return Ok(CloseOutcome::Cancelled);
                    }
                }
            }
        }

        self.remove_document(id);
        Ok(CloseOutcome::Closed)
    }

    /// Close every tab in open order
    ///
    /// Stops at the first tab the user keeps open (`Ok(false)`) or whose save
    /// fails (the error); later tabs are left untouched. When everything was
    /// closed the recent-files list is persisted.
    pub fn close_all_docs(&mut self) -> anyhow::Result<bool> {
        let ids: Vec<DocumentId> = self.documents.iter().map(Document::id).collect();
        tracing::info!("Closing {} document(s)", ids.len());

        for id in ids {
            if self.close_tab(id)? == CloseOutcome::Cancelled {
                return Ok(false);
            }
        }

        self.recent.save_data();
        Ok(true)
    }

    fn remove_document(&mut self, id: DocumentId) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.documents.remove(index);
        self.view.remove_tab(id);
        tracing::info!("Closed document {}", id);

        if self.documents.is_empty() {
            self.active = None;
            self.update_ui_state();
            self.new_doc();
            return;
        }

        if self.active == Some(id) {
            // Select the left neighbour, or the new first tab
            let next = index.saturating_sub(1).min(self.documents.len() - 1);
            let next_id = self.documents[next].id();
            self.activate(next_id);
        } else {
            self.update_ui_state();
        }
    }
}

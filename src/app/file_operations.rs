//! Save operations for the Editor:
//! - Saving the active document in place, or via Save As when it is unnamed
//! - Save As with a suggested file name
//! - Post-save bookkeeping (recent files, tab title, status)

use std::path::Path;

use crate::model::document::Document;
use crate::model::event::DocumentId;
use crate::view::EditorView;

use super::types::{DEFAULT_SAVE_NAME, STATUS_SAVED};
use super::Editor;

impl<V: EditorView> Editor<V> {
    /// Save the active document
    ///
    /// Returns `Ok(false)` when there is nothing to save or the user cancelled
    /// the save dialog.
    pub fn save_doc(&mut self) -> anyhow::Result<bool> {
        match self.active {
            Some(id) => self.save_document(id),
            None => Ok(false),
        }
    }

    /// Save the active document under a name chosen in the save dialog
    pub fn save_doc_as(&mut self) -> anyhow::Result<bool> {
        match self.active {
            Some(id) => self.save_document_as(id),
            None => Ok(false),
        }
    }

    /// Save a document in place, falling back to Save As if it is unnamed
    pub fn save_document(&mut self, id: DocumentId) -> anyhow::Result<bool> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };
        if !self.documents[index].has_name() {
            return self.save_document_as(id);
        }

        self.documents[index].save()?;
        self.after_successful_save(id);
        Ok(true)
    }

    /// Ask for a target path and save the document there
    pub fn save_document_as(&mut self, id: DocumentId) -> anyhow::Result<bool> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };
        let suggested = suggested_save_name(&self.documents[index]);

        let Some(path) = self.view.pick_save_path(&suggested) else {
            tracing::debug!("Save As for document {} cancelled", id);
            return Ok(false);
        };

        if let Some(other) = self.find_tab_by_path(&path).filter(|other| *other != id) {
            anyhow::bail!(
                "{} is already open in another tab ({})",
                path.display(),
                other
            );
        }

        self.documents[index].save_as(&path)?;
        self.after_successful_save(id);
        Ok(true)
    }

    fn after_successful_save(&mut self, id: DocumentId) {
        let path = self
            .document(id)
            .and_then(Document::path)
            .map(Path::to_path_buf);
        if let Some(path) = path {
            self.recent.add(&path);
            self.recent.save_data();
            self.rebuild_recent_menu();
        }
        self.apply_document_events();
        self.update_tab_title(id);
        self.set_status(STATUS_SAVED);
    }
}

fn suggested_save_name(doc: &Document) -> String {
    if doc.has_name() {
        doc.short_name()
    } else {
        DEFAULT_SAVE_NAME.to_string()
    }
}

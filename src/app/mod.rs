//! Editor orchestration
//!
//! [`Editor`] owns the open (tab, document) pairs, the recent-files list and
//! the view it drives. Flows are split by concern:
//! - `buffer_management` - new/open/activate/close
//! - `file_operations` - save, save-as and post-save bookkeeping

mod buffer_management;
mod file_operations;
pub mod types;

use std::sync::mpsc;

use crate::input::commands::Action;
use crate::model::document::Document;
use crate::model::event::{DocumentEvent, DocumentId};
use crate::services::recent_files::RecentList;
use crate::view::ui::menu::recent_menu_items;
use crate::view::ui::tabs::format_tab_title;
use crate::view::EditorView;

use self::types::{STATUS_NO_DOCUMENTS, STATUS_READY};

/// Multi-document editor session
pub struct Editor<V: EditorView> {
    view: V,

    /// Open documents in tab order (which is open order)
    documents: Vec<Document>,

    active: Option<DocumentId>,

    recent: RecentList,

    next_document_id: usize,

    /// Modified-changed notifications from every open document
    event_tx: mpsc::Sender<DocumentEvent>,
    event_rx: mpsc::Receiver<DocumentEvent>,

    /// Last status text pushed to the view
    status_message: String,

    should_quit: bool,
}

impl<V: EditorView> Editor<V> {
    /// Start a session over `view`
    ///
    /// Loads `recent` from its storage, publishes the recent menu and opens
    /// the first empty document, so the session never has zero tabs.
    pub fn new(view: V, mut recent: RecentList) -> Self {
        recent.load_data();
        tracing::info!(
            "Editor started with {} recent file(s) from {:?}",
            recent.len(),
            recent.storage_path()
        );

        let (event_tx, event_rx) = mpsc::channel();
        let mut editor = Self {
            view,
            documents: Vec::new(),
            active: None,
            recent,
            next_document_id: 0,
            event_tx,
            event_rx,
            status_message: String::new(),
            should_quit: false,
        };
        editor.rebuild_recent_menu();
        editor.update_ui_state();
        editor.new_doc();
        editor
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn recent(&self) -> &RecentList {
        &self.recent
    }

    /// Open documents in tab order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn tab_count(&self) -> usize {
        self.documents.len()
    }

    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id() == id)
    }

    pub fn active_document_id(&self) -> Option<DocumentId> {
        self.active
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active.and_then(|id| self.document(id))
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether an Exit action completed
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether `action` currently has something to act on
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::SaveDoc | Action::SaveDocAs | Action::CloseActiveDoc => self.active.is_some(),
            Action::OpenRecent(index) => index < self.recent.len(),
            Action::NewDoc | Action::OpenDoc | Action::Exit => true,
        }
    }

    /// Run a menu or shortcut action, reporting failures through the view
    pub fn execute(&mut self, action: Action) {
        tracing::debug!("Executing {:?}", action);
        let result = match action {
            Action::NewDoc => {
                self.new_doc();
                Ok(())
            }
            Action::OpenDoc => self.open_doc().map(|_| ()),
            Action::SaveDoc => self.save_doc().map(|_| ()),
            Action::SaveDocAs => self.save_doc_as().map(|_| ()),
            Action::CloseActiveDoc => self.close_active_doc().map(|_| ()),
            Action::OpenRecent(index) => self.open_doc_by_recent_index(index).map(|_| ()),
            Action::Exit => self.close_all_docs().map(|closed| {
                if closed {
                    self.should_quit = true;
                }
            }),
        };

        if let Err(e) = result {
            tracing::error!("{:?} failed: {:#}", action, e);
            let prefix = match action {
                Action::OpenDoc | Action::OpenRecent(_) => "Open failed",
                Action::SaveDoc | Action::SaveDocAs => "Save failed",
                _ => "Close failed",
            };
            self.view.show_error(action.error_title(), &format!("{e:#}"));
            self.set_status(&format!("{prefix}: {e:#}"));
        }
    }

    /// Route a user edit into the active document at its cursor
    ///
    /// Returns false when no document is open.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let Some(index) = self.active.and_then(|id| self.index_of(id)) else {
            return false;
        };
        self.documents[index].buffer_mut().replace_selection(text);
        self.process_events();
        true
    }

    /// Drain buffer notifications of every document and refresh tab titles
    pub fn process_events(&mut self) {
        for doc in &mut self.documents {
            doc.pump_events();
        }
        self.apply_document_events();
    }

    /// One cooperative scheduling tick over every document
    pub fn tick(&mut self) {
        for doc in &mut self.documents {
            doc.tick();
        }
        self.apply_document_events();
    }

    fn apply_document_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                DocumentEvent::ModifiedChanged { id, .. } => self.update_tab_title(id),
            }
        }
    }

    fn update_tab_title(&mut self, id: DocumentId) {
        if let Some(doc) = self.document(id) {
            let title = format_tab_title(doc);
            self.view.set_tab_title(id, &title);
        }
    }

    /// Publish the recent menu from the current list
    fn rebuild_recent_menu(&mut self) {
        let items = recent_menu_items(self.recent.items());
        self.view.set_recent_menu(&items);
    }

    fn update_ui_state(&mut self) {
        let status = if self.documents.is_empty() {
            STATUS_NO_DOCUMENTS
        } else {
            STATUS_READY
        };
        self.set_status(status);
    }

    fn set_status(&mut self, text: &str) {
        self.status_message = text.to_string();
        self.view.set_status(text);
    }

    fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id() == id)
    }

    fn alloc_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_document_id);
        self.next_document_id += 1;
        id
    }
}

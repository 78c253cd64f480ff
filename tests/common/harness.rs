// EditorTestHarness - scripted view environment for E2E testing

use slate::model::buffer::{MemoryBuffer, SharedBuffer, TextBuffer};
use slate::model::event::DocumentId;
use slate::view::{CloseDecision, EditorView, MenuItem};
use slate::{DirectoryContext, Editor, RecentList};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// Editor view that records everything pushed to it and answers dialogs
/// from queues filled in by the test
///
/// An empty queue answers "cancel" to every dialog.
#[derive(Default)]
pub struct ScriptedView {
    /// Tabs in display order with their current titles
    pub tabs: Vec<(DocumentId, String)>,
    pub selected: Option<DocumentId>,
    /// Every status text, oldest first
    pub statuses: Vec<String>,
    pub recent_menu: Vec<MenuItem>,
    pub warnings: Vec<(String, String)>,
    pub errors: Vec<(String, String)>,
    /// Names passed to the close confirmation prompt
    pub close_prompts: Vec<String>,
    /// Names suggested by the save dialog
    pub save_suggestions: Vec<String>,
    pub open_prompts: usize,

    pub open_answers: VecDeque<PathBuf>,
    pub save_answers: VecDeque<PathBuf>,
    pub close_answers: VecDeque<CloseDecision>,

    /// Buffers handed out per document, shared with the document
    pub buffers: HashMap<DocumentId, SharedBuffer>,
}

impl ScriptedView {
    pub fn title_of(&self, id: DocumentId) -> Option<&str> {
        self.tabs
            .iter()
            .find(|(tab, _)| *tab == id)
            .map(|(_, title)| title.as_str())
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    pub fn recent_labels(&self) -> Vec<String> {
        self.recent_menu.iter().map(|item| item.label.clone()).collect()
    }
}

impl EditorView for ScriptedView {
    fn create_buffer(&mut self, id: DocumentId) -> Box<dyn TextBuffer> {
        // Like a real widget: the handle comes up with initialization noise
        let buffer = MemoryBuffer::shared();
        buffer.borrow_mut().set_text("");
        buffer.borrow_mut().create_handle();
        self.buffers.insert(id, Rc::clone(&buffer));
        Box::new(buffer)
    }

    fn add_tab(&mut self, id: DocumentId, title: &str) {
        self.tabs.push((id, title.to_string()));
    }

    fn remove_tab(&mut self, id: DocumentId) {
        self.tabs.retain(|(tab, _)| *tab != id);
        self.buffers.remove(&id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    fn select_tab(&mut self, id: DocumentId) {
        self.selected = Some(id);
    }

    fn set_tab_title(&mut self, id: DocumentId, title: &str) {
        if let Some((_, existing)) = self.tabs.iter_mut().find(|(tab, _)| *tab == id) {
            *existing = title.to_string();
        }
    }

    fn set_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn set_recent_menu(&mut self, items: &[MenuItem]) {
        self.recent_menu = items.to_vec();
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.open_prompts += 1;
        self.open_answers.pop_front()
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.save_suggestions.push(suggested_name.to_string());
        self.save_answers.pop_front()
    }

    fn confirm_close(&mut self, document_name: &str) -> CloseDecision {
        self.close_prompts.push(document_name.to_string());
        self.close_answers
            .pop_front()
            .unwrap_or(CloseDecision::Cancel)
    }

    fn show_warning(&mut self, title: &str, message: &str) {
        self.warnings.push((title.to_string(), message.to_string()));
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }
}

/// Editor session over a [`ScriptedView`] with all state in a temp directory
pub struct EditorTestHarness {
    editor: Editor<ScriptedView>,
    dir_context: DirectoryContext,
    _temp_dir: TempDir,
}

impl EditorTestHarness {
    /// Start a session with an empty recent-files list and its first empty
    /// document ready for edits
    pub fn new() -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let dir_context = DirectoryContext::for_testing(temp_dir.path());
        std::fs::create_dir_all(&dir_context.data_dir)?;
        let mut editor = Editor::new(
            ScriptedView::default(),
            RecentList::from_context(&dir_context),
        );
        editor.tick();
        Ok(Self {
            editor,
            dir_context,
            _temp_dir: temp_dir,
        })
    }

    /// Write `paths` as the persisted recent-files list and restart so the
    /// session loads it
    pub fn seed_recent_files(&mut self, paths: &[PathBuf]) {
        let json = serde_json::to_string_pretty(paths).unwrap();
        std::fs::write(self.recent_path(), json).unwrap();
        self.restart();
    }

    /// Replace the editor with a fresh session over the same directories
    pub fn restart(&mut self) {
        self.editor = Editor::new(
            ScriptedView::default(),
            RecentList::from_context(&self.dir_context),
        );
        self.editor.tick();
    }

    pub fn editor(&self) -> &Editor<ScriptedView> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor<ScriptedView> {
        &mut self.editor
    }

    pub fn view(&self) -> &ScriptedView {
        self.editor.view()
    }

    pub fn view_mut(&mut self) -> &mut ScriptedView {
        self.editor.view_mut()
    }

    pub fn recent_path(&self) -> PathBuf {
        self.dir_context.recent_files_path()
    }

    /// Directory for files the test creates
    pub fn work_dir(&self) -> PathBuf {
        self.dir_context.data_dir.join("work")
    }

    /// Write a file under the work directory and return its path
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.work_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Create a new document and let it finish activation
    pub fn new_doc(&mut self) -> DocumentId {
        let id = self.editor.new_doc();
        self.editor.tick();
        id
    }

    /// Open a file and let its document finish activation
    pub fn open_file(&mut self, path: &Path) -> anyhow::Result<DocumentId> {
        let id = self.editor.open_path(path)?;
        self.editor.tick();
        Ok(id)
    }

    /// Type into the active document as the user would
    pub fn type_text(&mut self, text: &str) {
        assert!(self.editor.insert_text(text), "no active document");
    }

    /// Type into a specific document's widget without pumping events
    pub fn type_into(&mut self, id: DocumentId, text: &str) {
        let buffer = self.view().buffers.get(&id).cloned().unwrap();
        buffer.borrow_mut().type_text(text);
    }

    pub fn queue_open(&mut self, path: impl Into<PathBuf>) {
        self.view_mut().open_answers.push_back(path.into());
    }

    pub fn queue_save(&mut self, path: impl Into<PathBuf>) {
        self.view_mut().save_answers.push_back(path.into());
    }

    pub fn queue_close(&mut self, decision: CloseDecision) {
        self.view_mut().close_answers.push_back(decision);
    }

    pub fn active_id(&self) -> DocumentId {
        self.editor.active_document_id().unwrap()
    }

    /// Title of the active tab as shown by the view
    pub fn active_title(&self) -> String {
        self.view().title_of(self.active_id()).unwrap().to_string()
    }

    pub fn tab_titles(&self) -> Vec<String> {
        self.view().tabs.iter().map(|(_, title)| title.clone()).collect()
    }

    pub fn assert_tab_titles(&self, expected: &[&str]) {
        assert_eq!(self.tab_titles(), expected, "tab titles");
    }

    pub fn assert_status(&self, expected: &str) {
        assert_eq!(self.view().last_status(), Some(expected), "status text");
    }

    pub fn buffer_content(&self) -> String {
        self.editor
            .active_document()
            .map(|doc| doc.text())
            .unwrap_or_default()
    }

    /// Recent-files entries as plain strings
    pub fn recent_items(&self) -> Vec<String> {
        self.editor
            .recent()
            .items()
            .iter()
            .map(|p| p.display().to_string())
            .collect()
    }
}

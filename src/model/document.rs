//! Document: one open text buffer plus its file binding and dirty tracking
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --HandleReady--> Activating --tick--> Ready
//! ```
//!
//! Content-changed notifications are only trusted as user edits once the
//! document is `Ready`. The transition out of `Activating` happens on the
//! cooperative tick after the buffer reports its handle, and that same tick
//! forces the document back to clean, collapsing any initialization noise the
//! widget produced in between.
//!
//! Programmatic assignments made by the document itself (open) never mark it
//! modified. Only `Ready`-state content changes do.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::model::buffer::TextBuffer;
use crate::model::event::{BufferEvent, DocumentEvent, DocumentId};
use crate::primitives::path_utils::{file_name_string, is_blank, resolve_absolute};
use crate::services::fs;

/// Short name shown for documents that were never saved
pub const UNTITLED_NAME: &str = "(untitled)";

/// Dirty-tracking readiness of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Buffer handle not constructed yet; changes are ignored
    Uninitialized,
    /// Handle ready, activation scheduled for the next tick; changes are ignored
    Activating,
    /// Changes are user edits
    Ready,
}

/// Errors raised by document file operations
#[derive(Debug)]
pub enum DocumentError {
    /// Reading, decoding or writing the file failed
    Io { path: PathBuf, source: io::Error },
    /// Save was called on a document without a file path
    Unnamed,
    /// The file no longer exists
    NotFound { path: PathBuf },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Unnamed => write!(f, "Document has no name; use Save As"),
            Self::NotFound { path } => write!(f, "File not found: {}", path.display()),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl DocumentError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Resolve a user-supplied file name, rejecting blank input
fn resolve_file_name(path: &Path) -> Result<PathBuf, DocumentError> {
    if is_blank(path) {
        return Err(DocumentError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "File name is empty"),
        ));
    }
    resolve_absolute(path).map_err(|e| DocumentError::io(path, e))
}

/// File content read from disk, ready to be loaded into a document
#[derive(Debug, Clone)]
pub struct LoadedFile {
    path: PathBuf,
    text: String,
}

impl LoadedFile {
    /// Resolved absolute path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A text document bound to an external text buffer
pub struct Document {
    id: DocumentId,
    buffer: Box<dyn TextBuffer>,
    /// Absolute path, if the document has been opened from or saved to disk
    path: Option<PathBuf>,
    modified: bool,
    lifecycle: Lifecycle,
    subscribers: Vec<mpsc::Sender<DocumentEvent>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("modified", &self.modified)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Create an empty, unnamed, clean document over `buffer`
    pub fn new(id: DocumentId, buffer: Box<dyn TextBuffer>) -> Self {
        let lifecycle = if buffer.is_handle_ready() {
            Lifecycle::Activating
        } else {
            Lifecycle::Uninitialized
        };
        Self {
            id,
            buffer,
            path: None,
            modified: false,
            lifecycle,
            subscribers: Vec::new(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Absolute file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn has_name(&self) -> bool {
        self.path.is_some()
    }

    /// Base name of the file, or the untitled placeholder
    pub fn short_name(&self) -> String {
        match &self.path {
            Some(path) => file_name_string(path).unwrap_or_else(|| path.display().to_string()),
            None => UNTITLED_NAME.to_string(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn buffer(&self) -> &dyn TextBuffer {
        self.buffer.as_ref()
    }

    pub fn buffer_mut(&mut self) -> &mut dyn TextBuffer {
        self.buffer.as_mut()
    }

    /// Register a subscriber for modified-changed notifications
    pub fn subscribe(&mut self, sender: mpsc::Sender<DocumentEvent>) {
        self.subscribers.push(sender);
    }

    /// Convenience: subscribe through a fresh channel
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<DocumentEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(tx);
        rx
    }

    /// Set the modified flag, notifying subscribers on actual transitions only
    pub fn set_modified(&mut self, modified: bool) {
        if self.modified == modified {
            return;
        }
        self.modified = modified;
        tracing::debug!("Document {} modified={}", self.id, modified);

        let event = DocumentEvent::ModifiedChanged {
            id: self.id,
            modified,
        };
        // Receivers that went away are dropped
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    fn mark_clean(&mut self) {
        self.buffer.set_modified(false);
        self.set_modified(false);
    }

    fn handle_buffer_event(&mut self, event: BufferEvent, track_edits: bool) {
        tracing::trace!("Document {} buffer event {:?}", self.id, event);
        match event {
            BufferEvent::HandleReady => {
                if self.lifecycle == Lifecycle::Uninitialized {
                    self.lifecycle = Lifecycle::Activating;
                }
            }
            BufferEvent::ContentChanged => {
                if track_edits && self.lifecycle == Lifecycle::Ready {
                    self.set_modified(true);
                }
            }
        }
    }

    /// Drain pending buffer notifications, returning how many were handled
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.buffer.poll_event() {
            self.handle_buffer_event(event, true);
            handled += 1;
        }
        handled
    }

    /// Drain notifications caused by the document's own writes to the buffer
    fn discard_own_changes(&mut self) {
        while let Some(event) = self.buffer.poll_event() {
            self.handle_buffer_event(event, false);
        }
    }

    /// One cooperative scheduling tick
    ///
    /// Drains pending notifications, then completes a scheduled activation:
    /// the document is forced clean and starts treating changes as edits.
    pub fn tick(&mut self) {
        self.pump_events();
        if self.lifecycle == Lifecycle::Activating {
            self.mark_clean();
            self.lifecycle = Lifecycle::Ready;
            tracing::debug!("Document {} ready for user edits", self.id);
        }
    }

    /// Resolve and read `path` without touching any document
    pub fn read_file(path: &Path) -> Result<LoadedFile, DocumentError> {
        let path = resolve_file_name(path)?;
        let text = fs::read_text(&path).map_err(|e| DocumentError::io(&path, e))?;
        Ok(LoadedFile { path, text })
    }

    /// Load `path` into the buffer
    ///
    /// On failure the document is left unchanged.
    pub fn open(&mut self, path: &Path) -> Result<(), DocumentError> {
        let loaded = Self::read_file(path)?;
        self.load(loaded);
        Ok(())
    }

    /// Replace the buffer with already-read file content and bind its path
    pub fn load(&mut self, loaded: LoadedFile) {
        let LoadedFile { path, text } = loaded;

        // Edits the user made before the load still count, so process them first
        self.pump_events();

        self.buffer.set_text(&text);
        self.buffer.set_selection(0, 0);
        self.discard_own_changes();

        tracing::info!("Opened {:?} into document {}", path, self.id);
        self.path = Some(path);
        self.mark_clean();
    }

    /// Write the buffer to the document's path
    pub fn save(&mut self) -> Result<(), DocumentError> {
        let path = self.path.clone().ok_or(DocumentError::Unnamed)?;
        self.write_to(&path)
    }

    /// Write the buffer to `path` and adopt it as the document's path
    ///
    /// The path is only adopted once the write succeeded.
    pub fn save_as(&mut self, path: &Path) -> Result<(), DocumentError> {
        let full = resolve_file_name(path)?;
        self.write_to(&full)?;
        self.path = Some(full);
        Ok(())
    }

    fn write_to(&mut self, path: &Path) -> Result<(), DocumentError> {
        // Pick up edits still queued in the buffer before snapshotting it
        self.pump_events();
        let text = self.buffer.text();
        fs::write_atomic(path, text.as_bytes()).map_err(|e| DocumentError::io(path, e))?;
        tracing::info!("Saved document {} to {:?}", self.id, path);
        self.mark_clean();
        Ok(())
    }
}

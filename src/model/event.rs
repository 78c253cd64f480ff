/// Unique identifier for an open document
///
/// The editor allocates one per tab; the same id is the tab handle given to
/// the view, since a tab and its document are created and destroyed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub usize);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notifications emitted by a text-buffer collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferEvent {
    /// The buffer's native handle finished construction; content-changed
    /// notifications may still be initialization noise until the next tick
    HandleReady,

    /// Buffer content changed (user edit or programmatic assignment)
    ContentChanged,
}

/// Notifications emitted by a document to its subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The modified flag actually changed value
    ModifiedChanged { id: DocumentId, modified: bool },
}

/// Status text after refreshing UI state with at least one tab open
pub const STATUS_READY: &str = "Ready.";

/// Status text after refreshing UI state with no tabs open
pub const STATUS_NO_DOCUMENTS: &str = "No open documents.";

/// Status text after creating an empty document
pub const STATUS_NEW_DOCUMENT: &str = "New document created.";

/// Status text when opening a file that already has a tab
pub const STATUS_ALREADY_OPEN: &str = "Document was already open, tab activated.";

/// Status text after a successful Save or Save As
pub const STATUS_SAVED: &str = "Document saved.";

/// Name suggested by the save dialog for documents that were never saved
pub const DEFAULT_SAVE_NAME: &str = "document.txt";

/// Title of the warning shown for stale recent-files entries
pub const RECENT_WARNING_TITLE: &str = "Recent";

/// Status text after opening `path` in a new tab
pub fn status_opened(path: &std::path::Path) -> String {
    format!("Opened file: {}", path.display())
}

/// Result of asking to close one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab and its document are gone
    Closed,
    /// The user kept the tab open (cancelled the prompt or the save dialog)
    Cancelled,
    /// There was no such tab
    NoDocument,
}

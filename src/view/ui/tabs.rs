//! Tab titles

use crate::model::document::Document;

/// Appended to the title of a tab whose document has unsaved changes
pub const MODIFIED_MARKER: &str = "*";

/// Title for a document's tab: short name, plus the marker if modified
pub fn format_tab_title(doc: &Document) -> String {
    tab_title(&doc.short_name(), doc.is_modified())
}

pub fn tab_title(short_name: &str, modified: bool) -> String {
    if modified {
        format!("{short_name}{MODIFIED_MARKER}")
    } else {
        short_name.to_string()
    }
}

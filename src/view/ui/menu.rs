//! Recent-files menu entries

use std::path::PathBuf;

use crate::input::commands::Action;
use crate::services::recent_files::RecentList;
use crate::view::MenuItem;

/// Label of the placeholder entry shown when there are no recent files
pub const EMPTY_RECENT_LABEL: &str = "(empty)";

/// Build the recent-files menu for `items` (most recent first)
///
/// Entries are labelled `&1 path`, `&2 path`, ... and open the file at their
/// position. An empty list yields a single disabled placeholder.
pub fn recent_menu_items(items: &[PathBuf]) -> Vec<MenuItem> {
    if items.is_empty() {
        return vec![MenuItem {
            label: EMPTY_RECENT_LABEL.to_string(),
            enabled: false,
            action: None,
        }];
    }

    items
        .iter()
        .take(RecentList::MAX_ITEMS)
        .enumerate()
        .map(|(index, path)| MenuItem {
            label: format!("&{} {}", index + 1, path.display()),
            enabled: true,
            action: Some(Action::OpenRecent(index)),
        })
        .collect()
}

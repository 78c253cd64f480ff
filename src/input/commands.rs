//! Editor commands
//!
//! Every menu entry and shortcut carries an [`Action`] value; running it is a
//! single call to `Editor::execute`. Recent-menu entries carry
//! `Action::OpenRecent(index)` addressing their position in the list.

/// An editor action that can be bound to a menu item or shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    NewDoc,
    OpenDoc,
    SaveDoc,
    SaveDocAs,
    CloseActiveDoc,
    /// Open the recent-files entry at this position (0 = most recent)
    OpenRecent(usize),
    Exit,
}

impl Action {
    /// Title used for error dialogs raised while running the action
    pub fn error_title(&self) -> &'static str {
        match self {
            Action::NewDoc => "New",
            Action::OpenDoc | Action::OpenRecent(_) => "Open error",
            Action::SaveDoc | Action::SaveDocAs => "Save error",
            Action::CloseActiveDoc | Action::Exit => "Close",
        }
    }
}

/// A command shown in the File menu
#[derive(Debug, Clone)]
pub struct Command {
    /// Menu label (e.g., "Save As")
    pub name: String,
    /// Command description
    pub description: String,
    /// Keyboard shortcut shown next to the label
    pub keybinding: Option<String>,
    /// The action to trigger
    pub action: Action,
}

/// File-menu commands in display order
pub fn get_all_commands() -> Vec<Command> {
    vec![
        Command {
            name: "New".to_string(),
            description: "Create a new empty document".to_string(),
            keybinding: Some("Ctrl+N".to_string()),
            action: Action::NewDoc,
        },
        Command {
            name: "Open".to_string(),
            description: "Open a file in a new tab, or activate its tab".to_string(),
            keybinding: Some("Ctrl+O".to_string()),
            action: Action::OpenDoc,
        },
        Command {
            name: "Save".to_string(),
            description: "Save the active document".to_string(),
            keybinding: Some("Ctrl+S".to_string()),
            action: Action::SaveDoc,
        },
        Command {
            name: "Save As".to_string(),
            description: "Save the active document under a new name".to_string(),
            keybinding: Some("Ctrl+Shift+S".to_string()),
            action: Action::SaveDocAs,
        },
        Command {
            name: "Close".to_string(),
            description: "Close the active document".to_string(),
            keybinding: Some("Ctrl+W".to_string()),
            action: Action::CloseActiveDoc,
        },
        Command {
            name: "Exit".to_string(),
            description: "Close every document and quit".to_string(),
            keybinding: Some("Alt+F4".to_string()),
            action: Action::Exit,
        },
    ]
}

/// Find the command bound to a shortcut such as "Ctrl+S" (case-insensitive)
pub fn find_by_keybinding(keybinding: &str) -> Option<Command> {
    get_all_commands().into_iter().find(|c| {
        c.keybinding
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case(keybinding))
    })
}

//! Line-oriented terminal front-end
//!
//! [`TerminalView`] implements [`EditorView`] over any reader/writer pair:
//! dialogs become prompts, status and warnings become printed lines. The
//! [`run_repl`] loop reads one command per line and drives the editor.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::app::Editor;
use crate::input::commands::{find_by_keybinding, get_all_commands, Action};
use crate::model::buffer::{MemoryBuffer, TextBuffer};
use crate::model::event::DocumentId;
use crate::view::{CloseDecision, EditorView, MenuItem};

/// Terminal implementation of the editor view
pub struct TerminalView<R, W> {
    input: R,
    output: W,
    /// Open tabs in display order
    tabs: Vec<(DocumentId, String)>,
    selected: Option<DocumentId>,
    recent_menu: Vec<MenuItem>,
    /// Path given on the command line of `open`/`saveas`, answered to the
    /// next dialog instead of prompting
    queued_path: Option<PathBuf>,
}

impl TerminalView<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tabs: Vec::new(),
            selected: None,
            recent_menu: Vec::new(),
            queued_path: None,
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn tabs(&self) -> &[(DocumentId, String)] {
        &self.tabs
    }

    pub fn recent_menu(&self) -> &[MenuItem] {
        &self.recent_menu
    }

    /// Answer the next open/save dialog with `path`
    pub fn queue_path(&mut self, path: PathBuf) {
        self.queued_path = Some(path);
    }

    pub fn clear_queued_path(&mut self) {
        self.queued_path = None;
    }

    fn println(&mut self, line: &str) {
        // Output failures leave nothing useful to do in a view callback
        let _ = writeln!(self.output, "{line}");
    }

    /// Prompt and read one trimmed line; `None` at end of input
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        let _ = write!(self.output, "{prompt}");
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read input: {}", e);
                None
            }
        }
    }

    fn read_path(&mut self, prompt: &str) -> Option<PathBuf> {
        if let Some(path) = self.queued_path.take() {
            return Some(path);
        }
        self.read_line(prompt)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
    }
}

impl<R: BufRead, W: Write> EditorView for TerminalView<R, W> {
    fn create_buffer(&mut self, _id: DocumentId) -> Box<dyn TextBuffer> {
        let mut buffer = MemoryBuffer::new();
        buffer.create_handle();
        Box::new(buffer)
    }

    fn add_tab(&mut self, id: DocumentId, title: &str) {
        self.tabs.push((id, title.to_string()));
    }

    fn remove_tab(&mut self, id: DocumentId) {
        self.tabs.retain(|(tab, _)| *tab != id);
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
        self.println(&format!("-- {text}"));
    }

    fn set_recent_menu(&mut self, items: &[MenuItem]) {
        self.recent_menu = items.to_vec();
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.read_path("Open file: ")
    }

    fn pick_save_path(&mut self, suggested_name: &str) -> Option<PathBuf> {
        self.read_path(&format!("Save as (e.g. {suggested_name}, empty to cancel): "))
    }

    fn confirm_close(&mut self, document_name: &str) -> CloseDecision {
        let prompt = format!("Save changes to {document_name}? [y]es/[n]o/[c]ancel: ");
        loop {
            let Some(answer) = self.read_line(&prompt) else {
                return CloseDecision::Cancel;
            };
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return CloseDecision::SaveAndClose,
                "n" | "no" => return CloseDecision::Discard,
                "c" | "cancel" => return CloseDecision::Cancel,
                _ => continue,
            }
        }
    }

    fn show_warning(&mut self, title: &str, message: &str) {
        self.println(&format!("warning [{title}]: {message}"));
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.println(&format!("error [{title}]: {message}"));
    }
}

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    New,
    Open(Option<PathBuf>),
    Save,
    SaveAs(Option<PathBuf>),
    Close,
    /// List the recent menu, or open entry N (1-based)
    Recent(Option<usize>),
    /// Type text at the cursor of the active document
    Type(String),
    /// Run the command bound to a shortcut such as `Ctrl+S`
    Key(String),
    Show,
    Tabs,
    Next,
    Help,
    Quit,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest.trim()),
            None => (line.trim_end(), ""),
        };
        let path_arg = || (!rest.is_empty()).then(|| PathBuf::from(rest));

        match word {
            "new" => Ok(Self::New),
            "open" => Ok(Self::Open(path_arg())),
            "save" => Ok(Self::Save),
            "saveas" => Ok(Self::SaveAs(path_arg())),
            "close" => Ok(Self::Close),
            "recent" if rest.is_empty() => Ok(Self::Recent(None)),
            "recent" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Self::Recent(Some(n))),
                _ => Err(format!("invalid recent entry: {rest}")),
            },
            // Keep the text verbatim apart from the separator; `\n` is a newline
            "type" => Ok(Self::Type(
                line.get(5..).unwrap_or_default().replace("\\n", "\n"),
            )),
            "key" if rest.is_empty() => Err("usage: key SHORTCUT (e.g. key Ctrl+S)".to_string()),
            "key" => Ok(Self::Key(rest.to_string())),
            "show" => Ok(Self::Show),
            "tabs" => Ok(Self::Tabs),
            "next" => Ok(Self::Next),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command: {other} (try help)")),
        }
    }
}

/// Read commands until `quit` succeeds or input ends
pub fn run_repl<R: BufRead, W: Write>(editor: &mut Editor<TerminalView<R, W>>) {
    loop {
        editor.tick();

        let Some(line) = editor.view_mut().read_line("> ") else {
            // End of input: close what can be closed and leave
            editor.execute(Action::Exit);
            break;
        };

        let command = match ReplCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                editor.view_mut().println(&message);
                continue;
            }
        };
        tracing::debug!("REPL command {:?}", command);

        run_command(editor, command);
        editor.view_mut().clear_queued_path();

        if editor.should_quit() {
            break;
        }
    }
}

fn run_command<R: BufRead, W: Write>(editor: &mut Editor<TerminalView<R, W>>, command: ReplCommand) {
    match command {
        ReplCommand::New => editor.execute(Action::NewDoc),
        ReplCommand::Open(path) => {
            if let Some(path) = path {
                editor.view_mut().queue_path(path);
            }
            editor.execute(Action::OpenDoc);
        }
        ReplCommand::Save => editor.execute(Action::SaveDoc),
        ReplCommand::SaveAs(path) => {
            if let Some(path) = path {
                editor.view_mut().queue_path(path);
            }
            editor.execute(Action::SaveDocAs);
        }
        ReplCommand::Close => editor.execute(Action::CloseActiveDoc),
        ReplCommand::Recent(Some(n)) => editor.execute(Action::OpenRecent(n - 1)),
        ReplCommand::Recent(None) => {
            let labels: Vec<String> = editor
                .view()
                .recent_menu()
                .iter()
                .map(|item| item.label.replacen('&', "", 1))
                .collect();
            for label in labels {
                editor.view_mut().println(&format!("  {label}"));
            }
        }
        ReplCommand::Type(text) => {
            if !editor.insert_text(&text) {
                editor.view_mut().println("no open document");
            }
        }
        ReplCommand::Key(shortcut) => match find_by_keybinding(&shortcut) {
            Some(command) => editor.execute(command.action),
            None => editor
                .view_mut()
                .println(&format!("no command bound to {shortcut}")),
        },
        ReplCommand::Show => {
            let text = editor.active_document().map(|doc| doc.text());
            match text {
                Some(text) => editor.view_mut().println(&text),
                None => editor.view_mut().println("no open document"),
            }
        }
        ReplCommand::Tabs => {
            let selected = editor.active_document_id();
            let lines: Vec<String> = editor
                .view()
                .tabs()
                .iter()
                .map(|(id, title)| {
                    let marker = if Some(*id) == selected { ">" } else { " " };
                    format!("{marker} {title}")
                })
                .collect();
            for line in lines {
                editor.view_mut().println(&line);
            }
        }
        ReplCommand::Next => {
            let ids: Vec<DocumentId> = editor.documents().iter().map(|doc| doc.id()).collect();
            let current = editor
                .active_document_id()
                .and_then(|id| ids.iter().position(|other| *other == id));
            if let Some(index) = current {
                editor.activate(ids[(index + 1) % ids.len()]);
            }
        }
        ReplCommand::Help => {
            let lines: Vec<String> = get_all_commands()
                .iter()
                .map(|c| {
                    format!(
                        "  {:<8} {:<14} {}",
                        c.name,
                        c.keybinding.as_deref().unwrap_or(""),
                        c.description
                    )
                })
                .collect();
            editor
                .view_mut()
                .println("commands: new, open [PATH], save, saveas [PATH], close, recent [N],");
            editor
                .view_mut()
                .println("          type TEXT, key SHORTCUT, show, tabs, next, help, quit");
            for line in lines {
                editor.view_mut().println(&line);
            }
        }
        ReplCommand::Quit => editor.execute(Action::Exit),
    }
}

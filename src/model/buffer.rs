//! Text-buffer collaborator boundary
//!
//! The editing widget that actually holds a document's text lives outside the
//! core. Documents talk to it only through [`TextBuffer`]: full-text get/set,
//! cursor/selection placement, the widget's own modified flag, and a queue of
//! [`BufferEvent`] notifications that the document drains cooperatively.
//!
//! [`MemoryBuffer`] is the in-process implementation used by the terminal
//! front-end and by tests. It deliberately mimics the noisy behaviour of real
//! widgets: programmatic assignment raises content-changed notifications just
//! like user typing does, and creating the native handle emits a burst of
//! initialization noise.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Range;
use std::rc::Rc;

use crate::model::event::BufferEvent;

/// Interface of the external text-editing widget that backs a document
pub trait TextBuffer {
    /// Full text content
    fn text(&self) -> String;

    /// Replace the full text content
    ///
    /// Implementations may raise [`BufferEvent::ContentChanged`]; the document
    /// treats assignments it performs itself as exempt from dirty tracking.
    fn set_text(&mut self, text: &str);

    /// Current selection as a byte range (empty range = caret)
    fn selection(&self) -> Range<usize>;

    /// Place the selection at `start` spanning `len` bytes
    fn set_selection(&mut self, start: usize, len: usize);

    /// Replace the selection with `text`, as if typed by the user
    fn replace_selection(&mut self, text: &str);

    /// The widget's own modified flag
    fn is_modified(&self) -> bool;

    /// Reset or set the widget's own modified flag
    fn set_modified(&mut self, modified: bool);

    /// Whether the native handle already exists
    fn is_handle_ready(&self) -> bool;

    /// Next pending notification, if any
    fn poll_event(&mut self) -> Option<BufferEvent>;
}

/// In-memory text buffer
#[derive(Debug, Default, Clone)]
pub struct MemoryBuffer {
    text: String,
    selection: Range<usize>,
    modified: bool,
    handle_ready: bool,
    events: VecDeque<BufferEvent>,
}

/// A memory buffer shared between a document and the front-end that renders it
pub type SharedBuffer = Rc<RefCell<MemoryBuffer>>;

impl MemoryBuffer {
    /// Create an empty buffer whose native handle does not exist yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer whose handle already exists (no pending events)
    pub fn with_handle() -> Self {
        Self {
            handle_ready: true,
            ..Self::default()
        }
    }

    /// Create a shareable buffer
    pub fn shared() -> SharedBuffer {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Construct the native handle
    ///
    /// Emits the readiness signal followed by the spurious content-changed
    /// notification real widgets produce while initializing.
    pub fn create_handle(&mut self) {
        if self.handle_ready {
            return;
        }
        self.handle_ready = true;
        self.events.push_back(BufferEvent::HandleReady);
        self.events.push_back(BufferEvent::ContentChanged);
    }

    /// Type `text` at the caret (user edit)
    pub fn type_text(&mut self, text: &str) {
        self.replace_selection(text);
    }

    /// Number of notifications not yet drained
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn clamp_to_boundary(&self, mut offset: usize) -> usize {
        offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    fn content_changed(&mut self) {
        self.modified = true;
        self.events.push_back(BufferEvent::ContentChanged);
    }
}

impl TextBuffer for MemoryBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = 0..0;
        self.content_changed();
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn set_selection(&mut self, start: usize, len: usize) {
        let start = self.clamp_to_boundary(start);
        let end = self.clamp_to_boundary(start.saturating_add(len));
        self.selection = start..end;
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self.selection.clone();
        self.text.replace_range(range.clone(), text);
        let caret = range.start + text.len();
        self.selection = caret..caret;
        self.content_changed();
    }

    fn is_modified(&self) -> bool {
        self.modified
    }

    fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    fn is_handle_ready(&self) -> bool {
        self.handle_ready
    }

    fn poll_event(&mut self) -> Option<BufferEvent> {
        self.events.pop_front()
    }
}

impl<B: TextBuffer> TextBuffer for Rc<RefCell<B>> {
    fn text(&self) -> String {
        self.borrow().text()
    }

    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text)
    }

    fn selection(&self) -> Range<usize> {
        self.borrow().selection()
    }

    fn set_selection(&mut self, start: usize, len: usize) {
        self.borrow_mut().set_selection(start, len)
    }

    fn replace_selection(&mut self, text: &str) {
        self.borrow_mut().replace_selection(text)
    }

    fn is_modified(&self) -> bool {
        self.borrow().is_modified()
    }

    fn set_modified(&mut self, modified: bool) {
        self.borrow_mut().set_modified(modified)
    }

    fn is_handle_ready(&self) -> bool {
        self.borrow().is_handle_ready()
    }

    fn poll_event(&mut self) -> Option<BufferEvent> {
        self.borrow_mut().poll_event()
    }
}

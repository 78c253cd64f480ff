//! Filesystem access used by documents and persisted editor state

pub mod local;

pub use local::{read_text, write_atomic};

//! Core data model for documents
//!
//! This module contains the text-buffer collaborator boundary, the document
//! state machine and the identifiers/events that flow between them.

pub mod buffer;
pub mod document;
pub mod event;

//! Low-level primitives and utilities
//!
//! This module contains path normalization helpers shared by the document
//! model and the recent-files list.

pub mod path_utils;

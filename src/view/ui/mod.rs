//! Presentation state derived from the document model
//!
//! - `menu` - recent-files menu entries
//! - `tabs` - tab titles with the modified marker

pub mod menu;
pub mod tabs;

// Editor library - exposes the document model and editor orchestration for
// the terminal front-end and for testing

pub mod app;
pub mod config;
pub mod input;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;

pub use app::Editor;
pub use config::DirectoryContext;
pub use model::document::{Document, DocumentError};
pub use services::recent_files::RecentList;

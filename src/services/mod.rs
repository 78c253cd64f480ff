//! Services: filesystem access, recent-files persistence and logging setup

pub mod fs;
pub mod recent_files;
#[cfg(feature = "runtime")]
pub mod tracing_setup;

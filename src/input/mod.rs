//! Input handling: the command table behind menus and key shortcuts

pub mod commands;

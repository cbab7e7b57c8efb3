//! UI / rendering layer — everything that touches Ratatui widgets, plus the
//! plain-text surface used by `--print`.
//!
//! Rendering only reads the last view the navigation controller published.

pub mod class_list;
pub mod frame;
pub mod layout;
pub mod plain;
pub mod styles_panel;
pub mod theme;

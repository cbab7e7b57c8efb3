//! Application orchestration — navigation, state, event loop plumbing, and
//! input handling.

pub mod event;
pub mod handler;
pub mod navigation;
pub mod state;

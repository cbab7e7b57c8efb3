//! Core engine — catalog, inheritance chains, style aggregation, child discovery.
//!
//! Nothing in this module depends on any TUI or rendering crate, and nothing
//! here mutates the catalog once it is loaded.

pub mod catalog;
pub mod chain;
pub mod children;
pub mod error;
pub mod focus;
pub mod links;
pub mod styles;
pub mod widget;

#[cfg(test)]
pub mod fixtures;

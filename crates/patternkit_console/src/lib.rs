//! patternkit_console
//!
//! Command-line adapter around `patternkit_core::state`.
//! Reads signals from args or stdin, drives a switch context and reports status,
//! while keeping state semantics in `patternkit_core`.

pub mod config;
pub mod error;
pub mod session;

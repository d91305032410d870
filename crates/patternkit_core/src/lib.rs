//! patternkit_core: keyed factory registry + self-transitioning state context.
//!
//! Design goals:
//! - Pure, testable logic (no I/O).
//! - Explicit types; no macro wizardry.
//! - Lookup misses are data, misuse is a `CoreError`.

pub mod error;

/// Integer key -> deferred constructor registry for a polymorphic product family.
pub mod factory;

/// State context, signals and the reference switch state family.
pub mod state;

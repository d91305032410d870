//! patternkit_core::factory
//!
//! Keyed factory registry for a polymorphic product family.
//!
//! Key ideas:
//! - A key maps to a deferred constructor, not to a type tag + switch
//! - Construction arguments are captured when the builder is registered
//! - Every `create` yields a fresh product behind a shared `Arc` handle
//! - An unknown key is data (`None`), not an error

mod registry;

pub use registry::{Factory, Key};

//! patternkit_core::state
//!
//! Self-transitioning state context.
//!
//! Key ideas:
//! - The context owns exactly one current state (`Box<dyn State>`)
//! - Signals map to context operations through a table built once in `initialize()`
//! - Each operation forwards to the current state, which answers with a `Step`
//! - A `Step::Transition` replaces (and drops) the current state and bumps the change counter
//! - Calls before `initialize()` are rejected with `ErrorKind::InvalidState`

mod context;
mod graph;
mod signal;
#[allow(clippy::module_inception)]
mod state;
pub mod switch;
mod table;

pub use context::{Context, TransitionEvent};
pub use graph::{probe_graph, transition_graph, TransitionEdge, TransitionGraph};
pub use signal::{Operation, Signal, ALL_OPERATIONS, ALL_SIGNALS};
pub use state::{State, Status, Step};
pub use table::HandlerTable;

use tracing::{debug, trace};

use crate::error::{CoreError, Result};

use super::{HandlerTable, Operation, Signal, State, Status, Step};

/// Emitted by a context after a state replaced itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionEvent {
    pub operation: Operation,
    pub start_state: &'static str,
    pub goal_state: &'static str,
    /// Change counter value after this transition.
    pub change: u64,
}

/// Owner of exactly one current [`State`].
///
/// Lifecycle:
/// - `new()` is uninitialized: every call except `initialize` is rejected
/// - `initialize()` installs the initial state and the handler table, once
/// - signals are dispatched through the table to `on`/`off`/`destroy`,
///   which forward to the current state and apply the returned [`Step`]
#[derive(Debug, Default)]
pub struct Context {
    state: Option<Box<dyn State>>,
    table: Option<HandlerTable>,
    changes: u64,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `initial` as the current state and build the handler table.
    pub fn initialize(&mut self, initial: Box<dyn State>) -> Result<()> {
        if self.state.is_some() {
            return Err(CoreError::already_initialized());
        }

        debug!(state = initial.label(), "state context initialized");
        self.state = Some(initial);
        self.table = Some(HandlerTable::standard());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Number of transitions applied since `initialize`.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Label of the current state, if initialized.
    pub fn current(&self) -> Option<&'static str> {
        self.state.as_ref().map(|state| state.label())
    }

    pub fn input(&mut self, signal: Signal) -> Result<Option<TransitionEvent>> {
        self.input_raw(signal.id())
    }

    /// Dispatch a raw signal id. Ids missing from the handler table are ignored.
    pub fn input_raw(&mut self, signal_id: i32) -> Result<Option<TransitionEvent>> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| CoreError::not_initialized("input"))?;

        match table.get(signal_id) {
            Some(operation) => self.dispatch(operation),
            None => {
                trace!(signal_id, "unrecognized signal ignored");
                Ok(None)
            }
        }
    }

    pub fn on(&mut self) -> Result<Option<TransitionEvent>> {
        self.dispatch(Operation::On)
    }

    pub fn off(&mut self) -> Result<Option<TransitionEvent>> {
        self.dispatch(Operation::Off)
    }

    pub fn destroy(&mut self) -> Result<Option<TransitionEvent>> {
        self.dispatch(Operation::Destroy)
    }

    pub fn status(&self) -> Result<Status> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| CoreError::not_initialized("status"))?;
        Ok(state.status(self.changes))
    }

    fn dispatch(&mut self, operation: Operation) -> Result<Option<TransitionEvent>> {
        let state = self
            .state
            .as_mut()
            .ok_or_else(|| CoreError::not_initialized(operation.label()))?;

        if state.is_terminal() {
            trace!(
                operation = operation.label(),
                state = state.label(),
                "terminal state, operation ignored"
            );
            return Ok(None);
        }

        let step = match operation {
            Operation::On => state.on(),
            Operation::Off => state.off(),
            Operation::Destroy => state.destroy(),
        };

        let next = match step {
            Step::Stay => return Ok(None),
            Step::Transition(next) => next,
        };

        let start_state = state.label();
        let goal_state = next.label();

        // The previous state is dropped here.
        *state = next;
        self.changes += 1;

        debug!(
            operation = operation.label(),
            start_state,
            goal_state,
            change = self.changes,
            "state transition"
        );

        Ok(Some(TransitionEvent {
            operation,
            start_state,
            goal_state,
            change: self.changes,
        }))
    }
}

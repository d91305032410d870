use std::fmt;

/// A member of a state family driven by a [`Context`](super::Context).
///
/// Each capability returns a [`Step`]: the state, not the context, decides
/// whether the call is legal here and which state comes next. A state never
/// reaches into its owner.
pub trait State: fmt::Debug {
    /// Stable, human-readable name of this state.
    fn label(&self) -> &'static str;

    fn on(&mut self) -> Step;
    fn off(&mut self) -> Step;
    fn destroy(&mut self) -> Step;

    /// True when no capability of this state will ever transition again.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Read-only report for the owning context.
    fn status(&self, changes: u64) -> Status {
        Status {
            state: self.label(),
            changes,
            terminal: self.is_terminal(),
        }
    }
}

/// Outcome of a capability call on the current state.
#[derive(Debug)]
pub enum Step {
    /// Keep the current state (also used for calls that are no-ops here).
    Stay,
    /// Replace the current state with this one.
    Transition(Box<dyn State>),
}

impl Step {
    pub fn to(next: impl State + 'static) -> Self {
        Step::Transition(Box::new(next))
    }

    pub fn is_transition(&self) -> bool {
        matches!(self, Step::Transition(_))
    }
}

/// Snapshot returned by `Context::status`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Status {
    pub state: &'static str,
    pub changes: u64,
    pub terminal: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state={} changes={}", self.state, self.changes)?;
        if self.terminal {
            f.write_str(" (terminal)")?;
        }
        Ok(())
    }
}

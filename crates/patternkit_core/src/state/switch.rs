//! Reference on/off/destroy state family.
//!
//! ```text
//! Active   --off-->     Inactive
//! Inactive --on-->      Active
//! Active | Inactive --destroy--> Destroyed (terminal)
//! ```
//! Every other call is a no-op.

use super::{State, Step};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SwitchKind {
    Active,
    Inactive,
    Destroyed,
}

impl SwitchKind {
    pub const fn label(self) -> &'static str {
        match self {
            SwitchKind::Active => "Active",
            SwitchKind::Inactive => "Inactive",
            SwitchKind::Destroyed => "Destroyed",
        }
    }

    /// Case-insensitive inverse of [`SwitchKind::label`].
    pub fn from_label(label: &str) -> Option<SwitchKind> {
        ALL_KINDS
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Canonical list of switch states.
pub const ALL_KINDS: [SwitchKind; 3] = [
    SwitchKind::Active,
    SwitchKind::Inactive,
    SwitchKind::Destroyed,
];

#[derive(Debug, Default)]
pub struct Active;

#[derive(Debug, Default)]
pub struct Inactive;

#[derive(Debug, Default)]
pub struct Destroyed;

impl State for Active {
    fn label(&self) -> &'static str {
        SwitchKind::Active.label()
    }
    fn on(&mut self) -> Step {
        Step::Stay
    }
    fn off(&mut self) -> Step {
        Step::to(Inactive)
    }
    fn destroy(&mut self) -> Step {
        Step::to(Destroyed)
    }
}

impl State for Inactive {
    fn label(&self) -> &'static str {
        SwitchKind::Inactive.label()
    }
    fn on(&mut self) -> Step {
        Step::to(Active)
    }
    fn off(&mut self) -> Step {
        Step::Stay
    }
    fn destroy(&mut self) -> Step {
        Step::to(Destroyed)
    }
}

impl State for Destroyed {
    fn label(&self) -> &'static str {
        SwitchKind::Destroyed.label()
    }
    fn on(&mut self) -> Step {
        Step::Stay
    }
    fn off(&mut self) -> Step {
        Step::Stay
    }
    fn destroy(&mut self) -> Step {
        Step::Stay
    }
    fn is_terminal(&self) -> bool {
        true
    }
}

/// The state a fresh switch context starts in.
pub fn initial() -> Box<dyn State> {
    Box::new(Active)
}

pub fn state_for(kind: SwitchKind) -> Box<dyn State> {
    match kind {
        SwitchKind::Active => Box::new(Active),
        SwitchKind::Inactive => Box::new(Inactive),
        SwitchKind::Destroyed => Box::new(Destroyed),
    }
}

fn active() -> Box<dyn State> {
    state_for(SwitchKind::Active)
}

fn inactive() -> Box<dyn State> {
    state_for(SwitchKind::Inactive)
}

fn destroyed() -> Box<dyn State> {
    state_for(SwitchKind::Destroyed)
}

/// Constructors for every switch state, in [`ALL_KINDS`] order.
pub const CONSTRUCTORS: [fn() -> Box<dyn State>; 3] = [active, inactive, destroyed];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_for_matches_kind_label() {
        for kind in ALL_KINDS {
            assert_eq!(state_for(kind).label(), kind.label());
        }
        assert_eq!(SwitchKind::from_label("inactive"), Some(SwitchKind::Inactive));
        assert_eq!(SwitchKind::from_label("paused"), None);
    }

    #[test]
    fn only_destroyed_is_terminal() {
        assert!(!Active.is_terminal());
        assert!(!Inactive.is_terminal());
        assert!(Destroyed.is_terminal());
    }

    #[test]
    fn destroyed_never_transitions() {
        let mut state = Destroyed;
        assert!(!state.on().is_transition());
        assert!(!state.off().is_transition());
        assert!(!state.destroy().is_transition());
    }
}

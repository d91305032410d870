/// Discrete inputs accepted by a [`Context`](super::Context).
///
/// The numeric ids are stable; raw ids outside this set are ignored by
/// `Context::input_raw`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Signal {
    On,
    Off,
    Destroy,
}

impl Signal {
    pub const fn id(self) -> i32 {
        match self {
            Signal::On => 0,
            Signal::Off => 1,
            Signal::Destroy => 2,
        }
    }

    pub const fn from_id(id: i32) -> Option<Signal> {
        match id {
            0 => Some(Signal::On),
            1 => Some(Signal::Off),
            2 => Some(Signal::Destroy),
            _ => None,
        }
    }

    /// Stable, human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Signal::On => "on",
            Signal::Off => "off",
            Signal::Destroy => "destroy",
        }
    }

    /// Case-insensitive inverse of [`Signal::label`].
    pub fn from_label(label: &str) -> Option<Signal> {
        ALL_SIGNALS
            .into_iter()
            .find(|signal| signal.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Context operation this signal is bound to in the standard handler table.
    pub const fn operation(self) -> Operation {
        match self {
            Signal::On => Operation::On,
            Signal::Off => Operation::Off,
            Signal::Destroy => Operation::Destroy,
        }
    }
}

/// Canonical list of all signals.
pub const ALL_SIGNALS: [Signal; 3] = [Signal::On, Signal::Off, Signal::Destroy];

/// Context method a signal dispatches to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operation {
    On,
    Off,
    Destroy,
}

impl Operation {
    pub const fn label(self) -> &'static str {
        match self {
            Operation::On => "on",
            Operation::Off => "off",
            Operation::Destroy => "destroy",
        }
    }
}

/// Every operation a state must answer.
pub const ALL_OPERATIONS: [Operation; 3] = [Operation::On, Operation::Off, Operation::Destroy];

use std::collections::HashMap;

use super::{Operation, Signal, ALL_SIGNALS};

/// Immutable signal id -> operation table consulted by `Context::input_raw`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandlerTable {
    entries: HashMap<i32, Operation>,
}

impl HandlerTable {
    /// Every signal bound to its matching operation.
    pub fn standard() -> Self {
        Self {
            entries: ALL_SIGNALS
                .into_iter()
                .map(|signal| (signal.id(), signal.operation()))
                .collect(),
        }
    }

    pub fn get(&self, signal_id: i32) -> Option<Operation> {
        self.entries.get(&signal_id).copied()
    }

    pub fn lookup(&self, signal: Signal) -> Option<Operation> {
        self.get(signal.id())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

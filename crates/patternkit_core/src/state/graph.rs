use super::{switch, Operation, State, Step, ALL_OPERATIONS};

/// Transition graph of a state family, derived by probing each state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransitionGraph {
    pub states: Vec<&'static str>,
    pub transitions: Vec<TransitionEdge>,
}

/// Directed transition edge.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TransitionEdge {
    pub start: &'static str,
    pub operation: Operation,
    pub goal: &'static str,
}

/// Probe every state built by `constructors` with every operation.
///
/// A fresh state is built per probe so earlier calls cannot affect later ones.
/// Operations answered with `Step::Stay` produce no edge.
pub fn probe_graph(constructors: &[fn() -> Box<dyn State>]) -> TransitionGraph {
    let mut states = Vec::with_capacity(constructors.len());
    let mut transitions = Vec::new();

    for construct in constructors {
        let start = construct().label();
        states.push(start);

        for operation in ALL_OPERATIONS {
            let mut state = construct();
            let step = match operation {
                Operation::On => state.on(),
                Operation::Off => state.off(),
                Operation::Destroy => state.destroy(),
            };
            if let Step::Transition(next) = step {
                transitions.push(TransitionEdge {
                    start,
                    operation,
                    goal: next.label(),
                });
            }
        }
    }

    TransitionGraph {
        states,
        transitions,
    }
}

/// Transition graph of the reference switch family.
pub fn transition_graph() -> TransitionGraph {
    probe_graph(&switch::CONSTRUCTORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_contains_all_states_and_expected_edges() {
        let graph = transition_graph();

        assert_eq!(graph.states, vec!["Active", "Inactive", "Destroyed"]);

        let expected = [
            ("Active", Operation::Off, "Inactive"),
            ("Active", Operation::Destroy, "Destroyed"),
            ("Inactive", Operation::On, "Active"),
            ("Inactive", Operation::Destroy, "Destroyed"),
        ];

        for (start, operation, goal) in expected {
            assert!(
                graph.transitions.iter().any(|edge| {
                    edge.start == start && edge.operation == operation && edge.goal == goal
                }),
                "missing edge {start} -> {operation:?} -> {goal}"
            );
        }

        assert_eq!(graph.transitions.len(), expected.len());
    }

    #[test]
    fn terminal_state_has_no_outgoing_edges() {
        let graph = transition_graph();
        assert!(graph.transitions.iter().all(|edge| edge.start != "Destroyed"));
    }
}

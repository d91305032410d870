use patternkit_core::error::Result;
use patternkit_core::state::switch::{self, SwitchKind};
use patternkit_core::state::{Context, Signal, Status, TransitionEvent};
use tracing::{info, warn};

/// Map a token to a raw signal id: a signal label, or any integer.
///
/// Integers outside the signal set are kept so the context can ignore them.
pub fn parse_signal(token: &str) -> Option<i32> {
    let token = token.trim();
    Signal::from_label(token)
        .map(Signal::id)
        .or_else(|| token.parse().ok())
}

/// A switch context driven by text tokens.
#[derive(Debug)]
pub struct Session {
    context: Context,
}

impl Session {
    pub fn start(initial: SwitchKind) -> Result<Self> {
        let mut context = Context::new();
        context.initialize(switch::state_for(initial))?;
        info!(initial = initial.label(), "session started");
        Ok(Self { context })
    }

    /// Feed one token. Tokens that are neither a label nor an integer are skipped.
    pub fn feed(&mut self, token: &str) -> Result<Option<TransitionEvent>> {
        let Some(signal_id) = parse_signal(token) else {
            warn!("skipping unparseable signal {token:?}");
            return Ok(None);
        };

        let event = self.context.input_raw(signal_id)?;
        if let Some(event) = &event {
            info!(
                "{} -> {} via {} (change {})",
                event.start_state,
                event.goal_state,
                event.operation.label(),
                event.change
            );
        }
        Ok(event)
    }

    pub fn status(&self) -> Result<Status> {
        self.context.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_signal_accepts_labels_and_ids() {
        assert_eq!(parse_signal("on"), Some(0));
        assert_eq!(parse_signal("OFF"), Some(1));
        assert_eq!(parse_signal(" destroy\n"), Some(2));
        assert_eq!(parse_signal("7"), Some(7));
        assert_eq!(parse_signal("-3"), Some(-3));
        assert_eq!(parse_signal("toggle"), None);
        assert_eq!(parse_signal(""), None);
    }

    #[test]
    fn session_skips_garbage_and_unknown_ids() {
        let mut session = Session::start(SwitchKind::Active).unwrap();
        assert!(session.feed("toggle").unwrap().is_none());
        assert!(session.feed("9").unwrap().is_none());
        assert!(session.feed("off").unwrap().is_some());

        let status = session.status().unwrap();
        assert_eq!(status.state, "Inactive");
        assert_eq!(status.changes, 1);
    }
}

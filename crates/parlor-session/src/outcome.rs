//! Dispatch results.

use parlor_proto::EventTag;

use crate::{Command, ConnectionStatus, SessionAction};

/// Whether a handler changed anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The event was applied (state and/or actions).
    Applied,
    /// The event was deliberately dropped. State is unchanged.
    Ignored(IgnoreReason),
}

/// Why an event was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Tag is not in the registry.
    UnknownTag(String),
    /// List operation named a list the client does not keep.
    UnknownList(String),
    /// Tag is registered but the client does not interpret it.
    Unhandled(EventTag),
    /// Host notification arrived in a status it does not apply to.
    WrongStatus(ConnectionStatus),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// What happened to state.
    pub outcome: Outcome,
    /// Actions for the caller, in execution order.
    pub actions: Vec<SessionAction>,
}

impl Dispatch {
    /// Applied with the given actions.
    pub fn applied(actions: Vec<SessionAction>) -> Self {
        Self { outcome: Outcome::Applied, actions }
    }

    /// Dropped without actions.
    pub fn ignored(reason: IgnoreReason) -> Self {
        Self { outcome: Outcome::Ignored(reason), actions: Vec::new() }
    }

    /// Check if the event was applied.
    pub fn is_applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    /// Reason the event was dropped. `None` if applied.
    pub fn ignore_reason(&self) -> Option<&IgnoreReason> {
        match &self.outcome {
            Outcome::Applied => None,
            Outcome::Ignored(reason) => Some(reason),
        }
    }

    /// Commands among the actions, in order.
    pub fn commands(&self) -> Vec<Command> {
        self.actions.iter().filter_map(SessionAction::command).collect()
    }
}

//! Session side-effects.
//!
//! Handlers never perform I/O. Everything that must leave the state machine
//! is described by a [`SessionAction`] and executed by the caller, in order,
//! fire-and-forget.

use crate::ConnectionStatus;

/// Outbound command for the server.
///
/// Only the call is modeled here; its wire encoding belongs to the command
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Drop the connection.
    Disconnect,

    /// Authenticate with the configured credentials.
    Login,

    /// Enter a room.
    JoinRoom {
        /// Server-assigned room identifier.
        room_id: u32,
    },
}

/// Actions produced by the session for the caller to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Issue a command to the server.
    Send(Command),

    /// Report a connection status change to the status sink.
    UpdateStatus {
        /// New status.
        status: ConnectionStatus,
        /// Human-readable explanation.
        message: String,
    },

    /// Append a server broadcast to the message log.
    ServerMessage {
        /// Message text, verbatim.
        text: String,
    },
}

impl SessionAction {
    /// Command carried by this action. `None` for non-command actions.
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Send(command) => Some(*command),
            Self::UpdateStatus { .. } | Self::ServerMessage { .. } => None,
        }
    }
}

//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] decouples the session runtime from the transport, the
//! command encoder, and the UI. Each host implements it to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles the
//! dispatch loop.

use std::future::Future;

use parlor_proto::RawEvent;

use crate::{Command, ConnectionStatus};

/// Input delivered by the driver to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Server-pushed event, still encoded.
    Event(RawEvent),

    /// The server accepted the login command.
    LoginAccepted,

    /// The server rejected the login command.
    LoginRejected {
        /// Explanation for the status sink.
        message: String,
    },
}

/// Abstracts I/O operations for the session runtime.
///
/// Implementations must deliver inbound items in arrival order and must not
/// deliver the next one until the runtime asks for it; the runtime relies on
/// this to apply events one at a time.
///
/// Commands are fire-and-forget: `send_command` hands the command to the
/// encoder and returns without waiting for the server's answer. Answers that
/// matter to the session come back later through [`Driver::next`].
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next inbound item.
    ///
    /// Returns `None` once the source is exhausted or the connection closed.
    fn next(&mut self) -> impl Future<Output = Result<Option<Inbound>, Self::Error>> + Send;

    /// Issue a command to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be handed to the transport.
    fn send_command(
        &mut self,
        command: Command,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Publish a connection status change.
    ///
    /// # Errors
    ///
    /// Returns an error if the status sink fails.
    fn update_status(&mut self, status: ConnectionStatus, message: &str) -> Result<(), Self::Error>;

    /// Append a server broadcast to the message log.
    ///
    /// # Errors
    ///
    /// Returns an error if the message log fails.
    fn server_message(&mut self, text: &str) -> Result<(), Self::Error>;
}

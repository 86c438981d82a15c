//! Connection lifecycle controller.
//!
//! Drives the status state machine from identification and closure events.
//! This is the only module that writes [`ConnectionStatus`].
//!
//! # State Machine
//!
//! ```text
//! ┌──────────────┐ Identification ┌───────────┐  login accepted  ┌───────────┐
//! │ Disconnected │───────────────>│ LoggingIn │─────────────────>│ Connected │
//! └──────────────┘ (version ok)   └───────────┘                  └───────────┘
//!        ^                              │                              │
//!        │   Closed / version mismatch / login rejected                │
//!        └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! A version mismatch leaves the session in `Disconnected`, and the login
//! acceptance that would lead to `Connected` is only honored from
//! `LoggingIn`, so an incompatible server can never produce a connected
//! session.

use parlor_proto::{
    CloseReason,
    payloads::session::{ConnectionClosed, ServerIdentification},
};

use crate::{
    Command, ConnectionStatus, Dispatch, IgnoreReason, SessionAction, SessionConfig, SessionState,
};

/// Status message while the login command is in flight.
pub(crate) const LOGGING_IN_MESSAGE: &str = "Logging in...";

/// Status message once login is accepted.
pub(crate) const LOGGED_IN_MESSAGE: &str = "Logged in.";

/// Human-readable explanation for a closure.
///
/// A non-empty free-text reason is used verbatim. Otherwise the reason code
/// is looked up in the fixed [`CloseReason`] table, with unknown, absent, and
/// `Other` codes all reading "Unknown reason".
pub fn close_message(closed: &ConnectionClosed) -> String {
    match closed.reason_str.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => closed
            .close_reason()
            .map_or(CloseReason::UNKNOWN_MESSAGE, CloseReason::message)
            .to_string(),
    }
}

pub(crate) fn on_server_identification(
    state: &mut SessionState,
    config: &SessionConfig,
    info: ServerIdentification,
) -> Dispatch {
    let ServerIdentification { server_name, server_version, protocol_version } = info;

    if protocol_version != config.protocol_version {
        tracing::warn!(
            server = %server_name,
            theirs = protocol_version,
            ours = config.protocol_version,
            "protocol version mismatch"
        );
        let message = format!("Protocol version mismatch: {protocol_version}");
        return Dispatch::applied(vec![
            SessionAction::Send(Command::Disconnect),
            transition(state, ConnectionStatus::Disconnected, message),
        ]);
    }

    state.reset_connection();
    let status = transition(state, ConnectionStatus::LoggingIn, LOGGING_IN_MESSAGE.to_string());
    state.update_info(server_name, server_version);

    Dispatch::applied(vec![status, SessionAction::Send(Command::Login)])
}

pub(crate) fn on_connection_closed(state: &mut SessionState, closed: &ConnectionClosed) -> Dispatch {
    let message = close_message(closed);
    Dispatch::applied(vec![transition(state, ConnectionStatus::Disconnected, message)])
}

pub(crate) fn login_succeeded(state: &mut SessionState) -> Dispatch {
    if state.status() != ConnectionStatus::LoggingIn {
        return Dispatch::ignored(IgnoreReason::WrongStatus(state.status()));
    }

    Dispatch::applied(vec![transition(
        state,
        ConnectionStatus::Connected,
        LOGGED_IN_MESSAGE.to_string(),
    )])
}

pub(crate) fn login_failed(state: &mut SessionState, message: String) -> Dispatch {
    if state.status() != ConnectionStatus::LoggingIn {
        return Dispatch::ignored(IgnoreReason::WrongStatus(state.status()));
    }

    Dispatch::applied(vec![
        SessionAction::Send(Command::Disconnect),
        transition(state, ConnectionStatus::Disconnected, message),
    ])
}

fn transition(
    state: &mut SessionState,
    status: ConnectionStatus,
    message: String,
) -> SessionAction {
    tracing::info!(from = %state.status(), to = %status, %message, "connection status changed");
    state.set_status(status, message.clone());
    SessionAction::UpdateStatus { status, message }
}

//! Server message relay.

use parlor_proto::payloads::session::ServerMessage;

use crate::{Dispatch, SessionAction, SessionState};

/// Forward a server broadcast, verbatim, to the message log.
pub(crate) fn on_server_message(state: &mut SessionState, event: ServerMessage) -> Dispatch {
    let ServerMessage { message } = event;
    state.server_message(message.clone());
    Dispatch::applied(vec![SessionAction::ServerMessage { text: message }])
}

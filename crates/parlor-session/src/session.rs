//! Event dispatcher.
//!
//! The [`Session`] is the single entry point for server events. It resolves
//! the wire tag through the [`Registry`], decodes the body, and hands the
//! payload to the matching handler together with the owned state.

use parlor_proto::{Payload, RawEvent};

use crate::{
    Dispatch, IgnoreReason, Registry, SessionConfig, SessionError, SessionState, lifecycle, lists,
    presence, relay, rooms,
};

/// Session dispatcher.
///
/// Pure state machine that consumes events and produces actions. Exactly one
/// event is handled per call, and every call runs to completion before
/// returning, so events apply strictly in the order they are fed in.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    registry: Registry,
    state: SessionState,
}

impl Session {
    /// Create a disconnected session.
    pub fn new(config: SessionConfig) -> Self {
        Self { config, registry: Registry::standard(), state: SessionState::new() }
    }

    /// Route a raw event by tag.
    ///
    /// Unregistered tags are dropped with [`IgnoreReason::UnknownTag`]. A
    /// registered tag whose body does not decode is rejected whole: no
    /// handler runs and state is unchanged.
    ///
    /// # Errors
    ///
    /// - `SessionError::Rejected` if the body does not decode as the tag's
    ///   payload type
    pub fn dispatch(&mut self, tag: &str, body: &[u8]) -> Result<Dispatch, SessionError> {
        let Some(event_tag) = self.registry.lookup(tag) else {
            tracing::debug!(%tag, "dropping unregistered event");
            return Ok(Dispatch::ignored(IgnoreReason::UnknownTag(tag.to_string())));
        };

        let payload = Payload::decode(event_tag, body)
            .map_err(|source| SessionError::Rejected { tag: event_tag, source })?;

        Ok(self.handle(payload))
    }

    /// Route a [`RawEvent`] by tag. See [`Session::dispatch`].
    ///
    /// # Errors
    ///
    /// - `SessionError::Rejected` if the body does not decode
    pub fn dispatch_event(&mut self, event: &RawEvent) -> Result<Dispatch, SessionError> {
        self.dispatch(&event.tag, &event.body)
    }

    /// Apply an already decoded payload.
    pub fn handle(&mut self, payload: Payload) -> Dispatch {
        let tag = payload.tag();
        tracing::debug!(%tag, "dispatching event");

        match payload {
            Payload::ServerIdentification(info) => {
                lifecycle::on_server_identification(&mut self.state, &self.config, info)
            },
            Payload::ConnectionClosed(closed) => {
                lifecycle::on_connection_closed(&mut self.state, &closed)
            },
            Payload::AddToList(event) => lists::add_to_list(&mut self.state, event),
            Payload::RemoveFromList(event) => lists::remove_from_list(&mut self.state, event),
            Payload::ListRooms(event) => rooms::on_room_list_push(&mut self.state, &self.config, event),
            Payload::UserJoined(event) => presence::on_user_joined(&mut self.state, event),
            Payload::UserLeft(event) => presence::on_user_left(&mut self.state, &event),
            Payload::ServerMessage(event) => relay::on_server_message(&mut self.state, event),

            // Registered, deliberately not interpreted
            Payload::NotifyUser(_)
            | Payload::PlayerPropertiesChanges(_)
            | Payload::ServerShutdown(_)
            | Payload::UserMessage(_) => Dispatch::ignored(IgnoreReason::Unhandled(tag)),
        }
    }

    /// Report that the server accepted the login command.
    ///
    /// Moves `LoggingIn` to `Connected`. In any other status the
    /// notification is stale and ignored.
    pub fn login_succeeded(&mut self) -> Dispatch {
        lifecycle::login_succeeded(&mut self.state)
    }

    /// Report that the server rejected the login command.
    ///
    /// Moves `LoggingIn` to `Disconnected` with `message` and issues a
    /// disconnect. Ignored in any other status.
    pub fn login_failed(&mut self, message: impl Into<String>) -> Dispatch {
        lifecycle::login_failed(&mut self.state, message.into())
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Tag registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

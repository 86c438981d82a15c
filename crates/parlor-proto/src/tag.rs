//! Stable event type tags.

use std::fmt;

/// Semantic type of a server-pushed session event.
///
/// The set is closed: every tag the client understands is listed here, and
/// each one selects exactly one [`crate::Payload`] variant. Tags outside this
/// set are not errors at the dispatch layer; they are dropped so that newer
/// servers can push events older clients do not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventTag {
    /// A user was added to one of the client's named lists.
    AddToList,
    /// The server closed the connection.
    ConnectionClosed,
    /// Full room directory push.
    ListRooms,
    /// Server notification addressed to this user.
    NotifyUser,
    /// Player property change broadcast.
    PlayerPropertiesChanges,
    /// A user was removed from one of the client's named lists.
    RemoveFromList,
    /// First event of a connection: server name, version, protocol version.
    ServerIdentification,
    /// Server-wide broadcast text.
    ServerMessage,
    /// Scheduled shutdown announcement.
    ServerShutdown,
    /// A user came online.
    UserJoined,
    /// A user went offline.
    UserLeft,
    /// Private message from another user.
    UserMessage,
}

impl EventTag {
    /// Every registered tag, in wire-name order.
    pub const ALL: [Self; 12] = [
        Self::AddToList,
        Self::ConnectionClosed,
        Self::ListRooms,
        Self::NotifyUser,
        Self::PlayerPropertiesChanges,
        Self::RemoveFromList,
        Self::ServerIdentification,
        Self::ServerMessage,
        Self::ServerShutdown,
        Self::UserJoined,
        Self::UserLeft,
        Self::UserMessage,
    ];

    /// Identifier used on the wire for this tag.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::AddToList => ".Event_AddToList.ext",
            Self::ConnectionClosed => ".Event_ConnectionClosed.ext",
            Self::ListRooms => ".Event_ListRooms.ext",
            Self::NotifyUser => ".Event_NotifyUser.ext",
            Self::PlayerPropertiesChanges => ".Event_PlayerPropertiesChanges.ext",
            Self::RemoveFromList => ".Event_RemoveFromList.ext",
            Self::ServerIdentification => ".Event_ServerIdentification.ext",
            Self::ServerMessage => ".Event_ServerMessage.ext",
            Self::ServerShutdown => ".Event_ServerShutdown.ext",
            Self::UserJoined => ".Event_UserJoined.ext",
            Self::UserLeft => ".Event_UserLeft.ext",
            Self::UserMessage => ".Event_UserMessage.ext",
        }
    }

    /// Resolve a wire identifier. `None` if the tag is not registered.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.wire_name() == name)
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

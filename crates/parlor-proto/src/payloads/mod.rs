//! CBOR-encoded event bodies.
//!
//! The event tag travels next to the body (see [`crate::RawEvent`]), so only
//! the inner struct is serialized; there is no variant discriminator in the
//! CBOR. The tag alone decides which type the body is decoded as.
//!
//! # Invariants
//!
//! Each payload variant maps to exactly one [`EventTag`] (enforced by match
//! exhaustiveness), and decoding either yields a complete payload or an
//! error. There is no partially decoded state.

pub mod common;
pub mod session;

use bytes::{BufMut, BytesMut};
use serde::de::DeserializeOwned;

use crate::{
    EventTag, RawEvent,
    errors::{ProtocolError, Result},
};

/// Decoded body of a registered session event.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// User added to a named list
    AddToList(session::AddToList),
    /// Server closed the connection
    ConnectionClosed(session::ConnectionClosed),
    /// Room directory push
    ListRooms(session::ListRooms),
    /// Notification for this user (not interpreted)
    NotifyUser(session::Opaque),
    /// Player property changes (not interpreted)
    PlayerPropertiesChanges(session::Opaque),
    /// User removed from a named list
    RemoveFromList(session::RemoveFromList),
    /// Server identification
    ServerIdentification(session::ServerIdentification),
    /// Server broadcast
    ServerMessage(session::ServerMessage),
    /// Shutdown announcement (not interpreted)
    ServerShutdown(session::Opaque),
    /// User came online
    UserJoined(session::UserJoined),
    /// User went offline
    UserLeft(session::UserLeft),
    /// Private user message (not interpreted)
    UserMessage(session::Opaque),
}

impl Payload {
    /// Tag corresponding to this payload type.
    #[must_use]
    pub const fn tag(&self) -> EventTag {
        match self {
            Self::AddToList(_) => EventTag::AddToList,
            Self::ConnectionClosed(_) => EventTag::ConnectionClosed,
            Self::ListRooms(_) => EventTag::ListRooms,
            Self::NotifyUser(_) => EventTag::NotifyUser,
            Self::PlayerPropertiesChanges(_) => EventTag::PlayerPropertiesChanges,
            Self::RemoveFromList(_) => EventTag::RemoveFromList,
            Self::ServerIdentification(_) => EventTag::ServerIdentification,
            Self::ServerMessage(_) => EventTag::ServerMessage,
            Self::ServerShutdown(_) => EventTag::ServerShutdown,
            Self::UserJoined(_) => EventTag::UserJoined,
            Self::UserLeft(_) => EventTag::UserLeft,
            Self::UserMessage(_) => EventTag::UserMessage,
        }
    }

    /// Encode the body into `dst`.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    pub fn encode(&self, dst: &mut impl BufMut) -> Result<()> {
        let mut writer = dst.writer();

        match self {
            Self::AddToList(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::ConnectionClosed(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::ListRooms(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::RemoveFromList(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::ServerIdentification(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::ServerMessage(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::UserJoined(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::UserLeft(inner) => ciborium::ser::into_writer(inner, &mut writer),
            Self::NotifyUser(inner)
            | Self::PlayerPropertiesChanges(inner)
            | Self::ServerShutdown(inner)
            | Self::UserMessage(inner) => ciborium::ser::into_writer(inner, &mut writer),
        }
        .map_err(|e| ProtocolError::CborEncode(e.to_string()))
    }

    /// Decode a body as the payload type selected by `tag`.
    ///
    /// Fails closed: the size check runs before any parsing, and a body that
    /// does not match the tag's schema is rejected whole.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::PayloadTooLarge` if `bytes` exceeds
    ///   [`RawEvent::MAX_BODY_SIZE`]
    /// - `ProtocolError::CborDecode` if the body does not decode
    pub fn decode(tag: EventTag, bytes: &[u8]) -> Result<Self> {
        if bytes.len() > RawEvent::MAX_BODY_SIZE {
            return Err(ProtocolError::PayloadTooLarge {
                size: bytes.len(),
                max: RawEvent::MAX_BODY_SIZE,
            });
        }

        let payload = match tag {
            EventTag::AddToList => Self::AddToList(from_cbor(bytes)?),
            EventTag::ConnectionClosed => Self::ConnectionClosed(from_cbor(bytes)?),
            EventTag::ListRooms => Self::ListRooms(from_cbor(bytes)?),
            EventTag::NotifyUser => Self::NotifyUser(opaque(bytes)?),
            EventTag::PlayerPropertiesChanges => Self::PlayerPropertiesChanges(opaque(bytes)?),
            EventTag::RemoveFromList => Self::RemoveFromList(from_cbor(bytes)?),
            EventTag::ServerIdentification => Self::ServerIdentification(from_cbor(bytes)?),
            EventTag::ServerMessage => Self::ServerMessage(from_cbor(bytes)?),
            EventTag::ServerShutdown => Self::ServerShutdown(opaque(bytes)?),
            EventTag::UserJoined => Self::UserJoined(from_cbor(bytes)?),
            EventTag::UserLeft => Self::UserLeft(from_cbor(bytes)?),
            EventTag::UserMessage => Self::UserMessage(opaque(bytes)?),
        };

        Ok(payload)
    }

    /// Decode a raw event. Unregistered tags are an error at this layer.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::UnknownTag` if the tag is not registered
    /// - Any error from [`Payload::decode`]
    pub fn from_event(event: &RawEvent) -> Result<Self> {
        let tag = EventTag::from_wire(&event.tag)
            .ok_or_else(|| ProtocolError::UnknownTag(event.tag.clone()))?;
        Self::decode(tag, &event.body)
    }

    /// Encode into a raw event carrying this payload's wire tag.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    pub fn into_event(self) -> Result<RawEvent> {
        let mut body = BytesMut::new();
        self.encode(&mut body)?;
        Ok(RawEvent::new(self.tag().wire_name(), body.freeze()))
    }
}

/// Decode exactly one CBOR item spanning all of `bytes`.
pub(crate) fn from_cbor<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut cursor = bytes;
    let value = ciborium::de::from_reader(&mut cursor)
        .map_err(|e| ProtocolError::CborDecode(e.to_string()))?;

    if !cursor.is_empty() {
        return Err(ProtocolError::CborDecode("trailing bytes".into()));
    }
    Ok(value)
}

fn opaque(bytes: &[u8]) -> Result<session::Opaque> {
    if bytes.is_empty() {
        return Ok(session::Opaque::null());
    }
    from_cbor(bytes)
}

#[cfg(test)]
mod tests {
    use super::{
        common::{RoomInfo, UserInfo},
        session::{ConnectionClosed, ServerIdentification, UserLeft},
        *,
    };
    use crate::CloseReason;

    fn encoded(payload: &Payload) -> Vec<u8> {
        let mut buf = BytesMut::new();
        assert!(payload.encode(&mut buf).is_ok());
        buf.to_vec()
    }

    #[test]
    fn decodes_by_tag() {
        let payload = Payload::ServerIdentification(ServerIdentification {
            server_name: "Parlor Test".into(),
            server_version: "2.9.0".into(),
            protocol_version: 14,
        });
        let bytes = encoded(&payload);

        assert_eq!(Payload::decode(EventTag::ServerIdentification, &bytes), Ok(payload));
    }

    #[test]
    fn wrong_tag_fails_closed() {
        let bytes = encoded(&Payload::UserLeft(UserLeft { name: "alice".into() }));

        let result = Payload::decode(EventTag::ServerIdentification, &bytes);
        assert!(matches!(result, Err(ProtocolError::CborDecode(_))));
    }

    #[test]
    fn truncated_body_fails_closed() {
        let payload = Payload::ListRooms(session::ListRooms {
            room_list: vec![RoomInfo::new(1, "Lobby"), RoomInfo::new(2, "Vintage")],
        });
        let bytes = encoded(&payload);

        let result = Payload::decode(EventTag::ListRooms, &bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(ProtocolError::CborDecode(_))));
    }

    #[test]
    fn trailing_bytes_fail_closed() {
        let mut bytes = encoded(&Payload::UserLeft(UserLeft { name: "bob".into() }));
        bytes.extend_from_slice(&[0xff, 0xde, 0xad]);

        let result = Payload::decode(EventTag::UserLeft, &bytes);
        assert_eq!(result, Err(ProtocolError::CborDecode("trailing bytes".into())));
    }

    #[test]
    fn second_item_after_opaque_body_fails_closed() {
        // Two CBOR nulls: a complete item followed by another
        let result = Payload::decode(EventTag::NotifyUser, &[0xf6, 0xf6]);
        assert!(matches!(result, Err(ProtocolError::CborDecode(_))));
    }

    #[test]
    fn missing_protocol_version_reads_as_zero() {
        // {"serverName": "srv", "serverVersion": "1.0"}
        let mut bytes = vec![0xa2, 0x6a];
        bytes.extend_from_slice(b"serverName");
        bytes.push(0x63);
        bytes.extend_from_slice(b"srv");
        bytes.push(0x6d);
        bytes.extend_from_slice(b"serverVersion");
        bytes.push(0x63);
        bytes.extend_from_slice(b"1.0");

        let result = Payload::decode(EventTag::ServerIdentification, &bytes);
        assert_eq!(
            result,
            Ok(Payload::ServerIdentification(ServerIdentification {
                server_name: "srv".into(),
                server_version: "1.0".into(),
                protocol_version: 0,
            }))
        );
    }

    #[test]
    fn oversized_body_rejected_before_parsing() {
        let bytes = vec![0u8; RawEvent::MAX_BODY_SIZE + 1];

        let result = Payload::decode(EventTag::ServerMessage, &bytes);
        assert!(matches!(result, Err(ProtocolError::PayloadTooLarge { .. })));
    }

    #[test]
    fn optional_fields_default() {
        let bytes = encoded(&Payload::ConnectionClosed(ConnectionClosed::default()));

        let Ok(Payload::ConnectionClosed(closed)) =
            Payload::decode(EventTag::ConnectionClosed, &bytes)
        else {
            panic!("expected ConnectionClosed");
        };
        assert_eq!(closed.reason, None);
        assert_eq!(closed.reason_str, None);
    }

    #[test]
    fn close_reason_decodes_code() {
        let closed = ConnectionClosed::with_reason(CloseReason::Banned);
        assert_eq!(closed.close_reason(), Some(CloseReason::Banned));

        let unknown = ConnectionClosed { reason: Some(42), ..ConnectionClosed::default() };
        assert_eq!(unknown.close_reason(), None);
    }

    #[test]
    fn opaque_accepts_empty_body() {
        assert_eq!(
            Payload::decode(EventTag::ServerShutdown, &[]),
            Ok(Payload::ServerShutdown(session::Opaque::null()))
        );
    }

    #[test]
    fn opaque_rejects_garbage() {
        // 0xff is a lone CBOR "break" byte, never valid at top level
        let result = Payload::decode(EventTag::UserMessage, &[0xff]);
        assert!(matches!(result, Err(ProtocolError::CborDecode(_))));
    }

    #[test]
    fn into_event_carries_wire_tag() {
        let payload = Payload::UserJoined(session::UserJoined { user_info: UserInfo::named("bob") });

        let Ok(event) = payload.clone().into_event() else {
            panic!("encode failed");
        };
        assert_eq!(event.tag, ".Event_UserJoined.ext");
        assert_eq!(Payload::from_event(&event), Ok(payload));
    }

    #[test]
    fn from_event_rejects_unregistered_tag() {
        let event = RawEvent::new(".Event_GameStateChanged.ext", Vec::new());

        let result = Payload::from_event(&event);
        assert_eq!(result, Err(ProtocolError::UnknownTag(".Event_GameStateChanged.ext".into())));
    }
}

//! Built-in sample transcript.

use parlor_proto::{
    CloseReason, Payload, ProtocolError, Transcript,
    payloads::{
        common::{RoomInfo, UserInfo},
        session::{
            AddToList, ConnectionClosed, ListRooms, ServerIdentification, ServerMessage,
            UserJoined, UserLeft,
        },
    },
};

/// A short session against a server speaking `protocol_version`: identify,
/// receive the directory, lists and presence, then get shut down.
///
/// # Errors
///
/// - `ProtocolError::CborEncode` if a payload fails to encode
pub fn sample_transcript(protocol_version: u32) -> Result<Transcript, ProtocolError> {
    let payloads = [
        Payload::ServerIdentification(ServerIdentification {
            server_name: "Parlor Sample".into(),
            server_version: "2.9.0".into(),
            protocol_version,
        }),
        Payload::ServerMessage(ServerMessage { message: "Welcome to the sample server".into() }),
        Payload::ListRooms(ListRooms {
            room_list: vec![
                RoomInfo::new(1, "Lobby").with_auto_join(true),
                RoomInfo::new(2, "Vintage"),
                RoomInfo::new(3, "Casual").with_auto_join(true),
            ],
        }),
        Payload::AddToList(AddToList {
            list_name: "buddy".into(),
            user_info: UserInfo::named("alice"),
        }),
        Payload::AddToList(AddToList {
            list_name: "ignore".into(),
            user_info: UserInfo::named("mallory"),
        }),
        Payload::UserJoined(UserJoined { user_info: UserInfo::named("alice") }),
        Payload::UserJoined(UserJoined { user_info: UserInfo::named("bob") }),
        Payload::UserLeft(UserLeft { name: "bob".into() }),
        Payload::ConnectionClosed(ConnectionClosed::with_reason(CloseReason::ServerShutdown)),
    ];

    payloads.into_iter().map(Payload::into_event).collect()
}

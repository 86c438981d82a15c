//! Property-based tests for event body decoding.
//!
//! The decoder sits on untrusted input, so these tests feed it arbitrary
//! bytes and check that it either yields a payload of the requested type or
//! rejects the body, never anything in between.

use bytes::BytesMut;
use parlor_proto::{
    EventTag, Payload, RawEvent,
    payloads::{common::RoomInfo, session::ListRooms},
};
use proptest::prelude::*;

/// Strategy for generating registered tags
fn arbitrary_tag() -> impl Strategy<Value = EventTag> {
    prop::sample::select(EventTag::ALL.to_vec())
}

/// Strategy for generating directory entries
fn arbitrary_room() -> impl Strategy<Value = RoomInfo> {
    (any::<u32>(), "[a-zA-Z ]{0,16}", any::<bool>(), 0u32..500)
        .prop_map(|(id, name, auto_join, players)| {
            let mut room = RoomInfo::new(id, name).with_auto_join(auto_join);
            room.player_count = players;
            room
        })
}

proptest! {
    #[test]
    fn decode_never_yields_wrong_variant(
        tag in arbitrary_tag(),
        body in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        if let Ok(payload) = Payload::decode(tag, &body) {
            prop_assert_eq!(payload.tag(), tag);
        }
    }

    #[test]
    fn room_list_order_survives_the_wire(rooms in prop::collection::vec(arbitrary_room(), 0..20)) {
        let payload = Payload::ListRooms(ListRooms { room_list: rooms.clone() });
        let mut body = BytesMut::new();
        prop_assert!(payload.encode(&mut body).is_ok());

        let decoded = Payload::decode(EventTag::ListRooms, &body);
        let Ok(Payload::ListRooms(list)) = decoded else {
            return Err(TestCaseError::fail("room list did not decode"));
        };
        let ids: Vec<u32> = list.room_list.iter().map(|r| r.room_id).collect();
        let expected: Vec<u32> = rooms.iter().map(|r| r.room_id).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn unregistered_tags_never_decode(name in "\\.Event_[A-Za-z]{1,24}\\.ext") {
        prop_assume!(EventTag::from_wire(&name).is_none());

        let event = RawEvent::new(name, vec![0xa0]);
        prop_assert!(Payload::from_event(&event).is_err());
    }
}

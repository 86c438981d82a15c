//! Room directory updater.
//!
//! Every directory push replaces the known rooms wholesale; nothing from an
//! earlier push survives. With auto-join enabled, each room the server flags
//! produces a join command, in push order. The command is the only effect:
//! the room is not marked joined here, that arrives later as its own event.

use parlor_proto::payloads::session::ListRooms;

use crate::{Command, Dispatch, SessionAction, SessionConfig, SessionState};

pub(crate) fn on_room_list_push(
    state: &mut SessionState,
    config: &SessionConfig,
    event: ListRooms,
) -> Dispatch {
    let ListRooms { room_list } = event;

    let actions: Vec<SessionAction> = if config.auto_join_rooms {
        room_list
            .iter()
            .filter(|room| room.auto_join)
            .map(|room| SessionAction::Send(Command::JoinRoom { room_id: room.room_id }))
            .collect()
    } else {
        Vec::new()
    };

    tracing::debug!(rooms = room_list.len(), auto_join = actions.len(), "room directory replaced");
    state.update_rooms(room_list);

    Dispatch::applied(actions)
}

#[cfg(test)]
mod tests {
    use parlor_proto::payloads::common::RoomInfo;

    use super::*;

    fn push(rooms: Vec<RoomInfo>) -> ListRooms {
        ListRooms { room_list: rooms }
    }

    #[test]
    fn push_replaces_directory() {
        let mut state = SessionState::new();
        let config = SessionConfig::default();

        let _ = on_room_list_push(&mut state, &config, push(vec![
            RoomInfo::new(1, "Lobby"),
            RoomInfo::new(2, "Vintage"),
        ]));
        let _ = on_room_list_push(&mut state, &config, push(vec![RoomInfo::new(3, "Draft")]));

        let ids: Vec<u32> = state.room_directory().iter().map(|r| r.room_id).collect();
        assert_eq!(ids, vec![3]);
        assert!(state.room(1).is_none());
    }

    #[test]
    fn auto_join_follows_push_order() {
        let mut state = SessionState::new();
        let config = SessionConfig::default().with_auto_join_rooms(true);

        let dispatch = on_room_list_push(&mut state, &config, push(vec![
            RoomInfo::new(9, "Casual").with_auto_join(true),
            RoomInfo::new(4, "Legacy"),
            RoomInfo::new(2, "Lobby").with_auto_join(true),
        ]));

        assert_eq!(dispatch.commands(), vec![
            Command::JoinRoom { room_id: 9 },
            Command::JoinRoom { room_id: 2 }
        ]);
    }

    #[test]
    fn auto_join_disabled_sends_nothing() {
        let mut state = SessionState::new();
        let config = SessionConfig::default().with_auto_join_rooms(false);

        let dispatch = on_room_list_push(&mut state, &config, push(vec![
            RoomInfo::new(1, "Lobby").with_auto_join(true),
        ]));

        assert!(dispatch.actions.is_empty());
        assert_eq!(state.room_directory().len(), 1);
    }

    #[test]
    fn empty_push_clears_directory() {
        let mut state = SessionState::new();
        let config = SessionConfig::default();
        let _ = on_room_list_push(&mut state, &config, push(vec![RoomInfo::new(1, "Lobby")]));

        let dispatch = on_room_list_push(&mut state, &config, push(Vec::new()));

        assert!(dispatch.is_applied());
        assert!(state.room_directory().is_empty());
    }
}

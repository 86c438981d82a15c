//! Observable session state.
//!
//! [`SessionState`] is the client's view of the session as reconstructed from
//! server events. Read access is public; every mutator is crate-private so
//! that only handlers change it, and the connection status can only be moved
//! by the lifecycle controller.

use std::{collections::HashMap, fmt};

use parlor_proto::payloads::common::{RoomInfo, UserInfo};

/// Connection status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    /// No session. Initial status, and the status after any closure.
    #[default]
    Disconnected,
    /// Server identified with a compatible protocol; login in flight.
    LoggingIn,
    /// Login accepted.
    Connected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::LoggingIn => "logging in",
            Self::Connected => "connected",
        };
        f.write_str(name)
    }
}

/// Name and version the server announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdentity {
    /// Server name.
    pub name: String,
    /// Server software version.
    pub version: String,
}

/// Set of users keyed by name.
///
/// Inserting a name that is already present replaces its profile; removing
/// an absent name does nothing. Duplicates never accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSet {
    users: HashMap<String, UserInfo>,
}

impl UserSet {
    /// Insert or overwrite by name. Returns `true` if the name was new.
    pub(crate) fn insert(&mut self, user: UserInfo) -> bool {
        self.users.insert(user.name.clone(), user).is_none()
    }

    /// Remove by name. Returns `true` if the name was present.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        self.users.remove(name).is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.users.clear();
    }

    /// Check if a user with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    /// Profile for a name. `None` if absent.
    pub fn get(&self, name: &str) -> Option<&UserInfo> {
        self.users.get(name)
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &UserInfo> {
        self.users.values()
    }

    /// Names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Client view of one connection attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Written only by the lifecycle controller.
    status: ConnectionStatus,
    /// Last message sent to the status sink. `None` before the first change.
    status_message: Option<String>,
    server_identity: Option<ServerIdentity>,
    buddy_list: UserSet,
    ignore_list: UserSet,
    /// Latest directory push, in server order.
    room_directory: Vec<RoomInfo>,
    online_users: UserSet,
    /// Server broadcasts received this connection, oldest first.
    server_messages: Vec<String>,
}

impl SessionState {
    /// Fresh state: disconnected and empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current connection status.
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Last status message. `None` if the status never changed.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Identity of the connected server. `None` before identification.
    pub fn server_identity(&self) -> Option<&ServerIdentity> {
        self.server_identity.as_ref()
    }

    /// Buddy list.
    pub fn buddy_list(&self) -> &UserSet {
        &self.buddy_list
    }

    /// Ignore list.
    pub fn ignore_list(&self) -> &UserSet {
        &self.ignore_list
    }

    /// Rooms from the latest directory push.
    pub fn room_directory(&self) -> &[RoomInfo] {
        &self.room_directory
    }

    /// Room by id. `None` if not in the directory.
    pub fn room(&self, room_id: u32) -> Option<&RoomInfo> {
        self.room_directory.iter().find(|r| r.room_id == room_id)
    }

    /// Users currently online.
    pub fn online_users(&self) -> &UserSet {
        &self.online_users
    }

    /// Server broadcasts received this connection.
    pub fn server_messages(&self) -> &[String] {
        &self.server_messages
    }

    pub(crate) fn set_status(&mut self, status: ConnectionStatus, message: String) {
        self.status = status;
        self.status_message = Some(message);
    }

    /// Drop everything learned from a previous connection. Status is left to
    /// the caller.
    pub(crate) fn reset_connection(&mut self) {
        self.server_identity = None;
        self.buddy_list.clear();
        self.ignore_list.clear();
        self.room_directory.clear();
        self.online_users.clear();
        self.server_messages.clear();
    }

    pub(crate) fn update_info(&mut self, name: String, version: String) {
        self.server_identity = Some(ServerIdentity { name, version });
    }

    pub(crate) fn add_to_buddy_list(&mut self, user: UserInfo) -> bool {
        self.buddy_list.insert(user)
    }

    pub(crate) fn remove_from_buddy_list(&mut self, name: &str) -> bool {
        self.buddy_list.remove(name)
    }

    pub(crate) fn add_to_ignore_list(&mut self, user: UserInfo) -> bool {
        self.ignore_list.insert(user)
    }

    pub(crate) fn remove_from_ignore_list(&mut self, name: &str) -> bool {
        self.ignore_list.remove(name)
    }

    pub(crate) fn update_rooms(&mut self, rooms: Vec<RoomInfo>) {
        self.room_directory = rooms;
    }

    pub(crate) fn server_message(&mut self, text: String) {
        self.server_messages.push(text);
    }

    pub(crate) fn user_joined(&mut self, user: UserInfo) -> bool {
        self.online_users.insert(user)
    }

    pub(crate) fn user_left(&mut self, name: &str) -> bool {
        self.online_users.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_set_overwrites_by_name() {
        let mut set = UserSet::default();
        assert!(set.insert(UserInfo::named("alice")));

        let mut updated = UserInfo::named("alice");
        updated.country = Some("se".into());
        assert!(!set.insert(updated));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("alice").and_then(|u| u.country.as_deref()), Some("se"));
    }

    #[test]
    fn user_set_remove_absent_is_noop() {
        let mut set = UserSet::default();
        set.insert(UserInfo::named("alice"));

        assert!(!set.remove("bob"));
        assert_eq!(set.names(), vec!["alice"]);
    }

    #[test]
    fn reset_keeps_status() {
        let mut state = SessionState::new();
        state.set_status(ConnectionStatus::LoggingIn, "Logging in...".into());
        state.update_info("srv".into(), "1.0".into());
        state.add_to_buddy_list(UserInfo::named("alice"));
        state.update_rooms(vec![RoomInfo::new(1, "Lobby")]);
        state.server_message("hello".into());

        state.reset_connection();

        assert_eq!(state.status(), ConnectionStatus::LoggingIn);
        assert_eq!(state.server_identity(), None);
        assert!(state.buddy_list().is_empty());
        assert!(state.room_directory().is_empty());
        assert!(state.server_messages().is_empty());
    }
}

//! List reconciler.
//!
//! Applies add/remove events to the client's named user lists. Only the
//! buddy and ignore lists exist; an event naming any other list is logged
//! and dropped without touching state.

use std::fmt;

use parlor_proto::payloads::session::{AddToList, RemoveFromList};

use crate::{Dispatch, IgnoreReason, SessionState};

/// Named user list kept by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    /// Friends.
    Buddy,
    /// Users whose messages are hidden.
    Ignore,
}

impl ListName {
    /// Resolve a wire list name. `None` for lists the client does not keep.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "buddy" => Some(Self::Buddy),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    /// Wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buddy => "buddy",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn add_to_list(state: &mut SessionState, event: AddToList) -> Dispatch {
    let AddToList { list_name, user_info } = event;

    let Some(list) = ListName::parse(&list_name) else {
        tracing::warn!(list = %list_name, user = %user_info.name, "add to unknown list");
        return Dispatch::ignored(IgnoreReason::UnknownList(list_name));
    };

    let user = user_info.name.clone();
    let added = match list {
        ListName::Buddy => state.add_to_buddy_list(user_info),
        ListName::Ignore => state.add_to_ignore_list(user_info),
    };
    tracing::debug!(%list, %user, added, "list add");

    Dispatch::applied(Vec::new())
}

pub(crate) fn remove_from_list(state: &mut SessionState, event: RemoveFromList) -> Dispatch {
    let RemoveFromList { list_name, user_name } = event;

    let Some(list) = ListName::parse(&list_name) else {
        tracing::warn!(list = %list_name, user = %user_name, "remove from unknown list");
        return Dispatch::ignored(IgnoreReason::UnknownList(list_name));
    };

    let removed = match list {
        ListName::Buddy => state.remove_from_buddy_list(&user_name),
        ListName::Ignore => state.remove_from_ignore_list(&user_name),
    };
    tracing::debug!(%list, user = %user_name, removed, "list remove");

    Dispatch::applied(Vec::new())
}

#[cfg(test)]
mod tests {
    use parlor_proto::payloads::common::UserInfo;

    use super::*;

    fn add(list: &str, name: &str) -> AddToList {
        AddToList { list_name: list.into(), user_info: UserInfo::named(name) }
    }

    fn remove(list: &str, name: &str) -> RemoveFromList {
        RemoveFromList { list_name: list.into(), user_name: name.into() }
    }

    #[test]
    fn lists_are_independent() {
        let mut state = SessionState::new();

        let _ = add_to_list(&mut state, add("buddy", "alice"));
        let _ = add_to_list(&mut state, add("ignore", "mallory"));

        assert!(state.buddy_list().contains("alice"));
        assert!(!state.buddy_list().contains("mallory"));
        assert!(state.ignore_list().contains("mallory"));
        assert!(!state.ignore_list().contains("alice"));
    }

    #[test]
    fn remove_only_touches_named_list() {
        let mut state = SessionState::new();
        let _ = add_to_list(&mut state, add("buddy", "alice"));
        let _ = add_to_list(&mut state, add("ignore", "alice"));

        let _ = remove_from_list(&mut state, remove("ignore", "alice"));

        assert!(state.buddy_list().contains("alice"));
        assert!(state.ignore_list().is_empty());
    }

    #[test]
    fn unknown_list_is_ignored() {
        let mut state = SessionState::new();

        let dispatch = add_to_list(&mut state, add("favourites", "alice"));

        assert_eq!(dispatch.ignore_reason(), Some(&IgnoreReason::UnknownList("favourites".into())));
        assert_eq!(state, SessionState::new());
    }

    #[test]
    fn list_names_are_case_sensitive() {
        assert_eq!(ListName::parse("buddy"), Some(ListName::Buddy));
        assert_eq!(ListName::parse("Buddy"), None);
        assert_eq!(ListName::parse("IGNORE"), None);
    }

    #[test]
    fn removing_absent_user_is_applied() {
        let mut state = SessionState::new();

        let dispatch = remove_from_list(&mut state, remove("buddy", "ghost"));

        assert!(dispatch.is_applied());
        assert!(dispatch.actions.is_empty());
    }
}

//! Presence updater.

use parlor_proto::payloads::session::{UserJoined, UserLeft};

use crate::{Dispatch, SessionState};

/// Insert or overwrite the user's entry.
pub(crate) fn on_user_joined(state: &mut SessionState, event: UserJoined) -> Dispatch {
    let name = event.user_info.name.clone();
    let new = state.user_joined(event.user_info);
    tracing::debug!(user = %name, new, "user online");
    Dispatch::applied(Vec::new())
}

/// Remove the user's entry. Absent users are a no-op.
pub(crate) fn on_user_left(state: &mut SessionState, event: &UserLeft) -> Dispatch {
    let removed = state.user_left(&event.name);
    tracing::debug!(user = %event.name, removed, "user offline");
    Dispatch::applied(Vec::new())
}

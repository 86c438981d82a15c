//! Records shared by several session payloads.

use serde::{Deserialize, Serialize};

/// Public profile of a user as the server describes it.
///
/// `name` is the stable identifier: list membership and presence are keyed
/// by it, and removal events carry only the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Login name, unique per server.
    pub name: String,

    /// Server-assigned privilege bit flags.
    #[serde(default)]
    pub user_level: u32,

    /// Display name chosen by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,

    /// ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Named privilege tier (e.g. "VIP").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privlevel: Option<String>,

    /// Account age in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_age_secs: Option<u64>,
}

impl UserInfo {
    /// User with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_level: 0,
            real_name: None,
            country: None,
            privlevel: None,
            account_age_secs: None,
        }
    }
}

/// Entry of the server's room directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    /// Server-assigned room identifier.
    pub room_id: u32,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Number of open games.
    #[serde(default)]
    pub game_count: u32,

    /// Number of users present.
    #[serde(default)]
    pub player_count: u32,

    /// Server recommends joining this room on login.
    #[serde(default)]
    pub auto_join: bool,

    /// Minimum permission needed to enter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_level: Option<String>,
}

impl RoomInfo {
    /// Room with the given id and name and no other details.
    pub fn new(room_id: u32, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
            description: String::new(),
            game_count: 0,
            player_count: 0,
            auto_join: false,
            permission_level: None,
        }
    }

    /// Set the auto-join flag.
    #[must_use]
    pub fn with_auto_join(mut self, auto_join: bool) -> Self {
        self.auto_join = auto_join;
        self
    }
}

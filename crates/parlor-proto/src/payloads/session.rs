//! Session event payload types.
//!
//! One struct per registered event tag. Field names on the wire are
//! camelCase. Optional fields default when absent so that servers may omit
//! them; required fields missing from a body reject the whole event.

use serde::{Deserialize, Serialize};

use super::common::{RoomInfo, UserInfo};
use crate::CloseReason;

/// User added to a named list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToList {
    /// Target list ("buddy" or "ignore"; others are tolerated).
    pub list_name: String,
    /// User being added.
    pub user_info: UserInfo,
}

/// User removed from a named list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromList {
    /// Target list ("buddy" or "ignore"; others are tolerated).
    pub list_name: String,
    /// Name of the user being removed.
    pub user_name: String,
}

/// Server closed the connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionClosed {
    /// Server time of the closure, seconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Raw [`CloseReason`] code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<u32>,
    /// Free-text explanation. Takes precedence over `reason` when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_str: Option<String>,
}

impl ConnectionClosed {
    /// Closure with a known reason code and no free text.
    pub fn with_reason(reason: CloseReason) -> Self {
        Self { end_time: None, reason: Some(reason.code()), reason_str: None }
    }

    /// Decoded reason. `None` if absent or not a known code.
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.reason.and_then(CloseReason::from_code)
    }
}

/// Full room directory push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRooms {
    /// Rooms in server order.
    #[serde(default)]
    pub room_list: Vec<RoomInfo>,
}

/// First event on a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerIdentification {
    /// Server's advertised name.
    pub server_name: String,
    /// Server software version.
    pub server_version: String,
    /// Protocol version the server speaks. Reads as 0 when absent.
    #[serde(default)]
    pub protocol_version: u32,
}

/// Server-wide broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerMessage {
    /// Message text, relayed verbatim.
    pub message: String,
}

/// A user came online.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserJoined {
    /// Profile of the user.
    pub user_info: UserInfo,
}

/// A user went offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLeft {
    /// Name of the user.
    pub name: String,
}

/// Body of an event the client registers but does not interpret.
///
/// The body is still required to be well-formed CBOR; an empty body is
/// accepted and reads as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Opaque(pub ciborium::Value);

impl Opaque {
    /// Null body.
    pub fn null() -> Self {
        Self(ciborium::Value::Null)
    }
}

impl Default for Opaque {
    fn default() -> Self {
        Self::null()
    }
}

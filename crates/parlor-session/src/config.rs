//! Client-local session configuration.

/// Protocol version this client speaks.
pub const DEFAULT_PROTOCOL_VERSION: u32 = 14;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Protocol version the server must announce for the session to proceed
    pub protocol_version: u32,
    /// Join rooms the server flags as auto-join on every directory push
    pub auto_join_rooms: bool,
}

impl SessionConfig {
    /// Override the expected protocol version.
    #[must_use]
    pub fn with_protocol_version(mut self, protocol_version: u32) -> Self {
        self.protocol_version = protocol_version;
        self
    }

    /// Enable or disable auto-join.
    #[must_use]
    pub fn with_auto_join_rooms(mut self, auto_join_rooms: bool) -> Self {
        self.auto_join_rooms = auto_join_rooms;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { protocol_version: DEFAULT_PROTOCOL_VERSION, auto_join_rooms: true }
    }
}

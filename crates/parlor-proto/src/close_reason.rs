//! Connection close reasons.

/// Why the server closed the connection.
///
/// Carried on the wire as an integer code. Codes the client does not know
/// about have no variant; [`CloseReason::from_code`] returns `None` for them
/// and they are explained the same way as [`CloseReason::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Unspecified reason.
    Other,
    /// Scheduled server shutdown.
    ServerShutdown,
    /// Too many concurrent connections from the client's address.
    TooManyConnections,
    /// The account is banned.
    Banned,
    /// The requested user name was rejected.
    UsernameInvalid,
    /// The server is at capacity.
    UserLimitReached,
    /// The account lost its privileges.
    Demoted,
    /// The same account logged in from another location.
    LoggedInElsewhere,
}

impl CloseReason {
    /// Explanation used when no free-text reason accompanies the code.
    pub const UNKNOWN_MESSAGE: &'static str = "Unknown reason";

    /// Decode a wire code. `None` for codes outside the known set.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Other),
            2 => Some(Self::ServerShutdown),
            3 => Some(Self::TooManyConnections),
            4 => Some(Self::Banned),
            5 => Some(Self::UsernameInvalid),
            6 => Some(Self::UserLimitReached),
            7 => Some(Self::Demoted),
            8 => Some(Self::LoggedInElsewhere),
            _ => None,
        }
    }

    /// Wire code for this reason.
    pub const fn code(self) -> u32 {
        match self {
            Self::Other => 1,
            Self::ServerShutdown => 2,
            Self::TooManyConnections => 3,
            Self::Banned => 4,
            Self::UsernameInvalid => 5,
            Self::UserLimitReached => 6,
            Self::Demoted => 7,
            Self::LoggedInElsewhere => 8,
        }
    }

    /// Fixed human-readable explanation.
    pub const fn message(self) -> &'static str {
        match self {
            Self::UserLimitReached => "The server has reached its maximum user capacity",
            Self::TooManyConnections => {
                "There are too many concurrent connections from your address"
            },
            Self::Banned => "You are banned",
            Self::Demoted => "You were demoted",
            Self::ServerShutdown => "Scheduled server shutdown",
            Self::UsernameInvalid => "Invalid username",
            Self::LoggedInElsewhere => {
                "You have been logged out due to logging in at another location"
            },
            Self::Other => Self::UNKNOWN_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for code in 1..=8 {
            let reason = CloseReason::from_code(code);
            assert_eq!(reason.map(CloseReason::code), Some(code));
        }
    }

    #[test]
    fn unknown_codes_have_no_variant() {
        assert_eq!(CloseReason::from_code(0), None);
        assert_eq!(CloseReason::from_code(9), None);
        assert_eq!(CloseReason::from_code(u32::MAX), None);
    }

    #[test]
    fn other_reads_as_unknown() {
        assert_eq!(CloseReason::Other.message(), "Unknown reason");
    }
}

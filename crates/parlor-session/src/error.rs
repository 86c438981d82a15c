//! Session error types.

use parlor_proto::{EventTag, ProtocolError};
use thiserror::Error;

/// Errors returned by [`crate::Session::dispatch`].
///
/// Session-level failures (version mismatch, server closure) are not errors:
/// they are ordinary transitions reported through status actions. The only
/// error is a frame the decoder refused, in which case no handler ran and
/// state is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Event body did not decode as the payload its tag selects.
    #[error("rejected {tag} event: {source}")]
    Rejected {
        /// Tag of the rejected event
        tag: EventTag,
        /// Decoder failure
        source: ProtocolError,
    },
}

impl SessionError {
    /// Tag of the event that caused the error.
    pub fn tag(&self) -> EventTag {
        match self {
            Self::Rejected { tag, .. } => *tag,
        }
    }
}

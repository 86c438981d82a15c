//! Error types for the session protocol codec.

use thiserror::Error;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while encoding or decoding event bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Body exceeds [`crate::RawEvent::MAX_BODY_SIZE`].
    #[error("payload too large: {size} bytes exceeds maximum of {max}")]
    PayloadTooLarge {
        /// Size of the rejected body
        size: usize,
        /// Maximum permitted size
        max: usize,
    },

    /// Body is not valid CBOR for the tag's payload type.
    #[error("CBOR decode failed: {0}")]
    CborDecode(String),

    /// Payload could not be serialized.
    #[error("CBOR encode failed: {0}")]
    CborEncode(String),

    /// Tag is not part of the registered event set.
    #[error("unknown event tag: {0}")]
    UnknownTag(String),
}

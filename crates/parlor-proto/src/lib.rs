//! Parlor session protocol
//!
//! Wire-side types for the events a server pushes over a long-lived session:
//! the closed set of [`EventTag`]s, the schema-typed [`Payload`] bodies, and
//! the [`RawEvent`] envelope the transport hands to the decoder.
//!
//! Bodies are CBOR maps. Decoding is strict: a body that does not match the
//! payload type selected by its tag is rejected as a whole, so handlers never
//! observe partial data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod close_reason;
mod errors;
mod event;
pub mod payloads;
mod tag;

pub use close_reason::CloseReason;
pub use errors::{ProtocolError, Result};
pub use event::{RawEvent, Transcript};
pub use payloads::Payload;
pub use tag::EventTag;

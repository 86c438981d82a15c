//! Raw event envelope and recorded transcripts.
//!
//! A [`RawEvent`] is what the transport hands to the decode layer: the wire
//! tag and the still-encoded body. A [`Transcript`] is an ordered recording
//! of raw events, stored as a single CBOR array so a session can be replayed
//! offline in arrival order.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ProtocolError, Result},
    payloads::from_cbor,
};

/// Tagged, undecoded event as delivered by the transport.
///
/// # Invariants
///
/// - The tag is kept as a string, not an [`crate::EventTag`]: unregistered
///   tags must survive transport so the dispatcher can drop them explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Wire identifier of the event type.
    pub tag: String,
    /// CBOR-encoded body.
    pub body: Bytes,
}

impl RawEvent {
    /// Largest body accepted by the decoder (16 MiB).
    pub const MAX_BODY_SIZE: usize = 16 * 1024 * 1024;

    /// Create a raw event.
    pub fn new(tag: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self { tag: tag.into(), body: body.into() }
    }
}

/// Ordered recording of raw events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    events: Vec<RawEvent>,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: RawEvent) {
        self.events.push(event);
    }

    /// Recorded events in arrival order.
    pub fn events(&self) -> &[RawEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events are recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serialize to CBOR.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborEncode` if serialization fails
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::ser::into_writer(self, &mut buf)
            .map_err(|e| ProtocolError::CborEncode(e.to_string()))?;
        Ok(buf)
    }

    /// Parse a CBOR transcript.
    ///
    /// Only the envelopes are decoded here; event bodies stay raw until
    /// dispatch.
    ///
    /// # Errors
    ///
    /// - `ProtocolError::CborDecode` if the bytes are not a transcript, or
    ///   carry anything after it
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        from_cbor(bytes)
    }
}

impl FromIterator<RawEvent> for Transcript {
    fn from_iter<T: IntoIterator<Item = RawEvent>>(iter: T) -> Self {
        Self { events: iter.into_iter().collect() }
    }
}

impl IntoIterator for Transcript {
    type Item = RawEvent;
    type IntoIter = std::vec::IntoIter<RawEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

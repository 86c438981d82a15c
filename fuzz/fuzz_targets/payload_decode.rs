//! Fuzz target for Payload::decode
//!
//! Feeds arbitrary bytes to the decoder under every registered tag:
//! - Malformed CBOR data
//! - Type confusion (a body shaped for another event)
//! - Oversized strings or collections
//!
//! The fuzzer should NEVER panic. All invalid inputs should return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use parlor_proto::{EventTag, Payload};

fuzz_target!(|data: &[u8]| {
    for tag in EventTag::ALL {
        if let Ok(payload) = Payload::decode(tag, data) {
            // A decoded payload always answers to the tag it was read under
            assert_eq!(payload.tag(), tag);
        }
    }
});

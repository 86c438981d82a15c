//! Fuzz target for Session::dispatch
//!
//! Drives one session through an arbitrary sequence of events, login
//! answers, and CBOR attack bodies.
//!
//! # Invariants
//!
//! - NEVER panic on any tag or body
//! - Rejected frames leave the state untouched
//! - A session is only connected after a compatible identification

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parlor_proto::EventTag;
use parlor_session::{ConnectionStatus, Session, SessionConfig};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Registered { tag_index: u8, body: Vec<u8> },
    Unregistered { tag: String, body: Vec<u8> },
    Nested { tag_index: u8, depth: u8 },
    HugeLength { tag_index: u8, claimed_len_exponent: u8 },
    LoginAccepted,
    LoginRejected { message: String },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut session = Session::new(SessionConfig::default());

    for op in ops {
        let before = session.state().clone();

        let result = match op {
            Op::Registered { tag_index, body } => session.dispatch(wire_name(tag_index), &body),
            Op::Unregistered { tag, body } => session.dispatch(&tag, &body),
            Op::Nested { tag_index, depth } => {
                session.dispatch(wire_name(tag_index), &nested_cbor(usize::from(depth % 64)))
            },
            Op::HugeLength { tag_index, claimed_len_exponent } => {
                let exponent = u32::from(claimed_len_exponent % 32);
                session.dispatch(wire_name(tag_index), &huge_text(1u32 << exponent))
            },
            Op::LoginAccepted => Ok(session.login_succeeded()),
            Op::LoginRejected { message } => Ok(session.login_failed(message)),
        };

        if result.is_err() {
            assert_eq!(session.state(), &before);
        }

        if session.state().status() == ConnectionStatus::Connected {
            let identity = session.state().server_identity();
            assert!(identity.is_some());
        }
    }
});

fn wire_name(index: u8) -> &'static str {
    EventTag::ALL[usize::from(index) % EventTag::ALL.len()].wire_name()
}

fn nested_cbor(depth: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(depth * 3 + 1);
    for _ in 0..depth {
        bytes.extend_from_slice(&[0xA1, 0x61, b'a']);
    }
    bytes.push(0x01);
    bytes
}

fn huge_text(claimed_length: u32) -> Vec<u8> {
    let mut bytes = vec![0x7A];
    bytes.extend_from_slice(&claimed_length.to_be_bytes());
    bytes.extend(vec![b'x'; (claimed_length as usize).min(10)]);
    bytes
}

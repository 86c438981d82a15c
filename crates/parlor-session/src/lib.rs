//! Session
//!
//! Action-based event dispatcher and state reconciler for a Parlor client
//! session. The server pushes tagged events; the [`Session`] routes each one
//! to its handler by tag, applies it to the owned [`SessionState`], and
//! returns [`SessionAction`]s (outbound commands, status updates, relayed
//! messages) for the caller to execute.
//!
//! # Architecture
//!
//! Sans-IO: handlers never block and never touch the network. One event is
//! fully applied before the next is accepted, and every outbound effect is
//! described by an action rather than performed. Silent paths (unregistered
//! tags, unknown list names, events the client does not interpret) come back
//! as [`Outcome::Ignored`] so they can be asserted on.
//!
//! # Components
//!
//! - [`Registry`]: immutable wire-tag lookup table
//! - [`Session`]: dispatcher owning state and configuration
//! - [`SessionState`]: connection status, server identity, lists, rooms,
//!   presence
//! - [`Driver`] / [`Runtime`]: host loop executing actions against real I/O

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod config;
mod driver;
mod error;
mod lifecycle;
mod lists;
mod outcome;
mod presence;
mod registry;
mod relay;
mod rooms;
mod runtime;
mod session;
mod state;

pub use action::{Command, SessionAction};
pub use config::{DEFAULT_PROTOCOL_VERSION, SessionConfig};
pub use driver::{Driver, Inbound};
pub use error::SessionError;
pub use lifecycle::close_message;
pub use lists::ListName;
pub use outcome::{Dispatch, IgnoreReason, Outcome};
pub use parlor_proto::{EventTag, Payload, RawEvent};
pub use registry::Registry;
pub use runtime::Runtime;
pub use session::Session;
pub use state::{ConnectionStatus, ServerIdentity, SessionState, UserSet};

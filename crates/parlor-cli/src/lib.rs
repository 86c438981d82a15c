//! Transcript replay for the Parlor session dispatcher.
//!
//! Feeds a recorded [`Transcript`] through a [`Runtime`] with a driver that
//! logs every effect instead of talking to a server. Useful for reproducing
//! a session from a capture and checking the state it ends in.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod sample;

use std::path::Path;

pub use driver::{ReplayDriver, ReplayStats};
use parlor_proto::{ProtocolError, Transcript};
use parlor_session::{Runtime, Session, SessionConfig};
pub use sample::sample_transcript;
use thiserror::Error;

/// Errors raised by the replay tool.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Transcript file could not be read or written.
    #[error("transcript I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Transcript file is not a CBOR transcript.
    #[error("invalid transcript: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Load a transcript from disk.
///
/// # Errors
///
/// - `ReplayError::Io` if the file cannot be read
/// - `ReplayError::Protocol` if it does not decode
pub async fn load_transcript(path: &Path) -> Result<Transcript, ReplayError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(Transcript::decode(&bytes)?)
}

/// Write a transcript to disk.
///
/// # Errors
///
/// - `ReplayError::Protocol` if encoding fails
/// - `ReplayError::Io` if the file cannot be written
pub async fn save_transcript(path: &Path, transcript: &Transcript) -> Result<(), ReplayError> {
    let bytes = transcript.encode()?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Replay a transcript and return the final session with effect counts.
///
/// With `accept_login`, every login command is answered with an immediate
/// acceptance, standing in for the server's login response.
///
/// # Errors
///
/// Returns an error if the driver fails.
pub async fn replay(
    transcript: Transcript,
    config: SessionConfig,
    accept_login: bool,
) -> Result<(Session, ReplayStats), ReplayError> {
    let driver = ReplayDriver::new(transcript, accept_login);
    let mut runtime = Runtime::new(driver, config);

    runtime.run().await?;

    let (driver, session) = runtime.into_parts();
    Ok((session, driver.stats()))
}

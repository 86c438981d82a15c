//! Parlor replay binary.
//!
//! # Usage
//!
//! ```bash
//! # Write the built-in sample transcript
//! parlor sample session.cbor
//!
//! # Replay it, answering login commands with an acceptance
//! parlor replay session.cbor --accept-login
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parlor_cli::{load_transcript, replay, sample_transcript, save_transcript};
use parlor_session::{DEFAULT_PROTOCOL_VERSION, SessionConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Parlor session transcript tool
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Replay recorded session events through the Parlor dispatcher")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Replay a CBOR transcript
    Replay {
        /// Transcript file
        path: PathBuf,

        /// Protocol version this client speaks
        #[arg(long, default_value_t = DEFAULT_PROTOCOL_VERSION)]
        protocol_version: u32,

        /// Do not join rooms the server flags as auto-join
        #[arg(long)]
        no_auto_join: bool,

        /// Answer each login command with an acceptance
        #[arg(long)]
        accept_login: bool,
    },

    /// Write the built-in sample transcript
    Sample {
        /// Output file
        path: PathBuf,

        /// Protocol version the sample server announces
        #[arg(long, default_value_t = DEFAULT_PROTOCOL_VERSION)]
        protocol_version: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    match args.command {
        Mode::Replay { path, protocol_version, no_auto_join, accept_login } => {
            let transcript = load_transcript(&path).await?;
            tracing::info!(path = %path.display(), events = transcript.len(), "replaying transcript");

            let config = SessionConfig::default()
                .with_protocol_version(protocol_version)
                .with_auto_join_rooms(!no_auto_join);
            let (session, stats) = replay(transcript, config, accept_login).await?;

            let state = session.state();
            tracing::info!(
                status = %state.status(),
                message = state.status_message().unwrap_or_default(),
                rooms = state.room_directory().len(),
                buddies = state.buddy_list().len(),
                ignored = state.ignore_list().len(),
                online = state.online_users().len(),
                delivered = stats.delivered,
                commands = stats.commands,
                "replay finished"
            );
        },
        Mode::Sample { path, protocol_version } => {
            let transcript = sample_transcript(protocol_version)?;
            save_transcript(&path, &transcript).await?;
            tracing::info!(path = %path.display(), events = transcript.len(), "sample written");
        },
    }

    Ok(())
}

//! Logging driver for offline replay.

use std::collections::VecDeque;

use parlor_proto::Transcript;
use parlor_session::{Command, ConnectionStatus, Driver, Inbound};

use crate::ReplayError;

/// Effect counts collected during a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Inbound items delivered to the runtime.
    pub delivered: usize,
    /// Commands the session issued.
    pub commands: usize,
    /// Status changes reported.
    pub status_updates: usize,
    /// Server messages relayed.
    pub server_messages: usize,
}

/// Driver that replays a transcript and logs every effect.
#[derive(Debug)]
pub struct ReplayDriver {
    pending: VecDeque<Inbound>,
    accept_login: bool,
    stats: ReplayStats,
}

impl ReplayDriver {
    /// Driver over the events of `transcript`, in order.
    pub fn new(transcript: Transcript, accept_login: bool) -> Self {
        Self {
            pending: transcript.into_iter().map(Inbound::Event).collect(),
            accept_login,
            stats: ReplayStats::default(),
        }
    }

    /// Effect counts so far.
    pub fn stats(&self) -> ReplayStats {
        self.stats
    }
}

impl Driver for ReplayDriver {
    type Error = ReplayError;

    async fn next(&mut self) -> Result<Option<Inbound>, Self::Error> {
        let next = self.pending.pop_front();
        if next.is_some() {
            self.stats.delivered += 1;
        }
        Ok(next)
    }

    async fn send_command(&mut self, command: Command) -> Result<(), Self::Error> {
        self.stats.commands += 1;
        tracing::info!(?command, "command");

        // The acceptance is what the server would answer next
        if self.accept_login && command == Command::Login {
            self.pending.push_front(Inbound::LoginAccepted);
        }
        Ok(())
    }

    fn update_status(&mut self, status: ConnectionStatus, message: &str) -> Result<(), Self::Error> {
        self.stats.status_updates += 1;
        tracing::info!(%status, %message, "status");
        Ok(())
    }

    fn server_message(&mut self, text: &str) -> Result<(), Self::Error> {
        self.stats.server_messages += 1;
        tracing::info!(%text, "server message");
        Ok(())
    }
}

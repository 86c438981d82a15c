//! Generic runtime for session orchestration.
//!
//! The Runtime drives the dispatch loop, coordinating between:
//! - [`Session`]: event dispatcher and state
//! - [`Driver`]: platform-specific I/O

use crate::{Dispatch, Driver, Inbound, Session, SessionAction, SessionConfig};

/// Generic runtime that feeds a [`Session`] from a [`Driver`].
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    session: Session,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and configuration.
    pub fn new(driver: D, config: SessionConfig) -> Self {
        Self { driver, session: Session::new(config) }
    }

    /// Run until the driver is exhausted.
    ///
    /// Each cycle:
    /// 1. Pulls one inbound item from the driver
    /// 2. Dispatches it through the session
    /// 3. Executes the resulting actions, in order, before the next pull
    ///
    /// Frames the decoder rejects are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        while let Some(inbound) = self.driver.next().await? {
            let Some(dispatch) = self.process(inbound) else {
                continue;
            };
            self.execute(dispatch.actions).await?;
        }

        Ok(())
    }

    /// Dispatch one inbound item. `None` if the frame was rejected.
    fn process(&mut self, inbound: Inbound) -> Option<Dispatch> {
        match inbound {
            Inbound::Event(event) => match self.session.dispatch_event(&event) {
                Ok(dispatch) => Some(dispatch),
                Err(e) => {
                    tracing::warn!(error = %e, "rejected frame");
                    None
                },
            },
            Inbound::LoginAccepted => Some(self.session.login_succeeded()),
            Inbound::LoginRejected { message } => Some(self.session.login_failed(message)),
        }
    }

    /// Execute session actions against the driver.
    async fn execute(&mut self, actions: Vec<SessionAction>) -> Result<(), D::Error> {
        for action in actions {
            match action {
                SessionAction::Send(command) => self.driver.send_command(command).await?,
                SessionAction::UpdateStatus { status, message } => {
                    self.driver.update_status(status, &message)?;
                },
                SessionAction::ServerMessage { text } => self.driver.server_message(&text)?,
            }
        }
        Ok(())
    }

    /// Get a reference to the Session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Split into the driver and the final session.
    pub fn into_parts(self) -> (D, Session) {
        (self.driver, self.session)
    }
}

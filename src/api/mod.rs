//! API client module for the remote time tracker.
//!
//! Exposes the TrackingTime-style client together with a common [`Session`]
//! trait for authentication. Session tokens live in memory for the life of
//! the invocation only; nothing is written to disk.

use crate::libs::credentials::Credentials;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use thiserror::Error;

pub mod tracking_time;

pub use tracking_time::{TrackerConfig, TrackingTime};

/// Maximum number of authentication attempts before giving up.
const MAX_RETRY_COUNT: i32 = 3;

/// Errors surfaced by the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service rejected the supplied credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The service rejected one submitted entry.
    #[error("submission rejected: {0}")]
    Submission(String),

    /// The service answered with an unexpected status or payload.
    #[error("unexpected response from the service: {0}")]
    UnexpectedResponse(String),
}

/// Common session management for remote tracker clients.
///
/// `get_token` is the entry point: it returns the cached token or runs the
/// login flow. A failed login is re-prompted up to [`MAX_RETRY_COUNT`]
/// times, but only when the password came from an interactive prompt;
/// passwords from flags or the environment fail immediately.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Validates the installed credentials and returns a session token.
    async fn login(&self) -> Result<String>;

    /// Installs credentials for subsequent login attempts.
    fn set_credentials(&mut self, credentials: &Credentials);

    /// Returns the in-memory session token, if one was established.
    fn token(&self) -> Option<String>;

    /// Caches a session token in memory.
    fn store_token(&mut self, token: String);

    /// Returns the current login attempt count.
    fn retry(&self) -> i32;

    /// Increments the login attempt count.
    fn inc_retry(&mut self);

    /// Retrieves or establishes a session token.
    async fn get_token(&mut self, credentials: &mut Credentials) -> Result<String> {
        if let Some(token) = self.token() {
            return Ok(token);
        }

        loop {
            self.set_credentials(credentials);
            match self.login().await {
                Ok(token) => {
                    self.store_token(token.clone());
                    return Ok(token);
                }
                Err(err) => {
                    if !credentials.interactive {
                        return Err(err);
                    }
                    msg_debug!(format!("Login attempt failed: {}", err));
                    self.inc_retry();
                    if self.retry() >= MAX_RETRY_COUNT {
                        return Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                    }
                    credentials.reprompt()?;
                }
            }
        }
    }
}

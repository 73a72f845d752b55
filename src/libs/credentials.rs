//! Credential resolution for commands that talk to the remote tracker.
//!
//! Credentials are supplied per invocation, in this order of precedence:
//! `--username`/`--password` flags, the `TRACKSHEET_USERNAME` and
//! `TRACKSHEET_PASSWORD` environment variables (a `.env` file is honored),
//! then the configured username with an interactive password prompt.
//! Passwords are never stored.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Password};

pub const USERNAME_ENV: &str = "TRACKSHEET_USERNAME";
pub const PASSWORD_ENV: &str = "TRACKSHEET_PASSWORD";

/// Shared credential flags for the remote commands.
#[derive(Debug, Default, Args)]
pub struct CredentialArgs {
    #[arg(long, help = "Tracker username (email)")]
    pub username: Option<String>,

    #[arg(long, help = "Tracker password")]
    pub password: Option<String>,
}

/// A resolved username/password pair.
///
/// `interactive` records whether the password came from a prompt; only
/// prompted passwords may be asked for again after a failed login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub interactive: bool,
}

impl CredentialArgs {
    /// Resolves credentials from flags, environment and configuration.
    pub fn resolve(&self, config: &Config) -> Result<Credentials> {
        let username = self
            .username
            .clone()
            .or_else(|| std::env::var(USERNAME_ENV).ok())
            .or_else(|| {
                config
                    .tracker
                    .as_ref()
                    .map(|tracker| tracker.username.clone())
                    .filter(|username| !username.is_empty())
            });
        let Some(username) = username else {
            crate::msg_bail_anyhow!(Message::MissingUsername);
        };

        if let Some(password) = self.password.clone().or_else(|| std::env::var(PASSWORD_ENV).ok()) {
            return Ok(Credentials {
                username,
                password,
                interactive: false,
            });
        }

        let password = prompt_password()?;
        Ok(Credentials {
            username,
            password,
            interactive: true,
        })
    }
}

impl Credentials {
    /// Asks for the password again after a failed interactive login.
    pub fn reprompt(&mut self) -> Result<()> {
        self.password = prompt_password()?;
        Ok(())
    }
}

fn prompt_password() -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?)
}

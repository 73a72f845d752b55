//! # Tracksheet
//!
//! A command-line utility that turns an indentation-structured plain-text
//! timesheet diary into discrete time-tracking records and submits them to
//! a TrackingTime-style service.
//!
//! ## Features
//!
//! - **Timesheet Parsing**: Strict indentation grammar with line-accurate errors
//! - **Entry Submission**: Sequential submission with per-entry failure reporting
//! - **Project & Task Listing**: Browse the remote account from the terminal
//! - **Remote Task Creation**: Missing tasks are created on the fly during submission
//! - **Per-Invocation Credentials**: Flags, environment or interactive prompt; nothing stored
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracksheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

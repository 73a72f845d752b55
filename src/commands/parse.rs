//! Parse a timesheet file and display its entries without submitting.
//!
//! Useful as a dry run before `submit`: the file is run through the full
//! grammar and the resulting entries are shown as a table. Any grammar
//! violation aborts with a nonzero exit code and no network traffic.

use crate::libs::messages::Message;
use crate::libs::parser;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Command-line arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to the timesheet file
    file: PathBuf,
}

pub fn cmd(args: ParseArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file).with_context(|| format!("Failed to read {}", args.file.display()))?;
    let entries = parser::parse(&text)?;

    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound(args.file.display().to_string()));
        return Ok(());
    }

    msg_print!(Message::EntriesHeader(args.file.display().to_string()), true);
    View::entries(&entries)?;
    msg_print!(Message::EntriesParsed(entries.len()));

    Ok(())
}

//! The `ticklist` operator CLI: inspect and move checkbox state in a
//! filesystem store.

use crate::error::CliError;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use ticklist_core::config::DEFAULT_STORAGE_PREFIX;
use ticklist_core::{Progress, StateExport, StateRecord, StateStore};
use ticklist_storage::FilesystemStorage;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the state file
    #[arg(long)]
    pub store: PathBuf,

    /// Storage key prefix
    #[arg(long, default_value = DEFAULT_STORAGE_PREFIX)]
    pub prefix: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every stored page record as JSON
    Export,
    /// Write the records of an export file back into the store
    Import {
        /// Path to a JSON export
        file: PathBuf,
    },
    /// Delete every record under the prefix
    Clear,
    /// Print the record and stored progress of one page
    Show {
        /// Page path; empty means the index page
        path: String,
    },
}

#[derive(Serialize)]
struct PageReport<'a> {
    key: &'a str,
    states: &'a StateRecord,
    progress: Progress,
}

/// Runs one command, writing its report to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    let store = StateStore::new(FilesystemStorage::new(&args.store), args.prefix.clone());

    match &args.command {
        Command::Export => {
            let export = store.export_all();
            writeln!(out, "{}", serde_json::to_string_pretty(&export)?)?;
        }
        Command::Import { file } => {
            let data: StateExport = serde_json::from_str(&fs::read_to_string(file)?)?;
            let count = store.try_import(&data).map_err(|e| {
                log::error!("Import stopped: {}", e);
                CliError::ImportFailed
            })?;
            writeln!(out, "Imported {} page record(s)", count)?;
        }
        Command::Clear => {
            let removed = store.clear_all(None);
            writeln!(out, "Removed {} page record(s)", removed)?;
        }
        Command::Show { path } => {
            let scope = store.scope_key(path);
            let states = store.try_load(scope.as_str())?;
            let checked = states.iter().filter(|(_, checked)| *checked).count();
            let report = PageReport {
                key: scope.as_str(),
                states: &states,
                progress: Progress::from_counts(states.len(), checked),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

//! `randnote`: open a random note from a markdown vault.
//!
//! # Responsibility
//! - Act as the host for `randnote_core`: vault listing, opening, notices.
//! - Expose the registered actions and the custom directory settings.

mod host;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use host::{PrintPathOpener, ProgramOpener, StderrNotifier};
use log::info;
use randnote_core::{
    core_version, default_log_level, init_logging, now_ms, CustomDirectorySlot, FsVault,
    JsonFileSettingsStore, LoggingOptions, NoteOpener, PluginError, RandomNotePlugin,
    ReconcileReport, RunOutcome,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DATA_DIR_NAME: &str = "randnote";

const EXIT_OK: u8 = 0;
const EXIT_NO_NOTES: u8 = 1;
const EXIT_NOT_CONFIGURED: u8 = 2;
const EXIT_HOST_FAILURE: u8 = 3;
const EXIT_UNKNOWN_COMMAND: u8 = 4;
const EXIT_ERROR: u8 = 5;

#[derive(Debug, Parser)]
#[command(name = "randnote", version, about = "Open a random note from your vault")]
struct Cli {
    /// Vault root directory.
    #[arg(long, default_value = ".")]
    vault: PathBuf,

    /// Directory holding settings.json and logs.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Program that opens the chosen note; prints its path when omitted.
    #[arg(long)]
    open_with: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the registered actions.
    Commands,
    /// Run one action by id, e.g. `open-random-note-past-week`.
    Run { id: String },
    /// Show or edit custom directories.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    Show,
    Set {
        slot: CustomDirectorySlot,
        directory: String,
    },
    Clear {
        slot: CustomDirectorySlot,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    start_logging(&data_dir, cli.log_level.as_deref());

    let store = JsonFileSettingsStore::in_dir(&data_dir);
    let mut plugin = RandomNotePlugin::load(store)
        .with_context(|| format!("failed to load settings from `{}`", data_dir.display()))?;

    match cli.command {
        Command::Commands => {
            for spec in plugin.commands() {
                println!("{}\t{}", spec.id, spec.name);
            }
            Ok(EXIT_OK)
        }
        Command::Run { id } => {
            let vault = FsVault::new(&cli.vault);
            let opener: Box<dyn NoteOpener + '_> = match cli.open_with.as_deref() {
                Some(program) => Box::new(ProgramOpener::new(&vault, program)),
                None => Box::new(PrintPathOpener::new(&vault)),
            };
            let result = plugin.invoke(&id, &vault, opener.as_ref(), &StderrNotifier, now_ms());
            invoke_status(result)
        }
        Command::Settings { command } => {
            match command {
                SettingsCommand::Show => {
                    let body = serde_json::to_string_pretty(plugin.settings())?;
                    println!("{body}");
                }
                SettingsCommand::Set { slot, directory } => {
                    let report = plugin.update_custom_directory(slot, directory)?;
                    print_report(&report);
                }
                SettingsCommand::Clear { slot } => {
                    let report = plugin.update_custom_directory(slot, "")?;
                    print_report(&report);
                }
            }
            Ok(EXIT_OK)
        }
    }
}

fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_dir()
            .ok_or_else(|| anyhow!("no platform data directory; pass --data-dir"))?
            .join(DATA_DIR_NAME),
    };
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(cwd.join(dir))
}

fn start_logging(data_dir: &Path, level: Option<&str>) {
    match init_logging(&logging_options(data_dir, level)) {
        Ok(()) => info!(
            "event=cli_start module=cli status=ok version={}",
            core_version()
        ),
        Err(err) => eprintln!("warning: logging disabled: {err}"),
    }
}

/// File-only logging: notices already reach stderr through `StderrNotifier`.
fn logging_options(data_dir: &Path, level: Option<&str>) -> LoggingOptions {
    LoggingOptions::new(
        level.unwrap_or(default_log_level()),
        data_dir.join("logs"),
    )
}

fn invoke_status(result: Result<RunOutcome, PluginError>) -> Result<u8> {
    match result {
        Ok(outcome) => Ok(exit_status(&outcome)),
        Err(PluginError::UnknownCommand(id)) => {
            eprintln!("unknown command: {id} (see `randnote commands`)");
            Ok(EXIT_UNKNOWN_COMMAND)
        }
        Err(err) => Err(err.into()),
    }
}

fn exit_status(outcome: &RunOutcome) -> u8 {
    match outcome {
        RunOutcome::Opened(_) => EXIT_OK,
        RunOutcome::NoNotes { .. } => EXIT_NO_NOTES,
        RunOutcome::DirectoryNotConfigured(_) => EXIT_NOT_CONFIGURED,
        RunOutcome::ListingFailed(_) | RunOutcome::OpenFailed { .. } => EXIT_HOST_FAILURE,
    }
}

fn print_report(report: &ReconcileReport) {
    for id in &report.added {
        println!("added {id}");
    }
    for id in &report.updated {
        println!("updated {id}");
    }
    for id in &report.removed {
        println!("removed {id}");
    }
}

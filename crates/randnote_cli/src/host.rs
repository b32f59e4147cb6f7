//! Terminal host adapters: how a chosen note is opened and how notices show.

use log::error;
use randnote_core::{FsVault, HostError, HostResult, NoteOpener, NoteRecord, Notifier};
use std::process::Command;

/// Prints the note's absolute path to stdout so it can be piped elsewhere.
pub struct PrintPathOpener<'v> {
    vault: &'v FsVault,
}

impl<'v> PrintPathOpener<'v> {
    pub fn new(vault: &'v FsVault) -> Self {
        Self { vault }
    }
}

impl NoteOpener for PrintPathOpener<'_> {
    fn open(&self, note: &NoteRecord) -> HostResult<()> {
        println!("{}", self.vault.absolute_path(note).display());
        Ok(())
    }
}

/// Launches `program <absolute-path>` and waits for it to exit.
pub struct ProgramOpener<'v> {
    vault: &'v FsVault,
    program: String,
}

impl<'v> ProgramOpener<'v> {
    pub fn new(vault: &'v FsVault, program: impl Into<String>) -> Self {
        Self {
            vault,
            program: program.into(),
        }
    }
}

impl NoteOpener for ProgramOpener<'_> {
    fn open(&self, note: &NoteRecord) -> HostResult<()> {
        let path = self.vault.absolute_path(note);
        let status = Command::new(&self.program)
            .arg(&path)
            .status()
            .map_err(|err| {
                error!(
                    "event=note_open module=cli status=error error_code=spawn_failed program={} error={}",
                    self.program, err
                );
                HostError::new("open_note", format!("failed to launch `{}`: {err}", self.program))
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(HostError::new(
                "open_note",
                format!("`{}` exited with {status}", self.program),
            ))
        }
    }
}

/// Writes notices to stderr, keeping stdout for the note path.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

//! Random note use-case: resolve policy, list, filter, pick, open, notify.
//!
//! # Responsibility
//! - Run one command end-to-end against injected host capabilities.
//! - Translate every failure into a user notice.
//!
//! # Invariants
//! - `run` never returns an error and never panics on host failure.
//! - Unconfigured custom directories short-circuit before listing notes.
//! - Exactly one notice is emitted per run.

use crate::command::catalog::RandomNoteCommand;
use crate::host::{NoteOpener, NoteSource, Notifier};
use crate::model::note::NoteRecord;
use crate::selector::{filter_by_policy, pick_random};
use crate::settings::{CustomDirectorySlot, Settings};
use log::{debug, error, info};

/// Result of one command run. Every variant has already been notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The chosen note was opened.
    Opened(NoteRecord),
    /// No note matched; `context` is the phrase used in the notice.
    NoNotes { context: String },
    /// Custom directory action invoked while its slot is blank.
    DirectoryNotConfigured(CustomDirectorySlot),
    /// Host could not enumerate notes.
    ListingFailed(String),
    /// Host could not open the chosen note.
    OpenFailed { note: NoteRecord, reason: String },
}

impl RunOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, Self::Opened(_))
    }
}

pub fn opened_message(note: &NoteRecord) -> String {
    format!("Opened random note: {}", note.basename())
}

pub fn no_notes_message(context: &str) -> String {
    format!("No notes found {context}!")
}

pub fn not_configured_message(slot: CustomDirectorySlot) -> String {
    format!("Custom directory {slot} is not set. Configure it in settings first.")
}

pub fn listing_failed_message(reason: &str) -> String {
    format!("Failed to list notes: {reason}")
}

pub fn open_failed_message(note: &NoteRecord) -> String {
    format!("Failed to open note: {}", note.path)
}

/// Service over borrowed host capabilities.
pub struct RandomNoteService<'h> {
    source: &'h dyn NoteSource,
    opener: &'h dyn NoteOpener,
    notifier: &'h dyn Notifier,
}

impl<'h> RandomNoteService<'h> {
    pub fn new(
        source: &'h dyn NoteSource,
        opener: &'h dyn NoteOpener,
        notifier: &'h dyn Notifier,
    ) -> Self {
        Self {
            source,
            opener,
            notifier,
        }
    }

    /// Runs `command` with the window anchored at `now_ms`.
    pub fn run(&self, command: RandomNoteCommand, settings: &Settings, now_ms: i64) -> RunOutcome {
        let command_id = command.id();
        let selection = match command.selection(settings) {
            Ok(selection) => selection,
            Err(slot) => {
                info!(
                    "event=random_note module=service status=skip command={} reason=directory_not_configured",
                    command_id
                );
                self.notifier.notify(&not_configured_message(slot));
                return RunOutcome::DirectoryNotConfigured(slot);
            }
        };

        let all_notes = match self.source.list_all_notes() {
            Ok(notes) => notes,
            Err(err) => {
                error!(
                    "event=random_note module=service status=error command={} error_code=list_failed error={}",
                    command_id, err
                );
                let reason = err.to_string();
                self.notifier.notify(&listing_failed_message(&reason));
                return RunOutcome::ListingFailed(reason);
            }
        };

        let candidates = filter_by_policy(&all_notes, &selection.policy, now_ms);
        debug!(
            "event=random_note module=service status=filtered command={} total={} candidates={}",
            command_id,
            all_notes.len(),
            candidates.len()
        );

        let Some(chosen) = pick_random(&candidates).map(|note| (*note).clone()) else {
            info!(
                "event=random_note module=service status=empty command={} total={}",
                command_id,
                all_notes.len()
            );
            self.notifier.notify(&no_notes_message(&selection.context));
            return RunOutcome::NoNotes {
                context: selection.context,
            };
        };

        match self.opener.open(&chosen) {
            Ok(()) => {
                info!(
                    "event=random_note module=service status=ok command={} candidates={}",
                    command_id,
                    candidates.len()
                );
                debug!("event=random_note module=service status=opened path={}", chosen.path);
                self.notifier.notify(&opened_message(&chosen));
                RunOutcome::Opened(chosen)
            }
            Err(err) => {
                error!(
                    "event=random_note module=service status=error command={} error_code=open_failed error={}",
                    command_id, err
                );
                self.notifier.notify(&open_failed_message(&chosen));
                RunOutcome::OpenFailed {
                    note: chosen,
                    reason: err.to_string(),
                }
            }
        }
    }
}

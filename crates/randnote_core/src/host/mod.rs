//! Host capability contracts.
//!
//! # Responsibility
//! - Describe what the random-note flow needs from its host: listing notes,
//!   opening one, and showing a notice.
//! - Keep the selector free of any concrete host dependency.
//!
//! # Invariants
//! - Host failures are values (`HostError`), never panics.
//! - `Notifier::notify` is fire-and-forget and cannot fail.

mod fs_vault;

pub use fs_vault::{FsVault, NOTE_EXTENSION};
pub(crate) use fs_vault::system_time_to_ms;

use crate::model::note::NoteRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type HostResult<T> = Result<T, HostError>;

/// Failure reported by a host capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
    /// Capability operation that failed, e.g. `list_notes` or `open_note`.
    pub operation: &'static str,
    /// Host-defined failure description.
    pub message: String,
}

impl HostError {
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

impl Display for HostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

impl Error for HostError {}

/// Enumerates every note currently known to the host. Order is unspecified.
pub trait NoteSource {
    fn list_all_notes(&self) -> HostResult<Vec<NoteRecord>>;
}

/// Opens one note in the host UI.
pub trait NoteOpener {
    fn open(&self, note: &NoteRecord) -> HostResult<()>;
}

/// User-facing notice sink.
pub trait Notifier {
    fn notify(&self, message: &str);
}

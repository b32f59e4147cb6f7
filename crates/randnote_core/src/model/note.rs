//! Note reference and selection policy types.
//!
//! # Invariants
//! - `path` is slash-delimited and relative to the vault root.
//! - `created_at_ms` is the creation instant, never the modification time
//!   unless the host cannot report creation.

use serde::{Deserialize, Serialize};

/// Fixed day length used by recency windows. No calendar/timezone adjustment.
pub const DAY_MS: i64 = 86_400_000;

/// Opaque reference to one note known by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Slash-delimited path relative to the vault root.
    pub path: String,
    /// Creation instant in Unix epoch milliseconds.
    pub created_at_ms: i64,
}

impl NoteRecord {
    pub fn new(path: impl Into<String>, created_at_ms: i64) -> Self {
        Self {
            path: path.into(),
            created_at_ms,
        }
    }

    /// Last path segment with its extension stripped.
    ///
    /// `Projects/plan.v2.md` -> `plan.v2`; dotfiles keep their full name.
    pub fn basename(&self) -> &str {
        let file_name = self.path.rsplit('/').next().unwrap_or(self.path.as_str());
        match file_name.rfind('.') {
            Some(0) | None => file_name,
            Some(idx) => &file_name[..idx],
        }
    }
}

/// Rule deciding which notes are eligible before the random pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Every note in the vault.
    AllNotes,
    /// Notes created within the last N fixed-length days (inclusive bound).
    CreatedWithinDays(u32),
    /// Notes whose path starts with the literal prefix.
    UnderDirectory(String),
}

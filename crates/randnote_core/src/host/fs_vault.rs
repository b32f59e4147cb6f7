//! Directory-tree vault backed by the local filesystem.
//!
//! # Invariants
//! - Only `.md` files are notes (extension match is case-insensitive).
//! - Hidden entries below the root (`.obsidian`, `.git`, `.trash`, ...) are
//!   never descended into or listed.
//! - Listed paths are relative to the root and `/`-delimited on every OS.

use super::{HostError, HostResult, NoteSource};
use crate::model::note::NoteRecord;
use log::{debug, info, warn};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use walkdir::{DirEntry, WalkDir};

/// Extension that marks a file as a note.
pub const NOTE_EXTENSION: &str = "md";

/// Note source over a vault directory.
#[derive(Debug, Clone)]
pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location of a listed note.
    pub fn absolute_path(&self, note: &NoteRecord) -> PathBuf {
        note.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl NoteSource for FsVault {
    fn list_all_notes(&self) -> HostResult<Vec<NoteRecord>> {
        let started_at = Instant::now();
        if !self.root.is_dir() {
            return Err(HostError::new(
                "list_notes",
                format!("vault root `{}` is not a directory", self.root.display()),
            ));
        }

        let mut notes = Vec::new();
        let mut skipped = 0usize;
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    skipped += 1;
                    warn!("event=vault_scan module=host status=skip error={}", err);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !is_note_file(entry.path()) {
                continue;
            }

            let Some(path) = relative_slash_path(&self.root, entry.path()) else {
                skipped += 1;
                continue;
            };
            let created_at_ms = match entry.metadata() {
                Ok(metadata) => creation_time_ms(&metadata),
                Err(err) => {
                    skipped += 1;
                    warn!("event=vault_scan module=host status=skip error={}", err);
                    continue;
                }
            };
            debug!("event=vault_scan module=host status=found path={}", path);
            notes.push(NoteRecord {
                path,
                created_at_ms,
            });
        }

        info!(
            "event=vault_scan module=host status=ok notes={} skipped={} duration_ms={}",
            notes.len(),
            skipped,
            started_at.elapsed().as_millis()
        );
        Ok(notes)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_note_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
        .unwrap_or(false)
}

fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Creation instant in epoch millis; modification time when the platform or
/// filesystem does not record creation.
fn creation_time_ms(metadata: &Metadata) -> i64 {
    let instant = metadata
        .created()
        .or_else(|_| metadata.modified())
        .unwrap_or(UNIX_EPOCH);
    system_time_to_ms(instant)
}

pub(crate) fn system_time_to_ms(instant: SystemTime) -> i64 {
    match instant.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}

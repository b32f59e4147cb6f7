//! Settings persistence backends.

use super::model::Settings;
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name used by [`JsonFileSettingsStore::in_dir`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug)]
pub enum SettingsError {
    /// Filesystem failure while reading or writing the blob.
    Io { path: PathBuf, source: io::Error },
    /// Stored blob is not a valid settings object.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "settings i/o failed at `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "settings file `{}` is malformed: {source}", path.display())
            }
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Persistence contract for the settings blob.
pub trait SettingsStore {
    /// Loads settings merged over defaults.
    fn load(&self) -> SettingsResult<Settings>;
    /// Persists the full settings blob.
    fn save(&self, settings: &Settings) -> SettingsResult<()>;
}

/// Single JSON file store.
///
/// A missing file loads as defaults. Saves go through a sibling temp file
/// and a rename so readers never observe a half-written blob.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/settings.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> SettingsResult<Settings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("event=settings_load module=settings status=ok source=defaults");
                return Ok(Settings::default());
            }
            Err(err) => {
                error!(
                    "event=settings_load module=settings status=error error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Settings::default());
        }

        let settings = serde_json::from_str::<Settings>(&raw).map_err(|source| {
            error!(
                "event=settings_load module=settings status=error error_code=malformed error={}",
                source
            );
            SettingsError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;
        info!("event=settings_load module=settings status=ok source=file");
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let body = serde_json::to_string_pretty(settings).map_err(|source| {
            SettingsError::Malformed {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, body).map_err(|err| self.io_error(err))?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            error!(
                "event=settings_save module=settings status=error error_code=rename_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        info!("event=settings_save module=settings status=ok");
        Ok(())
    }
}

/// Process-local store; nothing touches disk.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    current: RefCell<Settings>,
    saves: Cell<usize>,
}

impl InMemorySettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            current: RefCell::new(initial),
            saves: Cell::new(0),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn load(&self) -> SettingsResult<Settings> {
        Ok(self.current.borrow().clone())
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        *self.current.borrow_mut() = settings.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

//! User settings for custom directory scoping.
//!
//! # Responsibility
//! - Hold the three custom directory prefixes.
//! - Load them merged over defaults and persist them on every edit.
//!
//! # Invariants
//! - The stored blob is a flat key-value object; no schema version.
//! - Missing keys load as empty strings; unknown keys are ignored.

mod model;
mod store;

pub use model::{CustomDirectorySlot, Settings, SlotParseError};
pub use store::{
    InMemorySettingsStore, JsonFileSettingsStore, SettingsError, SettingsResult, SettingsStore,
    SETTINGS_FILE_NAME,
};

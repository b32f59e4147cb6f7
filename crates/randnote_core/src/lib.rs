//! Core logic for picking and opening a random note.
//! Everything host-specific sits behind the traits in [`host`].

pub mod command;
pub mod host;
pub mod logging;
pub mod model;
pub mod plugin;
pub mod selector;
pub mod service;
pub mod settings;

pub use command::catalog::{desired_commands, CommandSpec, RandomNoteCommand, Selection};
pub use command::registry::{CommandRegistry, CommandRegistryError, ReconcileReport};
pub use host::{FsVault, HostError, HostResult, NoteOpener, NoteSource, Notifier};
pub use logging::{default_log_level, init_logging, logging_status, LoggingOptions};
pub use model::note::{NoteRecord, SelectionPolicy, DAY_MS};
pub use plugin::{PluginError, RandomNotePlugin};
pub use selector::{filter_by_policy, pick_random, pick_random_with};
pub use service::random_note_service::{RandomNoteService, RunOutcome};
pub use settings::{
    CustomDirectorySlot, InMemorySettingsStore, JsonFileSettingsStore, Settings, SettingsError,
    SettingsResult, SettingsStore,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_ms() -> i64 {
    host::system_time_to_ms(std::time::SystemTime::now())
}

#[cfg(test)]
mod tests {
    use super::{core_version, now_ms};

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn now_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }
}

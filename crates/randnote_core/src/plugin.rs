//! Plugin facade: settings, command registry and the random note service.
//!
//! # Responsibility
//! - Load settings merged over defaults and derive the visible action set.
//! - Persist every settings edit and reconcile actions right after.
//! - Dispatch registered action ids to the random note service.
//!
//! # Invariants
//! - After `load` and after every successful edit, the registry matches
//!   `desired_commands(settings)` exactly.
//! - A failed save leaves both settings and registry unchanged.

use crate::command::catalog::{desired_commands, CommandSpec, RandomNoteCommand};
use crate::command::registry::{CommandRegistry, CommandRegistryError, ReconcileReport};
use crate::host::{NoteOpener, NoteSource, Notifier};
use crate::service::random_note_service::{RandomNoteService, RunOutcome};
use crate::settings::{CustomDirectorySlot, Settings, SettingsError, SettingsStore};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Facade errors.
#[derive(Debug)]
pub enum PluginError {
    /// Settings could not be loaded or saved.
    Settings(SettingsError),
    /// Invoked id is not a registered action.
    UnknownCommand(String),
    /// Registry rejected the derived action set.
    Registry(CommandRegistryError),
}

impl Display for PluginError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Settings(err) => write!(f, "{err}"),
            Self::UnknownCommand(id) => write!(f, "unknown command: {id}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PluginError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Settings(err) => Some(err),
            Self::Registry(err) => Some(err),
            Self::UnknownCommand(_) => None,
        }
    }
}

impl From<SettingsError> for PluginError {
    fn from(value: SettingsError) -> Self {
        Self::Settings(value)
    }
}

impl From<CommandRegistryError> for PluginError {
    fn from(value: CommandRegistryError) -> Self {
        match value {
            CommandRegistryError::CommandNotFound(id) => Self::UnknownCommand(id),
            other => Self::Registry(other),
        }
    }
}

pub struct RandomNotePlugin<S: SettingsStore> {
    store: S,
    settings: Settings,
    registry: CommandRegistry,
}

impl<S: SettingsStore> RandomNotePlugin<S> {
    /// Loads settings from `store` and registers the matching actions.
    pub fn load(store: S) -> Result<Self, PluginError> {
        let settings = store.load()?;
        let mut registry = CommandRegistry::new();
        registry.reconcile(desired_commands(&settings))?;
        info!(
            "event=plugin_load module=plugin status=ok commands={}",
            registry.len()
        );
        Ok(Self {
            store,
            settings,
            registry,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Registered actions, sorted by id.
    pub fn commands(&self) -> Vec<&CommandSpec> {
        self.registry.iter().collect()
    }

    /// Sets one custom directory, saves, then reconciles actions.
    pub fn update_custom_directory(
        &mut self,
        slot: CustomDirectorySlot,
        value: impl Into<String>,
    ) -> Result<ReconcileReport, PluginError> {
        let mut next = self.settings.clone();
        next.set_custom_directory(slot, value);
        self.store.save(&next)?;
        self.settings = next;
        let report = self.registry.reconcile(desired_commands(&self.settings))?;
        info!(
            "event=settings_update module=plugin status=ok slot={} configured={}",
            slot,
            self.settings.configured_directory(slot).is_some()
        );
        Ok(report)
    }

    /// Runs the action `command_id` against the given host.
    ///
    /// Custom-directory ids for blank slots are not registered but still run,
    /// so the host gets the "not set" notice. Only an id outside the catalog
    /// is an error; every run-time failure is already a notified
    /// [`RunOutcome`].
    pub fn invoke(
        &self,
        command_id: &str,
        source: &dyn NoteSource,
        opener: &dyn NoteOpener,
        notifier: &dyn Notifier,
        now_ms: i64,
    ) -> Result<RunOutcome, PluginError> {
        let command = match self.registry.resolve(command_id) {
            Ok(spec) => spec.command,
            Err(err) => match RandomNoteCommand::from_id(command_id) {
                Some(command @ RandomNoteCommand::CustomDirectory(_)) => command,
                _ => return Err(err.into()),
            },
        };
        let service = RandomNoteService::new(source, opener, notifier);
        Ok(service.run(command, &self.settings, now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::{PluginError, RandomNotePlugin};
    use crate::host::{HostResult, NoteOpener, NoteSource, Notifier};
    use crate::model::note::NoteRecord;
    use crate::service::random_note_service::RunOutcome;
    use crate::settings::{CustomDirectorySlot, InMemorySettingsStore, Settings};
    use std::cell::RefCell;

    struct EmptySource;

    impl NoteSource for EmptySource {
        fn list_all_notes(&self) -> HostResult<Vec<NoteRecord>> {
            Ok(vec![])
        }
    }

    struct NoopOpener;

    impl NoteOpener for NoopOpener {
        fn open(&self, _note: &NoteRecord) -> HostResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<String>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn load_registers_built_ins_and_configured_slots() {
        let mut initial = Settings::default();
        initial.set_custom_directory(CustomDirectorySlot::Three, "Areas");
        let plugin =
            RandomNotePlugin::load(InMemorySettingsStore::new(initial)).expect("plugin load");

        let ids: Vec<&str> = plugin
            .commands()
            .into_iter()
            .map(|spec| spec.id.as_str())
            .collect();
        assert_eq!(ids.len(), 5);
        assert!(ids.contains(&"open-random-note-custom-dir-3"));
    }

    #[test]
    fn every_edit_is_saved() {
        let mut plugin =
            RandomNotePlugin::load(InMemorySettingsStore::default()).expect("plugin load");
        plugin
            .update_custom_directory(CustomDirectorySlot::One, "Daily")
            .expect("first edit");
        plugin
            .update_custom_directory(CustomDirectorySlot::One, "Daily/2024")
            .expect("second edit");
        assert_eq!(plugin.store().save_count(), 2);
        assert_eq!(plugin.settings().custom_directory_1, "Daily/2024");
    }

    #[test]
    fn blank_slot_action_notifies_configuration_prompt() {
        let plugin =
            RandomNotePlugin::load(InMemorySettingsStore::default()).expect("plugin load");
        let notifier = RecordingNotifier::default();
        let outcome = plugin
            .invoke(
                "open-random-note-custom-dir-1",
                &EmptySource,
                &NoopOpener,
                &notifier,
                0,
            )
            .expect("catalog id runs even when its slot is blank");
        assert_eq!(
            outcome,
            RunOutcome::DirectoryNotConfigured(CustomDirectorySlot::One)
        );
        assert_eq!(
            notifier.0.borrow().as_slice(),
            ["Custom directory 1 is not set. Configure it in settings first."]
        );
    }

    #[test]
    fn invoking_id_outside_catalog_is_an_error() {
        let plugin =
            RandomNotePlugin::load(InMemorySettingsStore::default()).expect("plugin load");
        let notifier = RecordingNotifier::default();
        for id in ["open-random-note-custom-dir-4", "open-daily-note"] {
            let err = plugin
                .invoke(id, &EmptySource, &NoopOpener, &notifier, 0)
                .expect_err("unknown id must fail");
            assert!(matches!(err, PluginError::UnknownCommand(_)));
        }
        assert!(notifier.0.borrow().is_empty());
    }
}

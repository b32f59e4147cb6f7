//! Built-in and custom-directory action catalog.

use crate::model::note::SelectionPolicy;
use crate::settings::{CustomDirectorySlot, Settings};

/// Id prefix shared by every action.
pub const COMMAND_ID_PREFIX: &str = "open-random-note";

pub const PAST_WEEK_DAYS: u32 = 7;
pub const PAST_MONTH_DAYS: u32 = 30;
pub const PAST_YEAR_DAYS: u32 = 365;

/// One invocable selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RandomNoteCommand {
    Vault,
    PastWeek,
    PastMonth,
    PastYear,
    CustomDirectory(CustomDirectorySlot),
}

/// Policy plus the context phrase used in empty-result notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub policy: SelectionPolicy,
    pub context: String,
}

impl RandomNoteCommand {
    /// Actions registered regardless of settings.
    pub const BUILT_IN: [RandomNoteCommand; 4] =
        [Self::Vault, Self::PastWeek, Self::PastMonth, Self::PastYear];

    /// Stable host-facing identifier.
    pub fn id(self) -> String {
        match self {
            Self::Vault => COMMAND_ID_PREFIX.to_string(),
            Self::PastWeek => format!("{COMMAND_ID_PREFIX}-past-week"),
            Self::PastMonth => format!("{COMMAND_ID_PREFIX}-past-month"),
            Self::PastYear => format!("{COMMAND_ID_PREFIX}-past-year"),
            Self::CustomDirectory(slot) => format!("{COMMAND_ID_PREFIX}-custom-dir-{slot}"),
        }
    }

    /// Inverse of [`RandomNoteCommand::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        let rest = id.trim().strip_prefix(COMMAND_ID_PREFIX)?;
        match rest {
            "" => Some(Self::Vault),
            "-past-week" => Some(Self::PastWeek),
            "-past-month" => Some(Self::PastMonth),
            "-past-year" => Some(Self::PastYear),
            other => other
                .strip_prefix("-custom-dir-")
                .and_then(|slot| slot.parse::<CustomDirectorySlot>().ok())
                .map(Self::CustomDirectory),
        }
    }

    /// Display name; custom-directory actions embed their directory.
    pub fn name(self, directory: Option<&str>) -> String {
        match self {
            Self::Vault => "Open random note from vault".to_string(),
            Self::PastWeek => "Open random note from past week".to_string(),
            Self::PastMonth => "Open random note from past month".to_string(),
            Self::PastYear => "Open random note from past year".to_string(),
            Self::CustomDirectory(slot) => match directory {
                Some(dir) => format!("Open random note from \"{dir}\""),
                None => format!("Open random note from custom directory {slot}"),
            },
        }
    }

    /// Resolves the policy for this action against current settings.
    ///
    /// Fails with the slot for a custom-directory action whose slot is blank.
    pub fn selection(self, settings: &Settings) -> Result<Selection, CustomDirectorySlot> {
        let recent = |days: u32| Selection {
            policy: SelectionPolicy::CreatedWithinDays(days),
            context: format!("from past {days} days"),
        };
        match self {
            Self::Vault => Ok(Selection {
                policy: SelectionPolicy::AllNotes,
                context: "in vault".to_string(),
            }),
            Self::PastWeek => Ok(recent(PAST_WEEK_DAYS)),
            Self::PastMonth => Ok(recent(PAST_MONTH_DAYS)),
            Self::PastYear => Ok(recent(PAST_YEAR_DAYS)),
            Self::CustomDirectory(slot) => settings
                .configured_directory(slot)
                .map(|dir| Selection {
                    policy: SelectionPolicy::UnderDirectory(dir.to_string()),
                    context: format!("in {dir} directory"),
                })
                .ok_or(slot),
        }
    }
}

/// Registrable action snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: String,
    pub name: String,
    pub command: RandomNoteCommand,
    /// Trimmed directory for custom-directory actions.
    pub directory: Option<String>,
}

impl CommandSpec {
    pub fn new(command: RandomNoteCommand, directory: Option<&str>) -> Self {
        Self {
            id: command.id(),
            name: command.name(directory),
            command,
            directory: directory.map(str::to_string),
        }
    }
}

/// Action set that should be visible for `settings`.
pub fn desired_commands(settings: &Settings) -> Vec<CommandSpec> {
    let built_in = RandomNoteCommand::BUILT_IN
        .into_iter()
        .map(|command| CommandSpec::new(command, None));
    let custom = CustomDirectorySlot::ALL.into_iter().filter_map(|slot| {
        settings
            .configured_directory(slot)
            .map(|dir| CommandSpec::new(RandomNoteCommand::CustomDirectory(slot), Some(dir)))
    });
    built_in.chain(custom).collect()
}

#[cfg(test)]
mod tests {
    use super::{desired_commands, RandomNoteCommand};
    use crate::model::note::SelectionPolicy;
    use crate::settings::{CustomDirectorySlot, Settings};

    #[test]
    fn ids_round_trip_through_from_id() {
        let mut commands = RandomNoteCommand::BUILT_IN.to_vec();
        commands.extend(
            CustomDirectorySlot::ALL
                .into_iter()
                .map(RandomNoteCommand::CustomDirectory),
        );
        for command in commands {
            assert_eq!(RandomNoteCommand::from_id(&command.id()), Some(command));
        }
        assert_eq!(RandomNoteCommand::from_id("open-random-note-custom-dir-4"), None);
        assert_eq!(RandomNoteCommand::from_id("open-random"), None);
    }

    #[test]
    fn built_in_ids_are_stable() {
        let ids: Vec<String> = RandomNoteCommand::BUILT_IN
            .into_iter()
            .map(RandomNoteCommand::id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "open-random-note",
                "open-random-note-past-week",
                "open-random-note-past-month",
                "open-random-note-past-year",
            ]
        );
    }

    #[test]
    fn recency_actions_map_to_day_windows() {
        let settings = Settings::default();
        let week = RandomNoteCommand::PastWeek
            .selection(&settings)
            .expect("week selection");
        assert_eq!(week.policy, SelectionPolicy::CreatedWithinDays(7));
        assert_eq!(week.context, "from past 7 days");

        let year = RandomNoteCommand::PastYear
            .selection(&settings)
            .expect("year selection");
        assert_eq!(year.policy, SelectionPolicy::CreatedWithinDays(365));
    }

    #[test]
    fn custom_directory_selection_requires_configured_slot() {
        let mut settings = Settings::default();
        let command = RandomNoteCommand::CustomDirectory(CustomDirectorySlot::Two);
        assert_eq!(command.selection(&settings), Err(CustomDirectorySlot::Two));

        settings.set_custom_directory(CustomDirectorySlot::Two, " Projects ");
        let selection = command.selection(&settings).expect("configured slot");
        assert_eq!(
            selection.policy,
            SelectionPolicy::UnderDirectory("Projects".to_string())
        );
        assert_eq!(selection.context, "in Projects directory");
    }

    #[test]
    fn desired_commands_skip_blank_slots() {
        let mut settings = Settings::default();
        settings.set_custom_directory(CustomDirectorySlot::One, "Daily");
        settings.set_custom_directory(CustomDirectorySlot::Two, "   ");
        settings.set_custom_directory(CustomDirectorySlot::Three, "Areas/Health");

        let specs = desired_commands(&settings);
        let ids: Vec<&str> = specs.iter().map(|spec| spec.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&"open-random-note-custom-dir-1"));
        assert!(!ids.contains(&"open-random-note-custom-dir-2"));
        assert!(ids.contains(&"open-random-note-custom-dir-3"));

        let third = specs
            .iter()
            .find(|spec| spec.id == "open-random-note-custom-dir-3")
            .expect("third slot action");
        assert_eq!(third.name, "Open random note from \"Areas/Health\"");
        assert_eq!(third.directory.as_deref(), Some("Areas/Health"));
    }
}

//! In-process action registry with settings-driven reconciliation.

use super::catalog::CommandSpec;
use log::info;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Registry mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRegistryError {
    InvalidCommandId(String),
    DuplicateCommandId(String),
    CommandNotFound(String),
}

impl Display for CommandRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandId(value) => write!(f, "command id is invalid: {value}"),
            Self::DuplicateCommandId(value) => {
                write!(f, "command id already registered: {value}")
            }
            Self::CommandNotFound(value) => write!(f, "command not found: {value}"),
        }
    }
}

impl Error for CommandRegistryError {}

/// Ids touched by one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<String>,
    pub updated: Vec<String>,
    pub removed: Vec<String>,
}

impl ReconcileReport {
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}

/// Registered action set keyed by stable id.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: BTreeMap<String, CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one action after id validation.
    pub fn register(&mut self, spec: CommandSpec) -> Result<(), CommandRegistryError> {
        validate_command_id(&spec.id)?;
        if self.entries.contains_key(spec.id.as_str()) {
            return Err(CommandRegistryError::DuplicateCommandId(spec.id));
        }
        self.entries.insert(spec.id.clone(), spec);
        Ok(())
    }

    /// Removes one action and returns its last snapshot.
    pub fn unregister(&mut self, id: &str) -> Result<CommandSpec, CommandRegistryError> {
        self.entries
            .remove(id.trim())
            .ok_or_else(|| CommandRegistryError::CommandNotFound(id.trim().to_string()))
    }

    /// Brings the registry in line with `desired`.
    ///
    /// Unchanged entries are left alone, changed entries are replaced in place,
    /// new entries are added before stale ones are removed. The whole desired
    /// set is validated first, so a rejected call leaves the registry as-is.
    pub fn reconcile(
        &mut self,
        desired: Vec<CommandSpec>,
    ) -> Result<ReconcileReport, CommandRegistryError> {
        let mut desired_ids = BTreeSet::new();
        for spec in &desired {
            validate_command_id(&spec.id)?;
            if !desired_ids.insert(spec.id.clone()) {
                return Err(CommandRegistryError::DuplicateCommandId(spec.id.clone()));
            }
        }

        let mut report = ReconcileReport::default();
        for spec in desired {
            match self.entries.get(spec.id.as_str()) {
                None => {
                    report.added.push(spec.id.clone());
                    self.entries.insert(spec.id.clone(), spec);
                }
                Some(existing) if *existing != spec => {
                    report.updated.push(spec.id.clone());
                    self.entries.insert(spec.id.clone(), spec);
                }
                Some(_) => {}
            }
        }

        let stale: Vec<String> = self
            .entries
            .keys()
            .filter(|id| !desired_ids.contains(*id))
            .cloned()
            .collect();
        for id in stale {
            self.entries.remove(id.as_str());
            report.removed.push(id);
        }

        if !report.is_noop() {
            info!(
                "event=commands_reconcile module=command status=ok added={} updated={} removed={} total={}",
                report.added.len(),
                report.updated.len(),
                report.removed.len(),
                self.entries.len()
            );
        }
        Ok(report)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CommandSpec> {
        self.entries.get(id.trim())
    }

    /// Like [`CommandRegistry::get`] but reports a missing id as an error.
    pub fn resolve(&self, id: &str) -> Result<&CommandSpec, CommandRegistryError> {
        self.get(id)
            .ok_or_else(|| CommandRegistryError::CommandNotFound(id.trim().to_string()))
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.entries.values()
    }
}

fn validate_command_id(id: &str) -> Result<(), CommandRegistryError> {
    if is_valid_command_id(id) {
        Ok(())
    } else {
        Err(CommandRegistryError::InvalidCommandId(id.to_string()))
    }
}

fn is_valid_command_id(value: &str) -> bool {
    let mut chars = value.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    let mut prev_separator = false;
    for c in chars {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            prev_separator = false;
        } else if matches!(c, '-' | '_' | '.') && !prev_separator {
            prev_separator = true;
        } else {
            return false;
        }
    }
    !prev_separator
}

//! Settings blob and custom directory slots.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the three configurable custom directory fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomDirectorySlot {
    One,
    Two,
    Three,
}

impl CustomDirectorySlot {
    pub const ALL: [CustomDirectorySlot; 3] = [Self::One, Self::Two, Self::Three];

    /// 1-based slot number shown to users and used in command ids.
    pub fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

impl Display for CustomDirectorySlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for CustomDirectorySlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| SlotParseError(s.to_string()))
    }
}

/// Slot parse failure; carries the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotParseError(pub String);

impl Display for SlotParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "custom directory slot must be 1, 2 or 3, got `{}`", self.0)
    }
}

impl Error for SlotParseError {}

/// Persisted settings. Serialized with the host's camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "customDirectory1")]
    pub custom_directory_1: String,
    #[serde(rename = "customDirectory2")]
    pub custom_directory_2: String,
    #[serde(rename = "customDirectory3")]
    pub custom_directory_3: String,
}

impl Settings {
    /// Raw field value, untrimmed.
    pub fn custom_directory(&self, slot: CustomDirectorySlot) -> &str {
        match slot {
            CustomDirectorySlot::One => &self.custom_directory_1,
            CustomDirectorySlot::Two => &self.custom_directory_2,
            CustomDirectorySlot::Three => &self.custom_directory_3,
        }
    }

    pub fn set_custom_directory(&mut self, slot: CustomDirectorySlot, value: impl Into<String>) {
        let field = match slot {
            CustomDirectorySlot::One => &mut self.custom_directory_1,
            CustomDirectorySlot::Two => &mut self.custom_directory_2,
            CustomDirectorySlot::Three => &mut self.custom_directory_3,
        };
        *field = value.into();
    }

    /// Trimmed directory for `slot`, or `None` when blank (not configured).
    pub fn configured_directory(&self, slot: CustomDirectorySlot) -> Option<&str> {
        let trimmed = self.custom_directory(slot).trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

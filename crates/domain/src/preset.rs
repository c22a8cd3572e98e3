//! Presets — fixed colors bound to dedicated control panel buttons.
//!
//! A preset bypasses the free-text color input: the literal is sent as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four preset buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    One,
    Two,
    Three,
    Four,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// The color literal sent when this preset is clicked.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::One => "#01c7fc",
            Self::Two => "#ff4b0f",
            Self::Three => "#ff0000",
            Self::Four => "#f72b98",
        }
    }

    /// 1-based slot number.
    #[must_use]
    pub fn slot(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Look up a preset by its 1-based slot number.
    #[must_use]
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Identifier of the control carrying this preset (`preset-1` …).
    #[must_use]
    pub fn control_id(self) -> &'static str {
        match self {
            Self::One => "preset-1",
            Self::Two => "preset-2",
            Self::Three => "preset-3",
            Self::Four => "preset-4",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_id())
    }
}

/// Error returned when a preset slot is not in `1..=4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("preset slot must be between 1 and 4, got {0:?}")]
pub struct InvalidPresetSlot(pub String);

impl FromStr for Preset {
    type Err = InvalidPresetSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("preset-").unwrap_or(s);
        digits
            .parse::<u8>()
            .ok()
            .and_then(Self::from_slot)
            .ok_or_else(|| InvalidPresetSlot(s.to_string()))
    }
}

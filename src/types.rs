//! Core types for queue management

use serde::{Deserialize, Serialize};

/// Repeat mode
///
/// Governs what happens to items passed over during advancement.
/// Serialized names match the wire format used by player frontends
/// (`NO-REPEAT`, `REPEAT-ONE`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Advancing permanently discards passed items
    #[default]
    #[serde(rename = "NO-REPEAT")]
    NoRepeat,

    /// Advancing is a no-op unless explicitly forced
    #[serde(rename = "REPEAT-ONE")]
    RepeatOne,

    /// Advancing rotates passed items to the tail, cycling forever
    #[serde(rename = "REPEAT-ALL")]
    RepeatAll,

    /// Like `RepeatAll`, plus absolute-position bookkeeping for
    /// "track 3 of 10" style displays
    #[serde(rename = "REPEAT-ALL-INDEX")]
    RepeatAllIndex,
}

impl RepeatMode {
    /// Wire name of this mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoRepeat => "NO-REPEAT",
            Self::RepeatOne => "REPEAT-ONE",
            Self::RepeatAll => "REPEAT-ALL",
            Self::RepeatAllIndex => "REPEAT-ALL-INDEX",
        }
    }

    /// Parse a wire name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "NO-REPEAT" => Some(Self::NoRepeat),
            "REPEAT-ONE" => Some(Self::RepeatOne),
            "REPEAT-ALL" => Some(Self::RepeatAll),
            "REPEAT-ALL-INDEX" => Some(Self::RepeatAllIndex),
            _ => None,
        }
    }
}

impl std::fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`crate::Queue::shift`]
///
/// `Default` advances by one item and forces the advance even under
/// [`RepeatMode::RepeatOne`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftOptions {
    /// How many items to advance by (must be positive)
    pub times: i64,

    /// When `false`, `RepeatOne` parks the queue on the current item
    /// and the call is a no-op
    pub ignore_repetition: bool,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            times: 1,
            ignore_repetition: true,
        }
    }
}

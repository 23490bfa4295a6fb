use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Where on the rectangle's left edge the winding begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartPosition {
    LeftTop,
    #[default]
    LeftCenter,
    LeftBottom,
}

impl StartPosition {
    /// All start positions, in selector order.
    pub const ALL: [Self; 3] = [Self::LeftTop, Self::LeftCenter, Self::LeftBottom];

    /// Maps a selector index (`0` top, `1` center, `2` bottom).
    ///
    /// Unknown indices fall back to [`StartPosition::LeftCenter`].
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::LeftTop,
            2 => Self::LeftBottom,
            _ => Self::LeftCenter,
        }
    }

    /// Selector index of this position.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::LeftTop => 0,
            Self::LeftCenter => 1,
            Self::LeftBottom => 2,
        }
    }

    /// Kebab-case name, as used in serialized presets.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeftTop => "left-top",
            Self::LeftCenter => "left-center",
            Self::LeftBottom => "left-bottom",
        }
    }
}

impl fmt::Display for StartPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartPosition {
    type Err = ParameterError;

    /// Accepts `left-top`, `Left Top`, `left_top` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | ' ' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ParameterError::UnknownStartPosition(s.to_owned()))
    }
}

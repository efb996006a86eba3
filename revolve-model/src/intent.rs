use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Navigation intent carried by a control or produced from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NavigationIntent {
    Next,
    Previous,
    Play,
    Pause,
    Stop,
}

impl NavigationIntent {
    pub const ALL: [Self; 5] = [
        Self::Next,
        Self::Previous,
        Self::Play,
        Self::Pause,
        Self::Stop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
        }
    }

    /// Whether this intent moves the visible window (as opposed to
    /// controlling autoplay).
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Next | Self::Previous)
    }
}

impl Display for NavigationIntent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationIntent {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|intent| intent.as_str() == s)
            .ok_or_else(|| ModelError::UnknownIntent(s.to_string()))
    }
}

/// Keys the carousel reacts to. Everything else is ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKey {
    ArrowLeft,
    ArrowRight,
}

impl NavigationKey {
    /// Map a DOM-style key name (`"ArrowLeft"`, `"ArrowRight"`).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }

    pub fn intent(self) -> NavigationIntent {
        match self {
            Self::ArrowLeft => NavigationIntent::Previous,
            Self::ArrowRight => NavigationIntent::Next,
        }
    }
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Direction along which a carousel lays out and slides its items.
///
/// Config files and environment variables share one vocabulary: names are
/// read through [`FromStr`], written lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "lowercase", try_from = "String")
)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Pick the dimension of `size` that lies along this axis: width for
    /// horizontal carousels, height for vertical ones.
    #[inline]
    pub fn extent_of(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Name of the measured dimension, as used in log output.
    pub fn dimension(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Axis {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "horiz" => Ok(Axis::Horizontal),
            "vertical" | "vert" => Ok(Axis::Vertical),
            _ => Err(ModelError::UnknownAxis(s.to_string())),
        }
    }
}

impl TryFrom<String> for Axis {
    type Error = ModelError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Bounding size reported by the host for an item or the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A size that only carries a value along `axis`; the cross dimension
    /// is left at zero.
    pub fn along(axis: Axis, extent: f64) -> Self {
        match axis {
            Axis::Horizontal => Self::new(extent, 0.0),
            Axis::Vertical => Self::new(0.0, extent),
        }
    }
}

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum CarouselConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl CarouselConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::EnvPath(path) | Self::File(path) => Some(path),
            Self::Default | Self::EnvInline => None,
        }
    }
}

impl fmt::Display for CarouselConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "$REVOLVE_CONFIG_PATH ({})", path.display())
            }
            Self::EnvInline => f.write_str("$REVOLVE_CONFIG_JSON"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

use std::fmt::{self, Display};

/// Errors produced by model parsing and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownAxis(String),
    UnknownIntent(String),
    InvalidOption { field: &'static str, reason: String },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownAxis(raw) => {
                write!(f, "unknown carousel axis: {raw:?}")
            }
            ModelError::UnknownIntent(raw) => {
                write!(f, "unknown navigation intent: {raw:?}")
            }
            ModelError::InvalidOption { field, reason } => {
                write!(f, "invalid carousel option `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;

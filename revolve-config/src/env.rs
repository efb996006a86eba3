//! Per-field `REVOLVE_*` environment overrides.

use std::num::ParseIntError;
use std::time::Duration;

use revolve_model::{Axis, CarouselOptions, ModelError};
use thiserror::Error;

pub const AXIS_VAR: &str = "REVOLVE_AXIS";
pub const INTERVAL_VAR: &str = "REVOLVE_INTERVAL";
pub const STEP_SIZE_VAR: &str = "REVOLVE_STEP_SIZE";
pub const AUTOPLAY_VAR: &str = "REVOLVE_AUTOPLAY";
pub const PAUSE_ON_HOVER_VAR: &str = "REVOLVE_PAUSE_ON_HOVER";
pub const DEBOUNCE_VAR: &str = "REVOLVE_DEBOUNCE";

/// Every variable [`EnvOverrides`] reads.
pub const ENV_VARS: &[&str] = &[
    AXIS_VAR,
    INTERVAL_VAR,
    STEP_SIZE_VAR,
    AUTOPLAY_VAR,
    PAUSE_ON_HOVER_VAR,
    DEBOUNCE_VAR,
];

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("{var}: {source}")]
    Axis {
        var: &'static str,
        source: ModelError,
    },

    #[error("{var}={value:?} is not a boolean (use true/false, 1/0, yes/no, on/off)")]
    Bool { var: &'static str, value: String },

    #[error("{var}={value:?} is not a whole number: {source}")]
    Integer {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },

    #[error("{var}={value:?} is not a duration: {source}")]
    Duration {
        var: &'static str,
        value: String,
        source: humantime::DurationError,
    },
}

/// Values taken from the environment; `None` leaves the field alone.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvOverrides {
    pub axis: Option<Axis>,
    pub interval: Option<Duration>,
    pub step_size: Option<usize>,
    pub autoplay: Option<bool>,
    pub pause_on_hover: Option<bool>,
    pub debounce: Option<Duration>,
}

impl EnvOverrides {
    /// Read overrides from the process environment.
    pub fn gather() -> Result<Self, OverrideError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OverrideError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Ok(Self {
            axis: read(AXIS_VAR)
                .map(|raw| {
                    raw.parse::<Axis>()
                        .map_err(|source| OverrideError::Axis { var: AXIS_VAR, source })
                })
                .transpose()?,
            interval: read(INTERVAL_VAR)
                .map(|raw| parse_duration(INTERVAL_VAR, raw))
                .transpose()?,
            step_size: read(STEP_SIZE_VAR)
                .map(|raw| {
                    raw.parse::<usize>().map_err(|source| OverrideError::Integer {
                        var: STEP_SIZE_VAR,
                        value: raw,
                        source,
                    })
                })
                .transpose()?,
            autoplay: read(AUTOPLAY_VAR)
                .map(|raw| parse_bool(AUTOPLAY_VAR, raw))
                .transpose()?,
            pause_on_hover: read(PAUSE_ON_HOVER_VAR)
                .map(|raw| parse_bool(PAUSE_ON_HOVER_VAR, raw))
                .transpose()?,
            debounce: read(DEBOUNCE_VAR)
                .map(|raw| parse_duration(DEBOUNCE_VAR, raw))
                .transpose()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write every present override into `options`, returning the names of
    /// the variables that took effect.
    pub fn apply(&self, options: &mut CarouselOptions) -> Vec<&'static str> {
        let mut applied = Vec::new();
        if let Some(axis) = self.axis {
            options.axis = axis;
            applied.push(AXIS_VAR);
        }
        if let Some(interval) = self.interval {
            options.interval_ms = millis(interval);
            applied.push(INTERVAL_VAR);
        }
        if let Some(step_size) = self.step_size {
            options.step_size = step_size;
            applied.push(STEP_SIZE_VAR);
        }
        if let Some(autoplay) = self.autoplay {
            options.autoplay = autoplay;
            applied.push(AUTOPLAY_VAR);
        }
        if let Some(pause_on_hover) = self.pause_on_hover {
            options.pause_on_hover = pause_on_hover;
            applied.push(PAUSE_ON_HOVER_VAR);
        }
        if let Some(debounce) = self.debounce {
            options.debounce_ms = millis(debounce);
            applied.push(DEBOUNCE_VAR);
        }
        applied
    }
}

fn parse_bool(var: &'static str, raw: String) -> Result<bool, OverrideError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::Bool { var, value: raw }),
    }
}

/// A bare number is milliseconds; anything else goes through humantime
/// (`2s`, `1500ms`, `1m 30s`).
fn parse_duration(
    var: &'static str,
    raw: String,
) -> Result<Duration, OverrideError> {
    if let Ok(millis) = raw.parse::<u64>() {
        return Ok(Duration::from_millis(millis));
    }
    humantime::parse_duration(&raw).map_err(|source| OverrideError::Duration {
        var,
        value: raw,
        source,
    })
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

use std::time::Duration;

use crate::axis::Axis;
use crate::error::{ModelError, Result};

pub const DEFAULT_INTERVAL_MS: u64 = 2_000;
pub const DEFAULT_STEP_SIZE: usize = 1;
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Per-instance carousel options.
///
/// Unknown axis names fail deserialisation outright; numeric fields are
/// checked by [`CarouselOptions::validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Layout and sliding direction.
    pub axis: Axis,
    /// Autoplay period in milliseconds.
    pub interval_ms: u64,
    /// Positions moved per next/previous call.
    pub step_size: usize,
    /// Start autoplay once all items are loaded.
    pub autoplay: bool,
    /// Suspend autoplay while the pointer is over the carousel. Only has an
    /// effect when autoplay is enabled.
    pub pause_on_hover: bool,
    /// Trailing debounce window applied to raw input by the runtime driver.
    pub debounce_ms: u64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            axis: Axis::Horizontal,
            interval_ms: DEFAULT_INTERVAL_MS,
            step_size: DEFAULT_STEP_SIZE,
            autoplay: false,
            pause_on_hover: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl CarouselOptions {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Reject option sets the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.step_size == 0 {
            return Err(ModelError::InvalidOption {
                field: "step_size",
                reason: "must be at least 1".into(),
            });
        }
        if self.interval_ms == 0 {
            return Err(ModelError::InvalidOption {
                field: "interval_ms",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = CarouselOptions::default();
        assert_eq!(opts.axis, Axis::Horizontal);
        assert_eq!(opts.interval(), Duration::from_secs(2));
        assert_eq!(opts.step_size, 1);
        assert!(!opts.autoplay);
        assert!(!opts.pause_on_hover);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn zero_step_and_interval_are_rejected() {
        let err = CarouselOptions::default().with_step_size(0).validate();
        assert!(matches!(
            err,
            Err(ModelError::InvalidOption { field: "step_size", .. })
        ));
        let err = CarouselOptions::default().with_interval_ms(0).validate();
        assert!(matches!(
            err,
            Err(ModelError::InvalidOption { field: "interval_ms", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialises_partial_toml() {
        let opts: CarouselOptions =
            toml::from_str("axis = \"vert\"\nstep_size = 3\n").unwrap();
        assert_eq!(opts.axis, Axis::Vertical);
        assert_eq!(opts.step_size, 3);
        assert_eq!(opts.interval_ms, DEFAULT_INTERVAL_MS);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_axis_fails_deserialisation() {
        let res: std::result::Result<CarouselOptions, _> =
            serde_json::from_str(r#"{"axis":"diagonal"}"#);
        let err = res.unwrap_err();
        assert!(err.to_string().contains("unknown carousel axis"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn axis_names_match_the_string_parser() {
        let opts: CarouselOptions = toml::from_str("axis = \"Horizontal\"\n").unwrap();
        assert_eq!(opts.axis, Axis::Horizontal);
        let opts: CarouselOptions = serde_json::from_str(r#"{"axis":" Vert "}"#).unwrap();
        assert_eq!(opts.axis, Axis::Vertical);
        assert_eq!(
            serde_json::to_string(&Axis::Vertical).unwrap(),
            "\"vertical\""
        );
    }
}

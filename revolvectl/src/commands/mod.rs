pub mod play;
pub mod show_config;
pub mod simulate;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use revolve_core::{Carousel, MemoryHost};
use revolve_core::prelude::CarouselHost;
use revolve_model::{Axis, CarouselOptions, NavigationIntent, NavigationKey};

/// Item layout shared by the driving subcommands.
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Item extents along the axis, comma separated
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub extents: Vec<f64>,
    /// Viewport extent along the axis
    #[arg(long)]
    pub viewport: f64,
    /// Override the configured axis
    #[arg(long)]
    pub axis: Option<Axis>,
    /// Override the configured step size
    #[arg(long)]
    pub step: Option<usize>,
}

impl LayoutArgs {
    /// Configured options with the command line overrides applied.
    pub fn options(&self, mut base: CarouselOptions) -> Result<CarouselOptions> {
        if let Some(axis) = self.axis {
            base.axis = axis;
        }
        if let Some(step) = self.step {
            base.step_size = step;
        }
        base.validate().context("invalid carousel options")?;
        if let Some(bad) = self.extents.iter().find(|e| !e.is_finite() || **e < 0.0) {
            bail!("item extents must be finite and non-negative, got {bad}");
        }
        if !self.viewport.is_finite() || self.viewport < 0.0 {
            bail!("viewport must be finite and non-negative, got {}", self.viewport);
        }
        Ok(base)
    }

    pub fn host(&self, axis: Axis) -> MemoryHost {
        MemoryHost::new(axis, self.extents.clone(), self.viewport)
    }
}

/// A carousel with one media-free item per extent, ready to attach.
pub fn build<H: CarouselHost>(
    options: CarouselOptions,
    items: usize,
) -> Result<Carousel<H>> {
    let mut carousel = Carousel::new(options)?;
    for _ in 0..items {
        carousel.add_item(0)?;
    }
    Ok(carousel)
}

/// One step of a `simulate` script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Intent(NavigationIntent),
    Key(NavigationKey),
    /// Fire the running autoplay timer once.
    Tick,
    PointerEnter,
    PointerLeave,
}

impl FromStr for ScriptStep {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Ok(intent) = raw.parse::<NavigationIntent>() {
            return Ok(Self::Intent(intent));
        }
        if let Some(key) = NavigationKey::from_key_name(raw) {
            return Ok(Self::Key(key));
        }
        match raw {
            "tick" => Ok(Self::Tick),
            "enter" => Ok(Self::PointerEnter),
            "leave" => Ok(Self::PointerLeave),
            other => Err(format!("unknown script step {other:?}")),
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Intent(intent) => intent.as_str(),
            Self::Key(NavigationKey::ArrowLeft) => "ArrowLeft",
            Self::Key(NavigationKey::ArrowRight) => "ArrowRight",
            Self::Tick => "tick",
            Self::PointerEnter => "enter",
            Self::PointerLeave => "leave",
        };
        // Padding applies to the label, so format through `pad`.
        f.pad(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

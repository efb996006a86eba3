use std::io::Write;

use anyhow::{Context, Result};
use revolve_config::CarouselConfig;

use super::ConfigFormat;

pub fn run<W: Write>(
    config: &CarouselConfig,
    format: ConfigFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ConfigFormat::Toml => {
            writeln!(out, "# source: {}", config.source)?;
            if !config.env_overrides.is_empty() {
                writeln!(out, "# overrides: {}", config.env_overrides.join(", "))?;
            }
            let body = toml::to_string(&config.options)
                .context("failed to render options as toml")?;
            write!(out, "{body}")?;
        }
        ConfigFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, config)
                .context("failed to render configuration as json")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

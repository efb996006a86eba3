use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use revolve_config::{CarouselConfig, load_env_file};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{ConfigFormat, LayoutArgs, ScriptStep};

#[derive(Parser)]
#[command(
    name = "revolvectl",
    version,
    about = "Drive a Revolve carousel against an in-memory layout"
)]
struct Cli {
    /// Load environment overrides from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a navigation script and print every slide command
    Simulate {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Comma separated steps: next, previous, play, pause, stop, tick,
        /// enter, leave, ArrowLeft, ArrowRight
        #[arg(long, value_delimiter = ',', default_value = "next")]
        script: Vec<ScriptStep>,
    },
    /// Autoplay on the tokio runtime for a while and print what happened
    Play {
        #[command(flatten)]
        layout: LayoutArgs,
        /// Autoplay period, e.g. `500ms` or `2s`
        #[arg(long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,
        /// How long to let the carousel run
        #[arg(long, value_parser = humantime::parse_duration, default_value = "5s")]
        duration: Duration,
    },
    /// Print the resolved carousel options and where they came from
    ShowConfig {
        #[arg(long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let env_loaded = load_env_file(cli.env_file.as_deref())?;
    debug!(env_loaded, "environment prepared");

    let config = CarouselConfig::load_from_env()
        .context("failed to resolve carousel configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Simulate { layout, script } => {
            commands::simulate::run(&layout, config.options, &script, &mut out)?
        }
        Command::Play {
            layout,
            interval,
            duration,
        } => {
            commands::play::run(&layout, config.options, interval, duration, &mut out)
                .await?
        }
        Command::ShowConfig { format } => {
            commands::show_config::run(&config, format, &mut out)?
        }
    }

    out.flush()?;
    Ok(())
}

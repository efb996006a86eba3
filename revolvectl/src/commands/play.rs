use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use revolve_core::runtime::{CarouselRuntime, RuntimeHost};
use revolve_core::{Carousel, MemoryHost};
use revolve_model::CarouselOptions;
use tracing::info;

use super::{LayoutArgs, build};

/// Autoplay the layout on the tokio runtime for `duration`, then report
/// every slide the timer produced.
pub async fn run<W: Write>(
    layout: &LayoutArgs,
    base: CarouselOptions,
    interval: Option<Duration>,
    duration: Duration,
    out: &mut W,
) -> Result<()> {
    let mut options = layout.options(base)?.with_autoplay(true);
    if let Some(interval) = interval {
        options.interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
    }
    options.validate().context("invalid autoplay interval")?;

    let carousel: Carousel<RuntimeHost<MemoryHost>> =
        build(options, layout.extents.len())?;
    let host = layout.host(options.axis);
    let log = host.recorder();

    let (runtime, handle) = CarouselRuntime::new(carousel, host)?;
    let task = tokio::spawn(runtime.run());
    info!(
        duration = %humantime::format_duration(duration),
        interval_ms = options.interval_ms,
        "autoplay running"
    );

    tokio::time::sleep(duration).await;
    handle.shutdown();
    task.await.context("carousel runtime task failed")??;

    let transforms = log.snapshot().transforms;
    for (tick, cmd) in transforms.iter().enumerate() {
        writeln!(
            out,
            "tick {:>3}  offset={:>6.2}% ({:.1})",
            tick + 1,
            cmd.offset_percent,
            cmd.offset_absolute
        )?;
    }
    writeln!(out, "{} slides in {}", transforms.len(), humantime::format_duration(duration))?;
    Ok(())
}

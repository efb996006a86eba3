use std::io::Write;

use anyhow::Result;
use revolve_core::{Carousel, InputEvent, MemoryHost};
use revolve_core::prelude::CarouselService;
use revolve_model::CarouselOptions;

use super::{LayoutArgs, ScriptStep, build};

/// Run `script` against an in-memory host, writing one line per step.
pub fn run<W: Write>(
    layout: &LayoutArgs,
    base: CarouselOptions,
    script: &[ScriptStep],
    out: &mut W,
) -> Result<()> {
    let options = layout.options(base)?;
    let mut carousel: Carousel<MemoryHost> = build(options, layout.extents.len())?;
    let host = layout.host(options.axis);
    let log = host.recorder();
    carousel.attach(host)?;

    let visibility = carousel.engine().visibility();
    writeln!(
        out,
        "items={} viewport={} axis={} step={} all_visible={}",
        carousel.item_count(),
        layout.viewport,
        options.axis,
        options.step_size,
        visibility.all_visible()
    )?;

    for step in script {
        let before = log.transform_count();
        match *step {
            ScriptStep::Intent(intent) => carousel.dispatch(intent),
            ScriptStep::Key(key) => carousel.handle_input(InputEvent::Key(key)),
            ScriptStep::Tick => match log.active_timers().first() {
                Some(handle) => carousel.on_timer_tick(*handle),
                None => {
                    writeln!(out, "{step:<10} autoplay not running")?;
                    continue;
                }
            },
            ScriptStep::PointerEnter => carousel.pointer_enter(),
            ScriptStep::PointerLeave => carousel.pointer_leave(),
        }

        let snapshot = log.snapshot();
        let index = carousel.current_index();
        match snapshot.last_transform() {
            Some(cmd) if snapshot.transforms.len() > before => writeln!(
                out,
                "{step:<10} index={index:<3} offset={:>6.2}% ({:.1})",
                cmd.offset_percent, cmd.offset_absolute
            )?,
            _ => {
                let autoplay = if carousel.autoplay().is_running() {
                    "running"
                } else {
                    "stopped"
                };
                writeln!(out, "{step:<10} index={index:<3} no slide, autoplay {autoplay}")?
            }
        }
    }

    carousel.stop();
    carousel.detach();
    Ok(())
}

use std::collections::HashMap;
use std::time::Duration;

use revolve_contracts::{ControlSurface, RenderHost, TimerHost};
use revolve_model::{ControlId, Size, SlideCommand, TimerHandle};
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

use super::CarouselEvent;

/// Interval timers backed by spawned tokio tasks. Each tick is posted back
/// to the runtime's event queue as [`CarouselEvent::Tick`].
///
/// Holds only a weak sender so running timers never keep the event loop
/// alive on their own.
#[derive(Debug)]
pub(crate) struct TokioTimers {
    events: WeakUnboundedSender<CarouselEvent>,
    next_handle: u64,
    tasks: HashMap<TimerHandle, JoinHandle<()>>,
}

impl TokioTimers {
    pub(crate) fn new(events: WeakUnboundedSender<CarouselEvent>) -> Self {
        Self {
            events,
            next_handle: 0,
            tasks: HashMap::new(),
        }
    }

    pub(crate) fn active(&self) -> usize {
        self.tasks.len()
    }
}

impl TimerHost for TokioTimers {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            // First tick one full period after start.
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(tx) = events.upgrade() else {
                    break;
                };
                if tx.send(CarouselEvent::Tick(handle)).is_err() {
                    break;
                }
            }
            trace!(handle = handle.value(), "timer task finished");
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel_interval(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}

/// Host used inside [`CarouselRuntime`](super::CarouselRuntime): layout and
/// controls come from the wrapped render host, timers from tokio. Readiness
/// is forwarded to the wrapped host and published to every
/// [`CarouselHandle`](super::CarouselHandle).
#[derive(Debug)]
pub struct RuntimeHost<R> {
    inner: R,
    timers: TokioTimers,
    loaded: watch::Sender<bool>,
}

impl<R> RuntimeHost<R> {
    pub(crate) fn new(inner: R, timers: TokioTimers, loaded: watch::Sender<bool>) -> Self {
        Self {
            inner,
            timers,
            loaded,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of autoplay timers currently scheduled.
    pub fn active_timers(&self) -> usize {
        self.timers.active()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RenderHost> RenderHost for RuntimeHost<R> {
    fn measure_item(&self, index: usize) -> Size {
        self.inner.measure_item(index)
    }

    fn measure_viewport(&self) -> Size {
        self.inner.measure_viewport()
    }

    fn apply_transform(&mut self, command: &SlideCommand) {
        self.inner.apply_transform(command);
    }

    fn carousel_loaded(&mut self) {
        self.inner.carousel_loaded();
        self.loaded.send_replace(true);
    }
}

impl<R: ControlSurface> ControlSurface for RuntimeHost<R> {
    fn set_control_visible(&mut self, control: ControlId, visible: bool) {
        self.inner.set_control_visible(control, visible);
    }
}

impl<R> TimerHost for RuntimeHost<R> {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        self.timers.start_interval(period)
    }

    fn cancel_interval(&mut self, handle: TimerHandle) {
        self.timers.cancel_interval(handle);
    }
}

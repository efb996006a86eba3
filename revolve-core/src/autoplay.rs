//! Periodic autoplay with hover suspension.
//!
//! The scheduler tracks two things separately: whether autoplay is wanted
//! (`enabled`) and whether a timer is currently running. Hover only ever
//! touches the latter, so leaving the carousel resumes autoplay that the
//! pointer suspended.

use std::time::Duration;

use revolve_contracts::TimerHost;
use revolve_model::{CarouselOptions, TimerHandle};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    interval: Duration,
    enabled: bool,
    pause_on_hover: bool,
    handle: Option<TimerHandle>,
}

impl AutoplayScheduler {
    pub fn new(interval: Duration, enabled: bool, pause_on_hover: bool) -> Self {
        Self {
            interval,
            enabled,
            pause_on_hover,
            handle: None,
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(options.interval(), options.autoplay, options.pause_on_hover)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether autoplay is wanted, regardless of hover suspension.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn pauses_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Start the periodic timer. Returns `false` when one is already
    /// running; a second timer is never created.
    pub fn play<T>(&mut self, timer: &mut T) -> bool
    where
        T: TimerHost + ?Sized,
    {
        if self.handle.is_some() {
            trace!("autoplay already running");
            return false;
        }
        let handle = timer.start_interval(self.interval);
        debug!(
            handle = handle.value(),
            interval_ms = self.interval.as_millis() as u64,
            "autoplay started"
        );
        self.handle = Some(handle);
        true
    }

    /// Cancel the timer if one is running. Safe to call repeatedly and from
    /// inside a tick.
    pub fn pause<T>(&mut self, timer: &mut T)
    where
        T: TimerHost + ?Sized,
    {
        if let Some(handle) = self.handle.take() {
            timer.cancel_interval(handle);
            debug!(handle = handle.value(), "autoplay paused");
        }
    }

    pub fn stop<T>(&mut self, timer: &mut T)
    where
        T: TimerHost + ?Sized,
    {
        self.pause(timer);
    }

    /// Record whether autoplay is wanted. Does not start or stop a timer.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Turn autoplay off and cancel any running timer.
    pub fn disable<T>(&mut self, timer: &mut T)
    where
        T: TimerHost + ?Sized,
    {
        self.enabled = false;
        self.pause(timer);
    }

    pub fn pointer_enter<T>(&mut self, timer: &mut T)
    where
        T: TimerHost + ?Sized,
    {
        if self.pause_on_hover {
            self.stop(timer);
        }
    }

    pub fn pointer_leave<T>(&mut self, timer: &mut T)
    where
        T: TimerHost + ?Sized,
    {
        if self.pause_on_hover && self.enabled {
            self.play(timer);
        }
    }

    /// Whether a tick for `handle` should advance the carousel. Ticks from
    /// cancelled timers can still be queued in the host.
    pub fn accepts_tick(&self, handle: TimerHandle) -> bool {
        self.handle == Some(handle)
    }
}

//! In-memory host: fixed layout, recorded output, manually driven timers.
//!
//! Backs the `revolvectl simulate` command and the test suites. Everything
//! the carousel does to the host is appended to a shared [`HostLog`] that
//! stays readable after the host itself has moved into a carousel or a
//! runtime.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use revolve_contracts::{ControlSurface, RenderHost, TimerHost};
use revolve_model::{Axis, ControlId, Size, SlideCommand, TimerHandle};

#[derive(Debug, Default, Clone)]
pub struct HostLog {
    pub transforms: Vec<SlideCommand>,
    pub controls: BTreeMap<ControlId, bool>,
    pub timers_started: Vec<(TimerHandle, Duration)>,
    pub timers_cancelled: Vec<TimerHandle>,
    /// How many times the carousel reported itself loaded.
    pub loaded_signals: usize,
}

impl HostLog {
    /// Timers started and not yet cancelled.
    pub fn active_timers(&self) -> Vec<TimerHandle> {
        self.timers_started
            .iter()
            .map(|(handle, _)| *handle)
            .filter(|handle| !self.timers_cancelled.contains(handle))
            .collect()
    }

    pub fn last_transform(&self) -> Option<&SlideCommand> {
        self.transforms.last()
    }

    pub fn control_visible(&self, id: ControlId) -> Option<bool> {
        self.controls.get(&id).copied()
    }
}

/// Read side of a [`MemoryHost`]'s log.
#[derive(Debug, Clone)]
pub struct HostRecorder(Arc<Mutex<HostLog>>);

impl HostRecorder {
    pub fn snapshot(&self) -> HostLog {
        self.0.lock().clone()
    }

    pub fn transform_count(&self) -> usize {
        self.0.lock().transforms.len()
    }

    pub fn active_timers(&self) -> Vec<TimerHandle> {
        self.0.lock().active_timers()
    }

    pub fn loaded_signals(&self) -> usize {
        self.0.lock().loaded_signals
    }
}

#[derive(Debug, Clone)]
pub struct MemoryHost {
    axis: Axis,
    extents: Vec<f64>,
    viewport: f64,
    next_timer: u64,
    log: Arc<Mutex<HostLog>>,
}

impl MemoryHost {
    /// A host whose items measure `extents` along `axis` inside a viewport
    /// of `viewport`.
    pub fn new(axis: Axis, extents: Vec<f64>, viewport: f64) -> Self {
        Self {
            axis,
            extents,
            viewport,
            next_timer: 0,
            log: Arc::new(Mutex::new(HostLog::default())),
        }
    }

    pub fn uniform(axis: Axis, count: usize, extent: f64, viewport: f64) -> Self {
        Self::new(axis, vec![extent; count], viewport)
    }

    pub fn item_count(&self) -> usize {
        self.extents.len()
    }

    pub fn recorder(&self) -> HostRecorder {
        HostRecorder(Arc::clone(&self.log))
    }
}

impl RenderHost for MemoryHost {
    fn measure_item(&self, index: usize) -> Size {
        Size::along(self.axis, self.extents.get(index).copied().unwrap_or(0.0))
    }

    fn measure_viewport(&self) -> Size {
        Size::along(self.axis, self.viewport)
    }

    fn apply_transform(&mut self, command: &SlideCommand) {
        self.log.lock().transforms.push(*command);
    }

    fn carousel_loaded(&mut self) {
        self.log.lock().loaded_signals += 1;
    }
}

impl ControlSurface for MemoryHost {
    fn set_control_visible(&mut self, control: ControlId, visible: bool) {
        self.log.lock().controls.insert(control, visible);
    }
}

impl TimerHost for MemoryHost {
    fn start_interval(&mut self, period: Duration) -> TimerHandle {
        self.next_timer += 1;
        let handle = TimerHandle(self.next_timer);
        self.log.lock().timers_started.push((handle, period));
        handle
    }

    fn cancel_interval(&mut self, handle: TimerHandle) {
        self.log.lock().timers_cancelled.push(handle);
    }
}

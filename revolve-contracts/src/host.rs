use std::time::Duration;

use revolve_model::{ControlId, SlideCommand, Size, TimerHandle};

/// Layout side of the host.
pub trait RenderHost {
    /// Bounding size of the item at `index`.
    fn measure_item(&self, index: usize) -> Size;
    /// Bounding size of the viewport the items scroll through.
    fn measure_viewport(&self) -> Size;
    /// Move the item strip. The engine never mutates presentation itself.
    fn apply_transform(&mut self, command: &SlideCommand);
    /// Every item has finished loading and the carousel measured itself
    /// against this host. Fires once per attached host.
    fn carousel_loaded(&mut self) {}
}

/// Where navigation controls (buttons) live.
pub trait ControlSurface {
    fn set_control_visible(&mut self, control: ControlId, visible: bool);
}

/// Periodic timers owned by the host's event loop.
///
/// Ticks are delivered back to the carousel with the handle returned here.
/// After `cancel_interval`, the host must not deliver further ticks for that
/// handle; stray ones are ignored by the carousel anyway.
pub trait TimerHost {
    fn start_interval(&mut self, period: Duration) -> TimerHandle;
    fn cancel_interval(&mut self, handle: TimerHandle);
}

/// Everything a carousel instance needs from its host.
pub trait CarouselHost: RenderHost + ControlSurface + TimerHost {}

impl<T> CarouselHost for T where T: RenderHost + ControlSurface + TimerHost {}

//! Trait surfaces that describe how a carousel talks to the world around it.
//!
//! The engine never touches presentation. Everything it needs from the UI
//! runtime (measurements, transforms, control visibility, timers) comes in
//! through the host traits here, and everything it offers back to buttons
//! and external controllers goes out through [`CarouselService`].

pub mod host;
pub mod service;

pub use host::{CarouselHost, ControlSurface, RenderHost, TimerHost};
pub use service::CarouselService;

/// Frequently used trait combinators for host and engine crates.
pub mod prelude {
    pub use super::host::{CarouselHost, ControlSurface, RenderHost, TimerHost};
    pub use super::service::CarouselService;
    pub use revolve_model::prelude::*;
}

//! Engine/host focused snapshot of the model surface.
//! Prefer importing from this module when wiring a carousel into a host.

pub use super::axis::{Axis, Size};
pub use super::error::ModelError;
pub use super::intent::{NavigationIntent, NavigationKey};
pub use super::item::{ControlId, Item, TimerHandle};
pub use super::media::MediaEvent;
pub use super::options::CarouselOptions;
pub use super::slide::SlideCommand;

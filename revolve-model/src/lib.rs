//! Core data model definitions shared across Revolve crates.
#![allow(missing_docs)]

pub mod axis;
pub mod error;
pub mod intent;
pub mod item;
pub mod media;
pub mod options;
pub mod prelude;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use axis::{Axis, Size};
pub use error::{ModelError, Result as ModelResult};
pub use intent::{NavigationIntent, NavigationKey};
pub use item::{ControlId, Item, TimerHandle};
pub use media::MediaEvent;
pub use options::CarouselOptions;
pub use slide::SlideCommand;

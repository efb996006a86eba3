//! # Revolve Core
//!
//! Host-agnostic carousel engine: decides when and how far a strip of items
//! should slide inside a fixed viewport, and keeps autoplay, controls and
//! load gating consistent with that.
//!
//! ## Overview
//!
//! - **Visibility**: which items fit in the viewport from a given position
//! - **Navigation**: wrap-around next/previous with configurable step size
//! - **Autoplay**: periodic advance with optional hover suspension
//! - **Load gating**: nothing is measured until every item's media settled
//! - **Input**: control and keyboard events mapped to navigation intents
//!
//! The engine never renders anything. It talks to the UI through the host
//! traits in `revolve-contracts`; [`memory::MemoryHost`] is an in-process
//! implementation used by the CLI and the tests.
//!
//! ## Feature Flags
//!
//! - `runtime` (default): tokio event loop with real timers and input
//!   debouncing, see [`runtime`]
//! - `serde`: serde support for the model types
//!
//! ## Examples
//!
//! ```
//! use revolve_core::prelude::*;
//!
//! let mut carousel = Carousel::new(CarouselOptions::default())?;
//! for _ in 0..10 {
//!     carousel.add_item(0)?;
//! }
//! let host = MemoryHost::uniform(Axis::Horizontal, 10, 100.0, 350.0);
//! let log = host.recorder();
//! carousel.attach(host)?;
//!
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! carousel.previous();
//! carousel.previous();
//! assert_eq!(carousel.current_index(), 7);
//! assert_eq!(log.snapshot().last_transform().map(|c| c.offset_percent), Some(70.0));
//! # Ok::<(), revolve_core::CarouselError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod autoplay;
pub mod carousel;
pub mod error;
pub mod extent;
pub mod input;
pub mod load_barrier;
pub mod memory;
pub mod navigation;
pub mod registry;
pub mod visibility;

/// Tokio-driven carousel event loop
#[cfg(feature = "runtime")]
#[cfg_attr(docsrs, doc(cfg(feature = "runtime")))]
pub mod runtime;

pub use autoplay::AutoplayScheduler;
pub use carousel::Carousel;
pub use error::{CarouselError, Result};
pub use extent::ExtentModel;
pub use input::{InputDispatcher, InputEvent};
pub use load_barrier::{LoadBarrier, Ready};
pub use memory::{HostLog, HostRecorder, MemoryHost};
pub use navigation::NavigationEngine;
pub use registry::{CarouselKey, CarouselRegistry};
pub use visibility::VisibilityCalculator;

#[cfg(feature = "runtime")]
pub use runtime::{CarouselEvent, CarouselHandle, CarouselRuntime, RuntimeHost};

pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::error::CarouselError;
    pub use crate::input::InputEvent;
    pub use crate::memory::MemoryHost;
    pub use crate::navigation::NavigationEngine;
    pub use crate::registry::{CarouselKey, CarouselRegistry};
    pub use revolve_contracts::prelude::*;

    #[cfg(feature = "runtime")]
    pub use crate::runtime::{CarouselEvent, CarouselHandle, CarouselRuntime};
}

/// A carousel item as tracked by the engine.
///
/// `extent` stays `None` until the first measurement pass after every
/// item's media has finished loading. Only the measurement pass writes it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Item {
    pub index: usize,
    pub extent: Option<f64>,
    pub loaded: bool,
}

impl Item {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            extent: None,
            loaded: false,
        }
    }

    pub fn is_measured(&self) -> bool {
        self.extent.is_some()
    }
}

/// Identifies a navigation control (button) bound to a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlId(pub u32);

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

/// Opaque handle for a periodic timer owned by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

impl TimerHandle {
    pub fn value(&self) -> u64 {
        self.0
    }
}

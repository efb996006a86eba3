//! Completion counter that gates layout-dependent work.
//!
//! Used at two levels: each item counts its embedded media, and each
//! carousel counts its items.

use tracing::trace;

/// Returned exactly once per barrier, when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the barrier only reports readiness once"]
pub struct Ready;

#[derive(Debug, Default, Clone)]
pub struct LoadBarrier {
    expected: Option<usize>,
    completed: usize,
    fired: bool,
}

impl LoadBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of completions to wait for.
    ///
    /// Opens immediately when `expected == 0`. Registering again after the
    /// barrier opened has no effect.
    pub fn register(&mut self, expected: usize) -> Option<Ready> {
        if self.fired {
            trace!(expected, "load barrier already open, ignoring register");
            return None;
        }
        self.expected = Some(expected);
        self.open_if_complete()
    }

    /// Count one completion. Signals before `register` and after the
    /// barrier opened are ignored.
    pub fn signal(&mut self) -> Option<Ready> {
        if self.fired || self.expected.is_none() {
            trace!(
                fired = self.fired,
                "ignoring load signal outside the counting window"
            );
            return None;
        }
        self.completed += 1;
        self.open_if_complete()
    }

    pub fn is_ready(&self) -> bool {
        self.fired
    }

    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    fn open_if_complete(&mut self) -> Option<Ready> {
        let expected = self.expected?;
        if self.completed >= expected {
            self.fired = true;
            Some(Ready)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_barrier_opens_on_register() {
        let mut barrier = LoadBarrier::new();
        assert_eq!(barrier.register(0), Some(Ready));
        assert!(barrier.is_ready());
        assert_eq!(barrier.signal(), None);
        assert_eq!(barrier.register(0), None);
    }

    #[test]
    fn opens_on_exact_count_only() {
        let mut barrier = LoadBarrier::new();
        assert_eq!(barrier.register(3), None);
        assert_eq!(barrier.signal(), None);
        assert_eq!(barrier.signal(), None);
        assert!(!barrier.is_ready());
        assert_eq!(barrier.signal(), Some(Ready));
        // A fourth, spurious signal neither re-fires nor counts.
        assert_eq!(barrier.signal(), None);
        assert_eq!(barrier.completed(), 3);
    }

    #[test]
    fn signals_before_register_are_dropped() {
        let mut barrier = LoadBarrier::new();
        assert_eq!(barrier.signal(), None);
        assert_eq!(barrier.completed(), 0);
        assert_eq!(barrier.register(1), None);
        assert_eq!(barrier.signal(), Some(Ready));
    }
}

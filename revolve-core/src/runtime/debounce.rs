//! Trailing-edge input debouncing.
//!
//! Each control is its own stream, and the keyboard is one shared stream.
//! Within a stream only the last event of a burst is emitted, once the
//! stream has been quiet for the whole window.

use std::collections::HashMap;
use std::time::Duration;

use revolve_model::ControlId;
use tokio::time::Instant;

use crate::input::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Source {
    Control(ControlId),
    Keyboard,
}

impl Source {
    fn of(event: &InputEvent) -> Self {
        match event {
            InputEvent::Control(id) => Self::Control(*id),
            InputEvent::Key(_) => Self::Keyboard,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Debouncer {
    window: Duration,
    pending: HashMap<Source, (InputEvent, Instant)>,
}

impl Debouncer {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    /// Queue `event`, replacing whatever its stream had pending. Returns the
    /// event straight back when debouncing is switched off.
    pub(crate) fn push(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<InputEvent> {
        if self.window.is_zero() {
            return Some(event);
        }
        self.pending
            .insert(Source::of(&event), (event, now + self.window));
        None
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|(_, deadline)| *deadline).min()
    }

    /// Drain every event whose quiet window has elapsed, oldest first.
    pub(crate) fn take_due(&mut self, now: Instant) -> Vec<InputEvent> {
        let mut due: Vec<(Instant, InputEvent)> = Vec::new();
        self.pending.retain(|_, (event, deadline)| {
            if *deadline <= now {
                due.push((*deadline, *event));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        due.into_iter().map(|(_, event)| event).collect()
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }
}

//! Navigation controls and keyboard input.
//!
//! Controls carry the raw intent string they were declared with; it is
//! parsed at dispatch time so a misconfigured control degrades to a logged
//! no-op instead of failing setup.

use std::collections::BTreeMap;

use revolve_contracts::ControlSurface;
use revolve_model::{ControlId, NavigationIntent, NavigationKey};
use tracing::{debug, error, warn};

/// Input already debounced by the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A navigation control was activated (clicked).
    Control(ControlId),
    /// A navigation key was released.
    Key(NavigationKey),
}

#[derive(Debug, Clone)]
struct ControlBinding {
    intent: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct InputDispatcher {
    controls: BTreeMap<ControlId, ControlBinding>,
    attached: bool,
    revealed: bool,
}

impl InputDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a control to an intent. Binding an already known control
    /// replaces its intent; it never registers a second handler. Returns
    /// `true` for a new binding.
    pub fn bind_control(&mut self, id: ControlId, intent: Option<&str>) -> bool {
        let binding = ControlBinding {
            intent: intent.map(str::to_owned),
        };
        let fresh = self.controls.insert(id, binding).is_none();
        if !fresh {
            debug!(%id, "control re-bound, replacing intent");
        }
        fresh
    }

    pub fn unbind_control(&mut self, id: ControlId) -> bool {
        self.controls.remove(&id).is_some()
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.controls.keys().copied()
    }

    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Hook the carousel service up to the controls.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether controls are currently shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Resolve an input event to the intent it should trigger, if any.
    pub fn resolve(&self, event: &InputEvent) -> Option<NavigationIntent> {
        if !self.attached {
            error!(?event, "carousel service has not been attached");
            return None;
        }

        match event {
            InputEvent::Key(key) => Some(key.intent()),
            InputEvent::Control(id) => {
                let Some(binding) = self.controls.get(id) else {
                    warn!(%id, "input from an unbound control");
                    return None;
                };
                match binding.intent.as_deref().map(str::parse::<NavigationIntent>) {
                    Some(Ok(intent)) => Some(intent),
                    Some(Err(err)) => {
                        warn!(%id, %err, "navigation type isn't supported");
                        None
                    }
                    None => {
                        warn!(%id, "control has no navigation type");
                        None
                    }
                }
            }
        }
    }

    /// Hide every control. Controls always start hidden.
    pub fn conceal<S>(&mut self, surface: &mut S)
    where
        S: ControlSurface + ?Sized,
    {
        self.revealed = false;
        self.apply_visibility(surface);
    }

    /// Show every control.
    pub fn reveal<S>(&mut self, surface: &mut S)
    where
        S: ControlSurface + ?Sized,
    {
        self.revealed = true;
        self.apply_visibility(surface);
    }

    /// Push the current visibility to a single control, e.g. one bound
    /// after the carousel became ready.
    pub fn sync_control<S>(&self, id: ControlId, surface: &mut S)
    where
        S: ControlSurface + ?Sized,
    {
        surface.set_control_visible(id, self.revealed);
    }

    fn apply_visibility<S>(&self, surface: &mut S)
    where
        S: ControlSurface + ?Sized,
    {
        for id in self.controls.keys() {
            surface.set_control_visible(*id, self.revealed);
        }
    }
}

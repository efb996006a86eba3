//! Tokio event loop that drives a [`Carousel`] from a message queue.
//!
//! The runtime owns the carousel and a render host. Everything else (media
//! load notifications, clicks, key releases, pointer hover, programmatic
//! commands) arrives as [`CarouselEvent`]s through a [`CarouselHandle`].
//! Autoplay timers are tokio tasks posting ticks into the same queue, so
//! all carousel state is touched from one task only.
//!
//! Raw input is debounced with the carousel's `debounce_ms` window before it
//! is resolved. Programmatic commands bypass the debounce.
//!
//! The loop exits on [`CarouselEvent::Shutdown`] or once every handle has
//! been dropped, detaching the carousel and handing the render host back.
//!
//! Handles also observe readiness: [`CarouselHandle::loaded`] resolves once
//! every item has finished loading.

mod debounce;
mod timer;

use revolve_contracts::{CarouselService, ControlSurface, RenderHost};
use revolve_model::{
    ControlId, MediaEvent, NavigationIntent, NavigationKey, TimerHandle,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

use crate::carousel::Carousel;
use crate::error::{CarouselError, Result};
use crate::input::InputEvent;

use self::debounce::Debouncer;
use self::timer::TokioTimers;
pub use self::timer::RuntimeHost;

/// Messages accepted by a running carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// A media element inside `item` finished loading or failed.
    Media { item: usize, event: MediaEvent },
    /// Raw control click or key release, subject to debouncing.
    Input(InputEvent),
    PointerEnter,
    PointerLeave,
    /// Autoplay timer tick.
    Tick(TimerHandle),
    /// Programmatic navigation, applied immediately.
    Command(NavigationIntent),
    Shutdown,
}

pub struct CarouselRuntime<R>
where
    R: RenderHost + ControlSurface,
{
    carousel: Carousel<RuntimeHost<R>>,
    render: R,
    events: UnboundedReceiver<CarouselEvent>,
    sender: mpsc::WeakUnboundedSender<CarouselEvent>,
    loaded: watch::Sender<bool>,
    debounce: Debouncer,
}

impl<R> CarouselRuntime<R>
where
    R: RenderHost + ControlSurface,
{
    /// Wrap an unattached carousel. It is attached to `render` when
    /// [`run`](Self::run) starts.
    pub fn new(
        carousel: Carousel<RuntimeHost<R>>,
        render: R,
    ) -> Result<(Self, CarouselHandle)> {
        if carousel.is_attached() {
            return Err(CarouselError::AlreadyAttached);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        let (loaded, loaded_rx) = watch::channel(false);
        let debounce = Debouncer::new(carousel.options().debounce());
        let runtime = Self {
            carousel,
            render,
            events: rx,
            sender: tx.downgrade(),
            loaded,
            debounce,
        };
        let handle = CarouselHandle {
            tx,
            loaded: loaded_rx,
        };
        Ok((runtime, handle))
    }

    /// Attach, process events until shutdown, then detach and return the
    /// render host.
    pub async fn run(self) -> Result<R> {
        let Self {
            mut carousel,
            render,
            mut events,
            sender,
            loaded,
            mut debounce,
        } = self;

        let host = RuntimeHost::new(render, TokioTimers::new(sender), loaded);
        carousel.attach(host)?;
        debug!("carousel runtime started");

        loop {
            let deadline = debounce.next_deadline();
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else {
                        debug!("all carousel handles dropped");
                        break;
                    };
                    if !Self::apply(&mut carousel, &mut debounce, event) {
                        break;
                    }
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    for input in debounce.take_due(Instant::now()) {
                        carousel.handle_input(input);
                    }
                }
            }
        }

        if debounce.pending() > 0 {
            debug!(pending = debounce.pending(), "dropping debounced input on shutdown");
        }
        let host = carousel.detach().ok_or(CarouselError::NotAttached)?;
        info!("carousel runtime stopped");
        Ok(host.into_inner())
    }

    fn apply(
        carousel: &mut Carousel<RuntimeHost<R>>,
        debounce: &mut Debouncer,
        event: CarouselEvent,
    ) -> bool {
        match event {
            CarouselEvent::Media { item, event } => {
                if let Err(err) = carousel.media_event(item, event) {
                    warn!(item, %err, "dropping media event");
                }
            }
            CarouselEvent::Input(input) => {
                if let Some(input) = debounce.push(input, Instant::now()) {
                    carousel.handle_input(input);
                }
            }
            CarouselEvent::PointerEnter => carousel.pointer_enter(),
            CarouselEvent::PointerLeave => carousel.pointer_leave(),
            CarouselEvent::Tick(handle) => carousel.on_timer_tick(handle),
            CarouselEvent::Command(intent) => carousel.dispatch(intent),
            CarouselEvent::Shutdown => return false,
        }
        true
    }
}

impl<R> std::fmt::Debug for CarouselRuntime<R>
where
    R: RenderHost + ControlSurface,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRuntime")
            .field("carousel", &self.carousel)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

/// Cloneable sender side of a [`CarouselRuntime`].
///
/// Every method returns `false` once the runtime has stopped.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    tx: UnboundedSender<CarouselEvent>,
    loaded: watch::Receiver<bool>,
}

impl CarouselHandle {
    pub fn send(&self, event: CarouselEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn media_loaded(&self, item: usize) -> bool {
        self.send(CarouselEvent::Media {
            item,
            event: MediaEvent::Loaded,
        })
    }

    pub fn media_failed(&self, item: usize) -> bool {
        self.send(CarouselEvent::Media {
            item,
            event: MediaEvent::Failed,
        })
    }

    pub fn click(&self, control: ControlId) -> bool {
        self.send(CarouselEvent::Input(InputEvent::Control(control)))
    }

    pub fn key_up(&self, key: NavigationKey) -> bool {
        self.send(CarouselEvent::Input(InputEvent::Key(key)))
    }

    pub fn pointer_enter(&self) -> bool {
        self.send(CarouselEvent::PointerEnter)
    }

    pub fn pointer_leave(&self) -> bool {
        self.send(CarouselEvent::PointerLeave)
    }

    pub fn shutdown(&self) -> bool {
        self.send(CarouselEvent::Shutdown)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Whether every item has finished loading.
    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    /// Wait until every item has finished loading. Returns `false` if the
    /// runtime stopped first.
    pub async fn loaded(&self) -> bool {
        let mut loaded = self.loaded.clone();
        let ready = loaded.wait_for(|ready| *ready).await.is_ok();
        ready
    }
}

impl CarouselService for CarouselHandle {
    fn next(&mut self) {
        self.send(CarouselEvent::Command(NavigationIntent::Next));
    }

    fn previous(&mut self) {
        self.send(CarouselEvent::Command(NavigationIntent::Previous));
    }

    fn play(&mut self) {
        self.send(CarouselEvent::Command(NavigationIntent::Play));
    }

    fn pause(&mut self) {
        self.send(CarouselEvent::Command(NavigationIntent::Pause));
    }

    fn stop(&mut self) {
        self.send(CarouselEvent::Command(NavigationIntent::Stop));
    }
}

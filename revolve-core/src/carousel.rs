//! One carousel instance: engine, autoplay, load gating and input wired to
//! a host.
//!
//! Lifecycle: construct with options, register items (with how many media
//! elements each embeds), bind controls, then [`Carousel::attach`] a host.
//! Nothing is measured and no navigation happens until every item has
//! finished loading. [`Carousel::detach`] (also run on drop) cancels the
//! autoplay timer and unhooks input; it is safe to call more than once.

use std::fmt;

use revolve_contracts::{CarouselHost, CarouselService};
use revolve_model::{
    CarouselOptions, ControlId, MediaEvent, NavigationIntent, SlideCommand,
    TimerHandle,
};
use tracing::{debug, error, info, trace, warn};

use crate::autoplay::AutoplayScheduler;
use crate::error::{CarouselError, Result};
use crate::input::{InputDispatcher, InputEvent};
use crate::load_barrier::LoadBarrier;
use crate::navigation::NavigationEngine;

pub struct Carousel<H: CarouselHost> {
    options: CarouselOptions,
    engine: NavigationEngine,
    autoplay: AutoplayScheduler,
    items_loaded: LoadBarrier,
    media: Vec<LoadBarrier>,
    input: InputDispatcher,
    host: Option<H>,
    ready: bool,
}

impl<H: CarouselHost> Carousel<H> {
    /// Create an empty carousel. Invalid options are rejected here, before
    /// anything is wired.
    pub fn new(options: CarouselOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            engine: NavigationEngine::new(options.axis, options.step_size),
            autoplay: AutoplayScheduler::from_options(&options),
            items_loaded: LoadBarrier::new(),
            media: Vec::new(),
            input: InputDispatcher::new(),
            host: None,
            ready: false,
            options,
        })
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    pub fn input(&self) -> &InputDispatcher {
        &self.input
    }

    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    pub fn item_count(&self) -> usize {
        self.engine.item_count()
    }

    /// All items loaded and measured at least once.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Register an item that embeds `media_count` media elements. Items
    /// without media count as loaded straight away.
    pub fn add_item(&mut self, media_count: usize) -> Result<usize> {
        if self.host.is_some() || self.items_loaded.expected().is_some() {
            return Err(CarouselError::ItemsFrozen);
        }
        let index = self.engine.extents_mut().push_item();
        let mut barrier = LoadBarrier::new();
        if barrier.register(media_count).is_some() {
            self.engine.extents_mut().mark_loaded(index);
        }
        self.media.push(barrier);
        trace!(index, media_count, "carousel item registered");
        Ok(index)
    }

    /// Bind a navigation control. The control is shown or hidden right
    /// away when a host is attached.
    pub fn bind_control(&mut self, id: ControlId, intent: Option<&str>) -> bool {
        let fresh = self.input.bind_control(id, intent);
        if let Some(host) = self.host.as_mut() {
            self.input.sync_control(id, host);
        }
        fresh
    }

    pub fn attach(&mut self, host: H) -> Result<()> {
        if self.host.is_some() {
            return Err(CarouselError::AlreadyAttached);
        }
        let host = self.host.insert(host);
        self.input.attach();
        self.input.conceal(host);
        info!(
            items = self.engine.item_count(),
            axis = %self.options.axis,
            step = self.options.step_size,
            "carousel attached"
        );

        if self.items_loaded.expected().is_none() {
            let mut ready = self
                .items_loaded
                .register(self.engine.item_count())
                .is_some();
            let already_loaded = self
                .engine
                .extents()
                .items()
                .iter()
                .filter(|item| item.loaded)
                .count();
            for _ in 0..already_loaded {
                ready |= self.items_loaded.signal().is_some();
            }
            if ready {
                self.items_ready();
            }
        } else if self.ready {
            self.on_ready();
        }
        Ok(())
    }

    /// Release the host: cancels autoplay and unhooks input. Returns `None`
    /// when nothing was attached.
    pub fn detach(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        self.autoplay.pause(&mut host);
        self.input.detach();
        info!("carousel detached");
        Some(host)
    }

    /// Record a load outcome for one media element of `item`.
    pub fn media_event(&mut self, item: usize, event: MediaEvent) -> Result<()> {
        let barrier = self
            .media
            .get_mut(item)
            .ok_or(CarouselError::UnknownItem(item))?;
        if event.is_failure() {
            debug!(item, "media failed to load, counting it as done");
        }
        if barrier.signal().is_none() {
            return Ok(());
        }

        self.engine.extents_mut().mark_loaded(item);
        debug!(item, "item media loaded");
        if self.items_loaded.signal().is_some() {
            self.items_ready();
        }
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if let Some(intent) = self.input.resolve(&event) {
            self.dispatch(intent);
        }
    }

    pub fn dispatch(&mut self, intent: NavigationIntent) {
        trace!(%intent, "dispatching");
        match intent {
            NavigationIntent::Next => self.next(),
            NavigationIntent::Previous => self.previous(),
            NavigationIntent::Play => self.play(),
            NavigationIntent::Pause => self.pause(),
            NavigationIntent::Stop => self.stop(),
        }
    }

    pub fn pointer_enter(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.autoplay.pointer_enter(host);
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.autoplay.pointer_leave(host);
        }
    }

    /// Autoplay tick delivered by the host's timer.
    pub fn on_timer_tick(&mut self, handle: TimerHandle) {
        if !self.autoplay.accepts_tick(handle) {
            trace!(handle = handle.value(), "ignoring stale autoplay tick");
            return;
        }
        self.next();
    }

    /// Turn autoplay on and start it (or start it once ready).
    pub fn enable_autoplay(&mut self) {
        self.autoplay.set_enabled(true);
        if self.ready {
            self.play();
        }
    }

    /// Turn autoplay off; hover no longer resumes it.
    pub fn disable_autoplay(&mut self) {
        match self.host.as_mut() {
            Some(host) => self.autoplay.disable(host),
            None => self.autoplay.set_enabled(false),
        }
    }

    fn items_ready(&mut self) {
        self.ready = true;
        self.on_ready();
    }

    fn on_ready(&mut self) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        self.engine.extents_mut().measure(&*host);
        let all_visible = self.engine.visibility().all_visible();
        info!(
            items = self.engine.item_count(),
            all_visible, "carousel items loaded"
        );
        // Controls stay hidden for good when nothing is cut off.
        if !all_visible {
            self.input.reveal(host);
        }
        host.carousel_loaded();
        if self.autoplay.is_enabled() {
            self.play();
        }
    }

    fn slide(&mut self, step: fn(&mut NavigationEngine) -> Option<SlideCommand>) {
        let Some(host) = self.host.as_mut() else {
            error!("navigation invoked without an attached host");
            return;
        };
        if !self.ready {
            debug!("carousel items still loading, ignoring navigation");
            return;
        }
        if let Some(command) = step(&mut self.engine) {
            host.apply_transform(&command);
        }
    }
}

impl<H: CarouselHost> CarouselService for Carousel<H> {
    fn next(&mut self) {
        self.slide(NavigationEngine::next);
    }

    fn previous(&mut self) {
        self.slide(NavigationEngine::previous);
    }

    fn play(&mut self) {
        if self.engine.item_count() == 0 {
            warn!("carousel items list empty, not starting autoplay");
            return;
        }
        let Some(host) = self.host.as_mut() else {
            error!("autoplay requested without an attached host");
            return;
        };
        self.autoplay.play(host);
    }

    fn pause(&mut self) {
        if let Some(host) = self.host.as_mut() {
            self.autoplay.pause(host);
        }
    }
}

impl<H: CarouselHost> Drop for Carousel<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

impl<H: CarouselHost> fmt::Debug for Carousel<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("options", &self.options)
            .field("engine", &self.engine)
            .field("autoplay", &self.autoplay)
            .field("items_loaded", &self.items_loaded)
            .field("input", &self.input)
            .field("attached", &self.host.is_some())
            .field("ready", &self.ready)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use super::*;
    use crate::memory::{HostRecorder, MemoryHost};
    use parking_lot::Mutex;
    use revolve_model::{Axis, NavigationKey};
    use tracing_subscriber::fmt::MakeWriter;

    const NEXT: ControlId = ControlId(1);
    const PREV: ControlId = ControlId(2);

    fn carousel(
        options: CarouselOptions,
        media: &[usize],
    ) -> Carousel<MemoryHost> {
        let mut carousel = Carousel::new(options).expect("valid options");
        for count in media {
            carousel.add_item(*count).expect("add item");
        }
        carousel.bind_control(NEXT, Some("next"));
        carousel.bind_control(PREV, Some("previous"));
        carousel
    }

    fn attach_uniform(
        carousel: &mut Carousel<MemoryHost>,
        viewport: f64,
    ) -> HostRecorder {
        let host =
            MemoryHost::uniform(Axis::Horizontal, carousel.item_count(), 100.0, viewport);
        let recorder = host.recorder();
        carousel.attach(host).expect("attach");
        recorder
    }

    #[test]
    fn items_without_media_are_ready_on_attach() {
        let mut c = carousel(CarouselOptions::default(), &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);
        assert!(c.is_ready());
        assert!(c.engine().extents().is_measured());
        let snapshot = log.snapshot();
        assert_eq!(snapshot.control_visible(NEXT), Some(true));
        assert_eq!(snapshot.control_visible(PREV), Some(true));
    }

    #[test]
    fn empty_carousel_is_ready_immediately_and_never_slides() {
        let mut c = carousel(CarouselOptions::default().with_autoplay(true), &[]);
        let log = attach_uniform(&mut c, 350.0);
        assert!(c.is_ready());
        c.next();
        c.previous();
        let snapshot = log.snapshot();
        assert!(snapshot.transforms.is_empty());
        assert!(snapshot.timers_started.is_empty());
        assert_eq!(snapshot.control_visible(NEXT), Some(false));
    }

    #[test]
    fn waits_for_every_media_element() {
        let mut c = carousel(CarouselOptions::default(), &[2, 0, 1]);
        let log = attach_uniform(&mut c, 150.0);
        assert!(!c.is_ready());

        c.media_event(0, MediaEvent::Loaded).unwrap();
        c.next();
        assert!(log.snapshot().transforms.is_empty());

        c.media_event(0, MediaEvent::Failed).unwrap();
        assert!(!c.is_ready());
        c.media_event(2, MediaEvent::Loaded).unwrap();
        assert!(c.is_ready());
        assert_eq!(log.snapshot().control_visible(NEXT), Some(true));

        // Late duplicates change nothing.
        c.media_event(2, MediaEvent::Loaded).unwrap();
        assert!(c.is_ready());
    }

    #[test]
    fn media_loaded_before_attach_is_counted_once() {
        let mut c = carousel(CarouselOptions::default(), &[1, 1]);
        c.media_event(0, MediaEvent::Loaded).unwrap();
        let _log = attach_uniform(&mut c, 150.0);
        assert!(!c.is_ready());
        c.media_event(1, MediaEvent::Loaded).unwrap();
        assert!(c.is_ready());
    }

    #[test]
    fn unknown_item_is_an_error() {
        let mut c = carousel(CarouselOptions::default(), &[1]);
        assert_eq!(
            c.media_event(4, MediaEvent::Loaded),
            Err(CarouselError::UnknownItem(4))
        );
    }

    #[test]
    fn items_are_frozen_once_attached() {
        let mut c = carousel(CarouselOptions::default(), &[0]);
        let _log = attach_uniform(&mut c, 50.0);
        assert_eq!(c.add_item(0), Err(CarouselError::ItemsFrozen));
        let host = MemoryHost::uniform(Axis::Horizontal, 1, 100.0, 50.0);
        assert_eq!(c.attach(host), Err(CarouselError::AlreadyAttached));
    }

    #[test]
    fn controls_stay_hidden_when_everything_fits() {
        let mut c = carousel(CarouselOptions::default(), &[0; 3]);
        let log = attach_uniform(&mut c, 350.0);
        assert_eq!(log.snapshot().control_visible(NEXT), Some(false));

        c.handle_input(InputEvent::Control(NEXT));
        assert!(log.snapshot().transforms.is_empty());
    }

    #[test]
    fn controls_bound_late_follow_current_visibility() {
        let mut c = carousel(CarouselOptions::default(), &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);
        c.bind_control(ControlId(7), Some("play"));
        assert_eq!(log.snapshot().control_visible(ControlId(7)), Some(true));
    }

    #[test]
    fn input_drives_navigation() {
        let mut c = carousel(CarouselOptions::default(), &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);

        c.handle_input(InputEvent::Control(NEXT));
        assert_eq!(c.current_index(), 1);
        c.handle_input(InputEvent::Key(NavigationKey::ArrowLeft));
        assert_eq!(c.current_index(), 0);
        c.handle_input(InputEvent::Control(PREV));
        assert_eq!(c.current_index(), 7);

        let transforms = log.snapshot().transforms;
        assert_eq!(transforms.len(), 3);
        assert_eq!(transforms[0].offset_percent, 10.0);
        assert_eq!(transforms[2].offset_percent, 70.0);
    }

    #[test]
    fn autoplay_starts_when_ready_and_advances_on_ticks() {
        let mut c = carousel(CarouselOptions::default().with_autoplay(true), &[1; 10]);
        let log = attach_uniform(&mut c, 350.0);
        assert!(log.active_timers().is_empty());

        for item in 0..10 {
            c.media_event(item, MediaEvent::Loaded).unwrap();
        }
        let timers = log.active_timers();
        assert_eq!(timers.len(), 1);

        c.on_timer_tick(timers[0]);
        c.on_timer_tick(timers[0]);
        assert_eq!(c.current_index(), 2);

        // A tick from some other timer is ignored.
        c.on_timer_tick(TimerHandle(999));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn hover_pauses_and_resumes_autoplay() {
        let options = CarouselOptions::default()
            .with_autoplay(true)
            .with_pause_on_hover(true);
        let mut c = carousel(options, &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);
        let first = log.active_timers()[0];

        c.pointer_enter();
        assert!(log.active_timers().is_empty());
        c.on_timer_tick(first);
        assert_eq!(c.current_index(), 0);

        c.pointer_leave();
        assert_eq!(log.active_timers().len(), 1);
    }

    #[test]
    fn hover_leave_resumes_only_when_autoplay_enabled() {
        let options = CarouselOptions::default().with_pause_on_hover(true);
        let mut c = carousel(options, &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);

        c.play();
        c.pointer_enter();
        c.pointer_leave();
        // Autoplay was never enabled, only played by hand.
        assert!(log.active_timers().is_empty());

        c.enable_autoplay();
        assert_eq!(log.active_timers().len(), 1);
        c.disable_autoplay();
        assert!(log.active_timers().is_empty());
    }

    #[test]
    fn detach_releases_timer_once() {
        let mut c = carousel(CarouselOptions::default().with_autoplay(true), &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);
        assert!(c.detach().is_some());
        assert!(c.detach().is_none());
        drop(c);

        let snapshot = log.snapshot();
        assert_eq!(snapshot.timers_started.len(), 1);
        assert_eq!(snapshot.timers_cancelled.len(), 1);
    }

    #[test]
    fn input_after_detach_is_ignored() {
        let mut c = carousel(CarouselOptions::default(), &[0; 10]);
        let log = attach_uniform(&mut c, 350.0);
        c.detach();
        c.handle_input(InputEvent::Control(NEXT));
        c.next();
        assert_eq!(c.current_index(), 0);
        assert!(log.snapshot().transforms.is_empty());
    }

    #[test]
    fn reattach_remeasures_and_resumes() {
        let mut c = carousel(CarouselOptions::default().with_autoplay(true), &[0; 10]);
        let _first = attach_uniform(&mut c, 350.0);
        c.next();
        c.detach();

        let second = attach_uniform(&mut c, 350.0);
        assert_eq!(second.active_timers().len(), 1);
        assert_eq!(second.snapshot().control_visible(NEXT), Some(true));
        c.next();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn loaded_is_reported_once_when_the_last_item_settles() {
        let mut c = carousel(CarouselOptions::default(), &[1, 0, 2]);
        let log = attach_uniform(&mut c, 150.0);
        c.media_event(0, MediaEvent::Loaded).unwrap();
        c.media_event(2, MediaEvent::Failed).unwrap();
        assert_eq!(log.loaded_signals(), 0);

        c.media_event(2, MediaEvent::Loaded).unwrap();
        assert_eq!(log.loaded_signals(), 1);
        c.media_event(2, MediaEvent::Loaded).unwrap();
        assert_eq!(log.loaded_signals(), 1);

        c.detach();
        let second = attach_uniform(&mut c, 150.0);
        assert_eq!(second.loaded_signals(), 1);
    }

    #[test]
    fn loaded_is_reported_even_when_everything_fits() {
        let mut c = carousel(CarouselOptions::default(), &[0, 0]);
        let log = attach_uniform(&mut c, 500.0);
        assert_eq!(log.loaded_signals(), 1);
        assert_eq!(log.snapshot().control_visible(NEXT), Some(false));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn logs_of(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn navigation_before_attach_is_reported_as_an_error() {
        let mut c = carousel(CarouselOptions::default(), &[0; 10]);
        let logs = logs_of(|| c.next());
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("without an attached host"), "{logs}");
        assert!(!logs.contains("still loading"), "{logs}");
    }

    #[test]
    fn navigation_while_loading_is_only_traced() {
        let mut c = carousel(CarouselOptions::default(), &[1; 10]);
        let _log = attach_uniform(&mut c, 350.0);
        let logs = logs_of(|| c.next());
        assert!(logs.contains("still loading"), "{logs}");
        assert!(!logs.contains("ERROR"), "{logs}");
    }

    #[test]
    fn invalid_options_fail_fast() {
        let err = Carousel::<MemoryHost>::new(
            CarouselOptions::default().with_step_size(0),
        )
        .unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));
    }
}

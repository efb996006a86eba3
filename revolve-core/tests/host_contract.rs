use std::time::Duration;

use mockall::predicate::eq;
use mockall::{Sequence, mock};
use revolve_contracts::{CarouselService, ControlSurface, RenderHost, TimerHost};
use revolve_core::{Carousel, InputEvent};
use revolve_model::{
    Axis, CarouselOptions, ControlId, MediaEvent, Size, SlideCommand,
    TimerHandle,
};

mock! {
    pub Host {}

    impl RenderHost for Host {
        fn measure_item(&self, index: usize) -> Size;
        fn measure_viewport(&self) -> Size;
        fn apply_transform(&mut self, command: &SlideCommand);
    }

    impl ControlSurface for Host {
        fn set_control_visible(&mut self, control: ControlId, visible: bool);
    }

    impl TimerHost for Host {
        fn start_interval(&mut self, period: Duration) -> TimerHandle;
        fn cancel_interval(&mut self, handle: TimerHandle);
    }
}

const NEXT: ControlId = ControlId(1);

/// Ten 100-wide items in a 350-wide viewport.
fn layout(host: &mut MockHost) {
    host.expect_measure_item()
        .returning(|_| Size::along(Axis::Horizontal, 100.0));
    host.expect_measure_viewport()
        .returning(|| Size::along(Axis::Horizontal, 350.0));
}

fn carousel(options: CarouselOptions, media: usize) -> Carousel<MockHost> {
    let mut carousel = Carousel::new(options).unwrap();
    for _ in 0..10 {
        carousel.add_item(media).unwrap();
    }
    carousel.bind_control(NEXT, Some("next"));
    carousel
}

#[test]
fn repeated_play_starts_a_single_timer() {
    let mut host = MockHost::new();
    layout(&mut host);
    host.expect_set_control_visible().return_const(());
    host.expect_start_interval()
        .with(eq(Duration::from_millis(1500)))
        .times(1)
        .return_const(TimerHandle(42));
    host.expect_cancel_interval()
        .with(eq(TimerHandle(42)))
        .times(1)
        .return_const(());

    let mut c = carousel(CarouselOptions::default().with_interval_ms(1500), 0);
    c.attach(host).unwrap();
    c.play();
    c.play();
    c.play();
    c.pause();
    c.pause();

    let host = c.detach().expect("attached");
    drop(host);
}

#[test]
fn teardown_cancels_the_running_timer() {
    let mut host = MockHost::new();
    layout(&mut host);
    host.expect_set_control_visible().return_const(());
    host.expect_start_interval().times(1).return_const(TimerHandle(7));
    host.expect_cancel_interval()
        .with(eq(TimerHandle(7)))
        .times(1)
        .return_const(());

    let mut c = carousel(CarouselOptions::default().with_autoplay(true), 0);
    c.attach(host).unwrap();
    assert!(c.autoplay().is_running());
    drop(c);
}

#[test]
fn nothing_is_measured_before_media_settles() {
    let mut host = MockHost::new();
    host.expect_measure_item().never();
    host.expect_measure_viewport().never();
    host.expect_apply_transform().never();
    host.expect_set_control_visible()
        .with(eq(NEXT), eq(false))
        .times(1)
        .return_const(());

    let mut c = carousel(CarouselOptions::default(), 2);
    c.attach(host).unwrap();
    c.next();
    c.handle_input(InputEvent::Control(NEXT));
    c.media_event(3, MediaEvent::Loaded).unwrap();

    let mut host = c.detach().expect("attached");
    host.checkpoint();
}

#[test]
fn controls_are_hidden_then_revealed_and_navigation_reaches_the_host() {
    let mut seq = Sequence::new();
    let mut host = MockHost::new();
    layout(&mut host);
    host.expect_set_control_visible()
        .with(eq(NEXT), eq(false))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_set_control_visible()
        .with(eq(NEXT), eq(true))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    host.expect_apply_transform()
        .withf(|cmd| cmd.axis == Axis::Horizontal && cmd.offset_percent == 10.0)
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut c = carousel(CarouselOptions::default(), 1);
    c.attach(host).unwrap();
    for item in 0..10 {
        let event = if item % 2 == 0 {
            MediaEvent::Loaded
        } else {
            MediaEvent::Failed
        };
        c.media_event(item, event).unwrap();
    }
    assert!(c.is_ready());
    c.handle_input(InputEvent::Control(NEXT));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn stale_ticks_do_not_navigate() {
    let mut host = MockHost::new();
    layout(&mut host);
    host.expect_set_control_visible().return_const(());
    let mut handles = 0;
    host.expect_start_interval().times(2).returning(move |_| {
        handles += 1;
        TimerHandle(handles)
    });
    host.expect_cancel_interval().times(2).return_const(());
    host.expect_apply_transform().times(1).return_const(());

    let options = CarouselOptions::default()
        .with_autoplay(true)
        .with_pause_on_hover(true);
    let mut c = carousel(options, 0);
    c.attach(host).unwrap();

    c.pointer_enter();
    c.pointer_leave();
    // Handle 1 was cancelled by the hover; only handle 2 is live.
    c.on_timer_tick(TimerHandle(1));
    c.on_timer_tick(TimerHandle(2));
    assert_eq!(c.current_index(), 1);
}

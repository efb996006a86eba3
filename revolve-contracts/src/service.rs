/// The capability handed to navigation controls and external controllers.
///
/// This is the only seam between the engine and UI chrome. Implementations
/// treat every call as safe to repeat; calls that cannot act (no items,
/// everything visible, not ready yet) are no-ops.
pub trait CarouselService {
    /// Advance the visible window by one step, wrapping at the end.
    fn next(&mut self);
    /// Retreat the visible window by one step, wrapping at the start.
    fn previous(&mut self);
    /// Start autoplay unless it is already running.
    fn play(&mut self);
    /// Cancel autoplay if it is running.
    fn pause(&mut self);
    /// Alias for [`CarouselService::pause`].
    fn stop(&mut self) {
        self.pause();
    }
}

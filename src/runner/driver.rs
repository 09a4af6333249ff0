use crate::runner::clock::{FrameClock, FrameHandle};

/// Start/stop state machine around the host frame clock.
///
/// Invariant: at most one live registration at any time. `ensure_running`
/// while live is a no-op, `stop` is idempotent, and a callback from a
/// cancelled registration is refused at `frame` entry — no tick runs after
/// `stop` returns.
#[derive(Debug, Default)]
pub struct LoopDriver {
    handle: Option<FrameHandle>,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Register the next frame if no registration is live.
    pub fn ensure_running(&mut self, clock: &mut impl FrameClock) {
        if self.handle.is_none() {
            self.handle = Some(clock.schedule());
            log::debug!("Loop started");
        }
    }

    /// Cancel the live registration, if any.
    pub fn stop(&mut self, clock: &mut impl FrameClock) {
        if let Some(handle) = self.handle.take() {
            clock.cancel(handle);
            log::debug!("Loop stopped");
        }
    }

    /// Entry point for a fired frame callback. Returns whether the tick
    /// should run; when it does, the next frame is already registered
    /// (cooperative self-rescheduling, not a fixed-interval timer).
    pub fn frame(&mut self, fired: FrameHandle, clock: &mut impl FrameClock) -> bool {
        if self.handle != Some(fired) {
            log::warn!("Ignoring stale frame callback {fired:?}");
            return false;
        }
        self.handle = Some(clock.schedule());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::clock::ManualClock;

    #[test]
    fn ensure_running_holds_a_single_handle() {
        let mut clock = ManualClock::new();
        let mut driver = LoopDriver::new();
        driver.ensure_running(&mut clock);
        let first = clock.pending();
        driver.ensure_running(&mut clock);
        assert_eq!(clock.pending(), first);
        assert!(driver.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = ManualClock::new();
        let mut driver = LoopDriver::new();
        driver.stop(&mut clock);
        driver.ensure_running(&mut clock);
        driver.stop(&mut clock);
        driver.stop(&mut clock);
        assert!(!driver.is_running());
        assert_eq!(clock.pending(), None);
    }

    #[test]
    fn frame_reschedules_before_the_tick() {
        let mut clock = ManualClock::new();
        let mut driver = LoopDriver::new();
        driver.ensure_running(&mut clock);
        let fired = clock.fire().unwrap();
        assert!(driver.frame(fired, &mut clock));
        assert!(clock.pending().is_some());
        assert_ne!(clock.pending(), Some(fired));
    }

    #[test]
    fn stale_callback_after_stop_is_refused() {
        let mut clock = ManualClock::new();
        let mut driver = LoopDriver::new();
        driver.ensure_running(&mut clock);
        // The frame fires, but stop() lands before the callback is serviced.
        let fired = clock.fire().unwrap();
        driver.stop(&mut clock);
        assert!(!driver.frame(fired, &mut clock));
        assert!(!driver.is_running());
        assert_eq!(clock.pending(), None);
    }
}

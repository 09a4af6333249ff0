/// Opaque token for one live frame registration. Handles are never reused,
/// which is what lets the loop driver refuse a late-arriving callback from a
/// registration that was already cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub u64);

/// The host's frame scheduling primitive (requestAnimationFrame-shaped).
///
/// Each registration fires at most once, roughly at the display refresh
/// cadence; exact timing is not a correctness requirement because the
/// simulation uses constant per-tick deltas.
pub trait FrameClock {
    /// Register a callback for the next frame.
    fn schedule(&mut self) -> FrameHandle;
    /// Cancel a registration. Cancelling an already-fired or unknown handle
    /// is allowed and does nothing.
    fn cancel(&mut self, handle: FrameHandle);
}

/// A deterministic clock for headless hosts and tests: the caller pumps
/// frames by taking the pending handle and feeding it back to the runner.
#[derive(Debug, Default)]
pub struct ManualClock {
    next: u64,
    pending: Option<FrameHandle>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registration that would fire next, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Consume the pending registration, simulating the frame firing.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameClock for ManualClock {
    fn schedule(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let mut clock = ManualClock::new();
        let a = clock.schedule();
        clock.cancel(a);
        let b = clock.schedule();
        assert_ne!(a, b);
    }

    #[test]
    fn cancel_ignores_stale_handles() {
        let mut clock = ManualClock::new();
        let a = clock.schedule();
        let b = clock.schedule();
        clock.cancel(a);
        assert_eq!(clock.pending(), Some(b));
    }

    #[test]
    fn fire_consumes_the_registration() {
        let mut clock = ManualClock::new();
        let a = clock.schedule();
        assert_eq!(clock.fire(), Some(a));
        assert_eq!(clock.fire(), None);
    }
}

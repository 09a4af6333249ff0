use crate::input::Command;

/// Current pressed state of the three logical commands, plus the jump queue
/// flag. Written only by the latch; the integrator reads it each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump_held: bool,
    /// True while the jump command is held and has not been released.
    /// Consumed by the integrator's landing branch to re-fire a jump within
    /// the landing tick.
    pub jump_queued: bool,
}

impl InputState {
    /// Whether any command is currently held.
    pub fn any_active(&self) -> bool {
        self.move_left || self.move_right || self.jump_held
    }
}

/// Latches raw press/release transitions into the flags the integrator reads.
///
/// Queuing is edge-triggered on command state, not on airborne state:
/// releasing jump clears the queue even mid-air, so the next landing will
/// not auto-retrigger.
#[derive(Debug, Default)]
pub struct InputLatch {
    state: InputState,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Record a command transition. Side effects (firing a jump, starting or
    /// stopping the loop) belong to the runner; the latch only tracks state.
    pub fn set_command(&mut self, command: Command, active: bool) {
        match command {
            Command::MoveLeft => self.state.move_left = active,
            Command::MoveRight => self.state.move_right = active,
            Command::Jump => {
                self.state.jump_held = active;
                self.state.jump_queued = active;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_flags_latch() {
        let mut latch = InputLatch::new();
        latch.set_command(Command::MoveLeft, true);
        assert!(latch.state().move_left);
        assert!(latch.state().any_active());
        latch.set_command(Command::MoveLeft, false);
        assert!(!latch.state().move_left);
        assert!(!latch.state().any_active());
    }

    #[test]
    fn jump_press_queues_and_release_clears() {
        let mut latch = InputLatch::new();
        latch.set_command(Command::Jump, true);
        assert!(latch.state().jump_held);
        assert!(latch.state().jump_queued);
        // Release clears the queue unconditionally, airborne or not.
        latch.set_command(Command::Jump, false);
        assert!(!latch.state().jump_held);
        assert!(!latch.state().jump_queued);
    }

    #[test]
    fn commands_are_independent() {
        let mut latch = InputLatch::new();
        latch.set_command(Command::MoveRight, true);
        latch.set_command(Command::Jump, true);
        latch.set_command(Command::Jump, false);
        assert!(latch.state().move_right);
        assert!(latch.state().any_active());
    }
}

pub mod clock;
pub mod driver;

use crate::core::config::{ConfigError, SimConfig};
use crate::core::level::Level;
use crate::core::player::Player;
use crate::core::sim::Simulation;
use crate::input::bindings::KeyBindings;
use crate::input::latch::InputLatch;
use crate::input::{Command, InputEvent};
use crate::runner::clock::{FrameClock, FrameHandle};
use crate::runner::driver::LoopDriver;

/// Wires the simulation, input latch, and loop driver to a host frame clock.
///
/// The host calls `push_input` for each raw key transition and `frame` for
/// each fired registration; both run on the same logical thread, and input
/// events are applied synchronously before the tick that consumes them. A
/// multi-threaded host must confine the runner to one designated thread.
///
/// The render surface reads `player()` on its own cadence; the runner makes
/// no calls back into it.
pub struct Runner<C: FrameClock> {
    sim: Simulation,
    latch: InputLatch,
    driver: LoopDriver,
    bindings: KeyBindings,
    clock: C,
}

impl<C: FrameClock> Runner<C> {
    /// Build a runner. Configuration and level geometry are validated here;
    /// nothing ticks until a command activates.
    pub fn new(
        config: SimConfig,
        level: Level,
        bindings: KeyBindings,
        clock: C,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: Simulation::new(config, level)?,
            latch: InputLatch::new(),
            driver: LoopDriver::new(),
            bindings,
            clock,
        })
    }

    pub fn player(&self) -> &Player {
        self.sim.player()
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Feed one raw input event through the key bindings. Unmapped keys are
    /// ignored.
    pub fn push_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key_code } => {
                if let Some(command) = self.bindings.command_for(key_code) {
                    self.set_command(command, true);
                }
            }
            InputEvent::KeyUp { key_code } => {
                if let Some(command) = self.bindings.command_for(key_code) {
                    self.set_command(command, false);
                }
            }
        }
    }

    /// Apply a logical command transition and its side effects: a jump press
    /// fires immediately (the airborne guard lives in the simulation), any
    /// activation makes sure the loop runs, and a release that leaves every
    /// command idle while the player is grounded stops it.
    pub fn set_command(&mut self, command: Command, active: bool) {
        self.latch.set_command(command, active);
        if active {
            if command == Command::Jump {
                self.sim.jump();
            }
            self.driver.ensure_running(&mut self.clock);
        } else if !self.latch.state().any_active() && !self.sim.is_airborne() {
            self.driver.stop(&mut self.clock);
        }
    }

    /// Service a fired frame registration: refuse stale handles, re-register
    /// for the next frame, then advance the simulation one tick.
    pub fn frame(&mut self, fired: FrameHandle) {
        if !self.driver.frame(fired, &mut self.clock) {
            return;
        }
        let input = *self.latch.state();
        self.sim.tick(&input);
    }
}

use glam::Vec2;

use crate::core::config::{ConfigError, SimConfig};
use crate::core::ground::find_support;
use crate::core::level::Level;
use crate::core::player::Player;
use crate::input::latch::InputState;

/// The physics integrator: owns the player's kinematic state and advances it
/// one tick at a time against the level geometry.
///
/// Ticks use constant per-tick deltas, never elapsed wall time, so the
/// simulation is deterministic for a given input sequence.
pub struct Simulation {
    config: SimConfig,
    level: Level,
    player: Player,
}

impl Simulation {
    /// Build a simulation. The only fallible entry point: configuration and
    /// geometry are checked here, before any tick can run.
    pub fn new(config: SimConfig, level: Level) -> Result<Self, ConfigError> {
        config.validate()?;
        level.validate(&config)?;
        let player = Player::spawn(&config);
        Ok(Self {
            config,
            level,
            player,
        })
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_airborne(&self) -> bool {
        self.player.airborne
    }

    /// Advance one tick: gravity, horizontal input, then vertical resolution
    /// against the platforms under the *new* horizontal position.
    ///
    /// Landing rule: moving downward (or at rest) with a support surface in
    /// range snaps the feet to that surface exactly, even when the candidate
    /// elevation was above or below it within tolerance. A jump queued at the
    /// moment of landing re-fires within the same tick, so a held jump
    /// command bunny-hops without an observable resting frame.
    pub fn tick(&mut self, input: &InputState) {
        self.player.velocity_y += self.config.gravity;

        let mut x = self.player.pos.x;
        if input.move_left {
            x -= self.config.move_speed;
        }
        if input.move_right {
            x += self.config.move_speed;
        }
        let x = x.clamp(0.0, self.config.world_width - self.player.size.x);

        let candidate_y = self.player.pos.y + self.player.velocity_y;
        let support = find_support(
            self.level.platforms(),
            x,
            x + self.player.size.x,
            candidate_y,
            self.config.ground_tolerance,
        );

        let y = match support {
            Some(elevation) if self.player.velocity_y <= 0.0 => {
                self.player.velocity_y = 0.0;
                self.player.airborne = false;
                log::debug!("Landed at elevation {elevation}");
                if input.jump_queued {
                    self.jump();
                }
                elevation
            }
            _ => candidate_y,
        };

        self.player.pos = Vec2::new(x, y);
    }

    /// Fire a jump. A no-op while airborne (no double jump). Returns whether
    /// the jump fired, so the caller can make sure ticking is active.
    pub fn jump(&mut self) -> bool {
        if self.player.airborne {
            return false;
        }
        self.player.airborne = true;
        self.player.velocity_y = self.config.jump_force;
        log::debug!("Jump: velocity_y = {}", self.player.velocity_y);
        true
    }
}

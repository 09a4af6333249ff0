use glam::Vec2;

use crate::core::config::SimConfig;

/// The controllable entity. A single long-lived instance, mutated exactly
/// once per tick by the simulation.
///
/// `pos.y` is the elevation of the feet above the world baseline, increasing
/// upward; `pos.x` is the left edge of the footprint.
#[derive(Debug, Clone)]
pub struct Player {
    /// Position in world units.
    pub pos: Vec2,
    /// Vertical velocity in units per tick. Zero while resting on a surface.
    pub velocity_y: f32,
    /// True from the moment a jump fires until the next landing.
    pub airborne: bool,
    /// Constant footprint (x = width, y = height).
    pub size: Vec2,
}

impl Player {
    /// Spawn the player at the configured position, at rest.
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            pos: config.spawn,
            velocity_y: 0.0,
            airborne: false,
            size: config.player_size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
}

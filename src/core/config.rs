use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal configuration faults, reported once at startup before any tick runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("non-finite value for {0}")]
    NonFinite(&'static str),
    #[error("ground tolerance must be non-negative, got {0}")]
    NegativeTolerance(f32),
    #[error("world width must exceed the player width ({player} >= {world})")]
    WorldTooNarrow { world: f32, player: f32 },
    #[error("player footprint must be positive, got {0}x{1}")]
    BadFootprint(f32, f32),
    #[error("platform {index} has non-positive width {width}")]
    BadPlatformWidth { index: usize, width: f32 },
    #[error("platform {index} has non-finite geometry")]
    BadPlatformGeometry { index: usize },
    #[error("level has no ground platform spanning the full world width at elevation 0")]
    MissingBaseline,
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation tuning, provided by the host. All values are per-tick: the
/// integrator uses constant deltas, not elapsed wall time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Vertical acceleration per tick. Negative pulls the player down.
    pub gravity: f32,
    /// Vertical velocity set when a jump fires.
    pub jump_force: f32,
    /// Horizontal distance covered per tick while a move command is held.
    pub move_speed: f32,
    /// Player footprint in world units (x = width, y = height).
    pub player_size: Vec2,
    /// Initial player position (x = left edge, y = feet elevation).
    pub spawn: Vec2,
    /// World width in game units. Horizontal movement is clamped to it.
    pub world_width: f32,
    /// Half-window for landing detection: a platform supports the player when
    /// its surface lies within this distance of the candidate feet elevation.
    pub ground_tolerance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: -1.0,
            jump_force: 20.0,
            move_speed: 5.0,
            player_size: Vec2::new(50.0, 120.0),
            spawn: Vec2::new(0.0, 20.0),
            world_width: 1920.0,
            ground_tolerance: 10.0,
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the physics constants once at startup. Out-of-range values are a
    /// configuration fault, never a runtime one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            (self.gravity, "gravity"),
            (self.jump_force, "jump_force"),
            (self.move_speed, "move_speed"),
            (self.world_width, "world_width"),
            (self.ground_tolerance, "ground_tolerance"),
            (self.player_size.x, "player_size.x"),
            (self.player_size.y, "player_size.y"),
            (self.spawn.x, "spawn.x"),
            (self.spawn.y, "spawn.y"),
        ];
        for (value, name) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if self.ground_tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(self.ground_tolerance));
        }
        if self.player_size.x <= 0.0 || self.player_size.y <= 0.0 {
            return Err(ConfigError::BadFootprint(
                self.player_size.x,
                self.player_size.y,
            ));
        }
        if self.world_width <= self.player_size.x {
            return Err(ConfigError::WorldTooNarrow {
                world: self.world_width,
                player: self.player_size.x,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_gravity() {
        let config = SimConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite("gravity"))
        ));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let config = SimConfig {
            ground_tolerance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeTolerance(_))
        ));
    }

    #[test]
    fn rejects_world_narrower_than_player() {
        let config = SimConfig {
            world_width: 40.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WorldTooNarrow { .. })
        ));
    }

    #[test]
    fn json_overrides_keep_defaults_for_absent_fields() {
        let config = SimConfig::from_json(r#"{ "jump_force": 30.0 }"#).unwrap();
        assert_eq!(config.jump_force, 30.0);
        assert_eq!(config.gravity, -1.0);
        assert_eq!(config.move_speed, 5.0);
    }
}

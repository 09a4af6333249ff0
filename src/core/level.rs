use serde::{Deserialize, Serialize};

use crate::core::config::{ConfigError, SimConfig};

/// A static platform. Only the top surface is walkable; the player never
/// collides with the sides or underside.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    /// Horizontal extent in world units.
    pub width: f32,
    /// Elevation of the walkable surface.
    pub bottom: f32,
    /// Left edge offset from the world origin.
    pub left: f32,
}

impl Platform {
    pub fn new(width: f32, bottom: f32, left: f32) -> Self {
        Self { width, bottom, left }
    }

    /// Right edge (exclusive for overlap tests).
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// Immutable level geometry: an ordered list of platforms, fixed for the
/// lifetime of the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    platforms: Vec<Platform>,
}

impl Level {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let level: Level = serde_json::from_str(json)?;
        log::info!("Level loaded: {} platforms", level.platforms.len());
        Ok(level)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    /// Check the geometry once at startup. The player assumes something is
    /// always steppable directly below the origin, so a baseline platform
    /// covering the full world width at elevation 0 is mandatory.
    pub fn validate(&self, config: &SimConfig) -> Result<(), ConfigError> {
        for (index, p) in self.platforms.iter().enumerate() {
            if !p.width.is_finite() || !p.bottom.is_finite() || !p.left.is_finite() {
                return Err(ConfigError::BadPlatformGeometry { index });
            }
            if p.width <= 0.0 {
                return Err(ConfigError::BadPlatformWidth {
                    index,
                    width: p.width,
                });
            }
        }
        let has_baseline = self
            .platforms
            .iter()
            .any(|p| p.bottom == 0.0 && p.left <= 0.0 && p.right() >= config.world_width);
        if !has_baseline {
            return Err(ConfigError::MissingBaseline);
        }
        Ok(())
    }
}

impl Default for Level {
    /// The stock level: full-width ground plus two floating platforms.
    fn default() -> Self {
        Self::new(vec![
            Platform::new(1920.0, 0.0, 0.0),
            Platform::new(250.0, 100.0, 200.0),
            Platform::new(250.0, 200.0, 500.0),
        ])
    }
}

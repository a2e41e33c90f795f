use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest accepted arena side
pub const MAX_ARENA_SIZE: usize = 256;

/// Slowest accepted starting tick rate
pub const MIN_BASE_FPS: f64 = 0.1;

/// Configuration for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of the playable square (the border adds one tile on each edge)
    pub arena_size: usize,
    /// Tick rate at size 1
    pub base_fps: f64,
    /// Speed the game up as the snake grows
    pub speed_ramp: bool,
    /// Start the round with the autopilot engaged
    pub autopilot: bool,
    /// Seed for food placement; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_size: 12,
            base_fps: 3.0,
            speed_ramp: true,
            autopilot: false,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom arena size
    pub fn new(arena_size: usize) -> Self {
        Self {
            arena_size,
            ..Default::default()
        }
    }

    /// Small seeded arena for testing
    pub fn small() -> Self {
        Self {
            arena_size: 5,
            seed: Some(7),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.arena_size < 2 {
            return Err(GameError::InvalidArenaSize(self.arena_size));
        }
        if self.arena_size > MAX_ARENA_SIZE {
            return Err(GameError::ArenaTooLarge {
                size: self.arena_size,
                max: MAX_ARENA_SIZE,
            });
        }
        if !(self.base_fps.is_finite() && self.base_fps > 0.0) {
            return Err(GameError::InvalidBaseFps(self.base_fps));
        }
        if self.base_fps < MIN_BASE_FPS {
            return Err(GameError::BaseFpsTooLow {
                fps: self.base_fps,
                min: MIN_BASE_FPS,
            });
        }
        Ok(())
    }
}

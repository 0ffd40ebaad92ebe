use anyhow::{ensure, Result};

use crate::constants::*;
use crate::vehicle::{SpawnPose, VehicleTuning};

/// Tunables for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub time_limit_secs: u32,
    pub starting_level: u32,
    pub frames_per_second: u32,
    pub tuning: VehicleTuning,
    pub spawn: SpawnPose,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            time_limit_secs: TIME_LIMIT_SECS,
            starting_level: STARTING_LEVEL,
            frames_per_second: FRAMES_PER_SECOND,
            tuning: VehicleTuning::default(),
            spawn: SpawnPose::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.time_limit_secs > 0, "time limit must be at least one second");
        ensure!(self.starting_level >= 1, "levels start at 1, got {}", self.starting_level);
        ensure!(
            (1..=240).contains(&self.frames_per_second),
            "frame rate {} is outside 1..=240",
            self.frames_per_second
        );

        let tuning = &self.tuning;
        ensure!(tuning.max_speed > 0.0, "max speed must be positive");
        ensure!(tuning.acceleration > 0.0, "acceleration must be positive");
        ensure!(tuning.friction >= 0.0, "friction cannot be negative");
        ensure!(tuning.turn_rate >= 0.0, "turn rate cannot be negative");
        ensure!(
            tuning.width > 0.0 && tuning.height > 0.0,
            "vehicle size must be positive, got {}x{}",
            tuning.width,
            tuning.height
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.time_limit_secs, 120);
        assert_eq!(config.starting_level, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_rejects_zero_time_limit() {
        let config = GameConfig {
            time_limit_secs: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let mut config = GameConfig::default();
        config.tuning.max_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tuning.width = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_seed() {
        assert_eq!(GameConfig::default().with_seed(9).seed, Some(9));
    }
}

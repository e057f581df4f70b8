/// Tunable constants for a run, loadable from TOML.
///
/// Defaults reproduce the reference cadence: 800×450 field, 1500 u/s²
/// gravity, 500 ms spawn polls with a 1000 ms cooldown, base scroll speed 4
/// ramping by 0.005 per tick.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

const CONFIG_ENV: &str = "DINO_RUNNER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/runner.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Top of the ground strip; entities rest with their bottom edge here.
    pub ground_y: f32,

    pub dino_start_x: f32,
    pub dino_start_y: f32,
    pub dino_width: f32,
    pub dino_height: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,

    /// Downward acceleration (units/s²).
    pub gravity: f32,
    /// Vertical velocity set by a jump (units/s, negative = up).
    pub jump_impulse: f32,
    /// Vertical velocity set by a duck (units/s, positive = down).
    pub duck_impulse: f32,

    /// Scroll speed at run start (units/tick).
    pub base_speed: f64,
    /// Added to the scroll speed every running tick.
    pub speed_increment: f64,

    pub spawn_interval_ms: u64,
    pub spawn_cooldown_ms: u64,

    pub flourish_vx: f32,
    pub flourish_vy: f32,
    pub flourish_delay_ms: u64,
    /// Length of the dying animation, measured from the crash.
    pub death_animation_ms: u64,

    /// Fixed RNG seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 450.0,
            ground_y: 322.0,
            dino_start_x: 10.0,
            dino_start_y: 100.0,
            dino_width: 80.0,
            dino_height: 80.0,
            obstacle_width: 40.0,
            obstacle_height: 50.0,
            gravity: 1500.0,
            jump_impulse: -700.0,
            duck_impulse: 500.0,
            base_speed: 4.0,
            speed_increment: 0.005,
            spawn_interval_ms: 500,
            spawn_cooldown_ms: 1000,
            flourish_vx: 300.0,
            flourish_vy: -250.0,
            flourish_delay_ms: 500,
            death_animation_ms: 600,
            seed: None,
        }
    }
}

impl RunnerConfig {
    /// Parse and validate a TOML document.  Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RunnerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from `$DINO_RUNNER_CONFIG` (or `config/runner.toml`).  Falls back
    /// to defaults if the file is missing or unusable.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                RunnerConfig::default()
            }
            Err(e) => {
                log::warn!("Ignoring {path}: {e}, using defaults");
                RunnerConfig::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if !(self.field_width > 0.0) {
            return invalid("field_width", "must be positive");
        }
        if !(self.field_height > 0.0) {
            return invalid("field_height", "must be positive");
        }
        if !(self.ground_y > 0.0 && self.ground_y <= self.field_height) {
            return invalid("ground_y", "must lie inside the field");
        }
        if !(self.dino_width > 0.0 && self.dino_height > 0.0) {
            return invalid("dino_width", "dino size must be positive");
        }
        if !(self.obstacle_width > 0.0 && self.obstacle_height > 0.0) {
            return invalid("obstacle_width", "obstacle size must be positive");
        }
        if !(self.gravity >= 0.0) {
            return invalid("gravity", "must not be negative");
        }
        if !(self.jump_impulse < 0.0) {
            return invalid("jump_impulse", "must point upward (negative)");
        }
        if !(self.duck_impulse >= 0.0) {
            return invalid("duck_impulse", "must point downward (non-negative)");
        }
        if !(self.base_speed > 0.0) {
            return invalid("base_speed", "must be positive");
        }
        if !(self.speed_increment >= 0.0) {
            return invalid("speed_increment", "must not be negative");
        }
        if self.spawn_interval_ms == 0 {
            return invalid("spawn_interval_ms", "must be non-zero");
        }
        Ok(())
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    pub fn spawn_cooldown(&self) -> Duration {
        Duration::from_millis(self.spawn_cooldown_ms)
    }

    pub fn flourish_delay(&self) -> Duration {
        Duration::from_millis(self.flourish_delay_ms)
    }

    pub fn death_animation(&self) -> Duration {
        Duration::from_millis(self.death_animation_ms)
    }
}

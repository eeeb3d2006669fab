//! Actor tuning: step sizes and rates for the discrete controls.
//!
//! Defaults give the stock feel of the drone. A YAML file can
//! override any subset of the fields:
//!
//! ```yaml
//! initial_spin_rate: 150.0
//! roll_rate: 90.0
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating a tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Control constants for an [`Actor`](crate::Actor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorTuning {
    /// Where the actor starts and where `reset` puts it back.
    pub spawn_point: Vec3,
    /// Rotor speed at construction, degrees per second.
    pub initial_spin_rate: f32,
    /// Amount added or removed by one spin control press.
    pub spin_step: f32,
    /// The spin rate is kept strictly above this value.
    pub spin_floor: f32,
    /// Distance moved per forward/backward press per unit of spin rate.
    pub move_scale: f32,
    /// Degrees of yaw or pitch per turn press.
    pub turn_step: f32,
    /// Roll animation speed, degrees per second.
    pub roll_rate: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            spawn_point: Vec3::new(0.0, 2.0, 0.0),
            initial_spin_rate: 100.0,
            spin_step: 10.0,
            spin_floor: 10.0,
            move_scale: 0.001,
            turn_step: 5.0,
            roll_rate: 180.0,
        }
    }
}

impl ActorTuning {
    /// Parse and validate tuning from YAML text. Missing fields keep their
    /// defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_yaml::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a YAML tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_yaml_str(&text)?;
        tracing::info!("loaded actor tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the relations the actor relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spin_step", self.spin_step),
            ("spin_floor", self.spin_floor),
            ("move_scale", self.move_scale),
            ("turn_step", self.turn_step),
            ("roll_rate", self.roll_rate),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }
        if !(self.initial_spin_rate.is_finite() && self.initial_spin_rate > self.spin_floor) {
            return Err(ConfigError::Invalid {
                field: "initial_spin_rate",
                reason: "must be greater than spin_floor",
            });
        }
        if !self.spawn_point.is_finite() {
            return Err(ConfigError::Invalid {
                field: "spawn_point",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

//! Конфигурация симуляции (JSON)
//!
//! Все поля опциональны: отсутствующие берутся из `Default`.
//!
//! ```json
//! {
//!   "motion": {
//!     "acceleration": { "lateral": 1.0, "vertical": 0.25, "forward": 50.0 },
//!     "deceleration": { "lateral": -0.0005, "vertical": -0.0001, "forward": -5.0 },
//!     "turn_rate": 0.25
//!   },
//!   "log_level": "info"
//! }
//! ```

use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::MotionProfile;
use crate::logger::LogLevel;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Файла нет: нормальная ситуация (работаем на defaults)
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub motion: MotionProfile,
    pub log_level: LogLevel,
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Инварианты профиля: accel ≥ 0, decel ≤ 0, всё конечно
    pub fn validate(&self) -> Result<(), ConfigError> {
        let accel = self.motion.acceleration;
        let decel = self.motion.deceleration;

        let checks: [(&'static str, f32, bool); 7] = [
            ("motion.acceleration.lateral", accel.lateral, accel.lateral >= 0.0),
            ("motion.acceleration.vertical", accel.vertical, accel.vertical >= 0.0),
            ("motion.acceleration.forward", accel.forward, accel.forward >= 0.0),
            ("motion.deceleration.lateral", decel.lateral, decel.lateral <= 0.0),
            ("motion.deceleration.vertical", decel.vertical, decel.vertical <= 0.0),
            ("motion.deceleration.forward", decel.forward, decel.forward <= 0.0),
            ("motion.turn_rate", self.motion.turn_rate, true),
        ];

        for (field, value, sign_ok) in checks {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} is not finite", value),
                });
            }
            if !sign_ok {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} has the wrong sign", value),
                });
            }
        }

        Ok(())
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SimulationConfig::from_json_str(&json)
}

/// Загружает config или откатывается на defaults (с записью в лог)
pub fn load_config_or_default(path: impl AsRef<Path>) -> SimulationConfig {
    let path = path.as_ref();
    match load_config(path) {
        Ok(config) => {
            crate::log_info(&format!("Config loaded from {:?}", path));
            config
        }
        Err(err) if err.is_not_found() => {
            crate::log_info(&format!("No config at {:?}, using defaults", path));
            SimulationConfig::default()
        }
        Err(err) => {
            crate::log_warning(&format!("{}; using defaults", err));
            SimulationConfig::default()
        }
    }
}

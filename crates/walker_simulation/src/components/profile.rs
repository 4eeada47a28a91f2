//! Motion profile: константы ускорения, торможения и поворота
//!
//! Конфигурируется один раз при создании integrator'а, дальше не меняется.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Ускорение по осям (units/sec²), значения ≥ 0
///
/// Оси: lateral = X, vertical = Y, forward = Z (локальные оси entity).
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelerationProfile {
    pub lateral: f32,
    pub vertical: f32,
    pub forward: f32,
}

impl Default for AccelerationProfile {
    fn default() -> Self {
        Self {
            lateral: 1.0,
            vertical: 0.25,
            forward: 50.0,
        }
    }
}

impl AccelerationProfile {
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.lateral, self.vertical, self.forward)
    }
}

/// Торможение по осям (1/sec), значения ≤ 0 (трение тянет velocity к нулю)
///
/// Кадровое торможение = velocity * deceleration * dt (покомпонентно).
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct DecelerationProfile {
    pub lateral: f32,
    pub vertical: f32,
    pub forward: f32,
}

impl Default for DecelerationProfile {
    fn default() -> Self {
        Self {
            lateral: -0.0005,
            vertical: -0.0001,
            forward: -5.0,
        }
    }
}

impl DecelerationProfile {
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.lateral, self.vertical, self.forward)
    }
}

/// Полный профиль движения персонажа
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionProfile {
    pub acceleration: AccelerationProfile,
    pub deceleration: DecelerationProfile,
    /// Скорость поворота в долях π рад/сек (yaw за кадр = π * dt * turn_rate)
    pub turn_rate: f32,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            acceleration: AccelerationProfile::default(),
            deceleration: DecelerationProfile::default(),
            turn_rate: 0.25,
        }
    }
}

impl MotionProfile {
    /// Угловая скорость yaw (рад/сек)
    pub fn yaw_rate(&self) -> f32 {
        std::f32::consts::PI * self.turn_rate
    }

    /// Установившаяся forward-скорость при зажатом W
    ///
    /// Баланс: accel.forward = -deceleration.forward * v.
    /// `None` если торможения по forward-оси нет (скорость растёт без предела).
    pub fn steady_forward_speed(&self) -> Option<f32> {
        if self.deceleration.forward < 0.0 {
            Some(self.acceleration.forward / -self.deceleration.forward)
        } else {
            None
        }
    }
}

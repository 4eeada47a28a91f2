//! Character motion integrator
//!
//! Архитектура:
//! - Держит InputState + persistent velocity (owned exclusively)
//! - Каждый tick: торможение → ускорение/поворот → перемещение вдоль нового heading
//! - Target = Bevy `Transform` (translation + rotation), lifetime им не владеем
//!
//! Порядок "сначала поворот, потом перемещение" внутри одного tick даёт
//! кривую траекторию при W+A без промежуточного состояния.

use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;

use crate::components::{InputState, MotionProfile, MoveKey};

/// Параметры, которые AssetLoader передаёт при создании integrator'а
///
/// `target == None` → integrator inert (frame loop его пропускает).
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct CharacterControlParams {
    pub target: Option<Entity>,
    pub camera: Option<Entity>,
}

/// Motion integrator персонажа
///
/// Velocity оси: x = lateral, y = vertical, z = forward.
/// Инвариант: `velocity.y == 0` (vertical никто не драйвит).
/// Lateral velocity тоже никогда не меняется input'ом: strafing пока не реализован.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct MotionIntegrator {
    params: CharacterControlParams,
    input: InputState,
    velocity: Vec3,
    profile: MotionProfile,
}

impl MotionIntegrator {
    pub fn new(params: CharacterControlParams, profile: MotionProfile) -> Self {
        Self {
            params,
            input: InputState::default(),
            velocity: Vec3::ZERO,
            profile,
        }
    }

    pub fn params(&self) -> CharacterControlParams {
        self.params
    }

    pub fn target(&self) -> Option<Entity> {
        self.params.target
    }

    /// Нет target → ничего не двигаем
    pub fn is_inert(&self) -> bool {
        self.params.target.is_none()
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Key-down: ставит ровно один флаг (повторный down: idempotent)
    pub fn on_key_down(&mut self, code: KeyCode) {
        if let Some(key) = MoveKey::from_key_code(code) {
            self.input.set(key, true);
        }
    }

    pub fn on_key_up(&mut self, code: KeyCode) {
        if let Some(key) = MoveKey::from_key_code(code) {
            self.input.set(key, false);
        }
    }

    /// Числовые key codes (87/65/83/68), остальные игнорируются
    pub fn on_key_code_down(&mut self, code: u32) {
        if let Some(key) = MoveKey::from_legacy_code(code) {
            self.input.set(key, true);
        }
    }

    pub fn on_key_code_up(&mut self, code: u32) {
        if let Some(key) = MoveKey::from_legacy_code(code) {
            self.input.set(key, false);
        }
    }

    /// Прямое изменение флага
    pub fn set_key(&mut self, key: MoveKey, held: bool) {
        self.input.set(key, held);
    }

    /// Один tick интеграции
    ///
    /// `elapsed_secs ≥ 0`. Ошибок нет: ни деления, ни индексации.
    pub fn update(&mut self, target: &mut Transform, elapsed_secs: f32) {
        let t = elapsed_secs;
        let accel = self.profile.acceleration;

        // 1. Кадровое торможение (покомпонентно)
        let mut frame_deceleration = self.velocity * self.profile.deceleration.as_vec3() * t;

        // 2. Forward-ось: не тормозим дальше нуля за один кадр (без overshoot)
        frame_deceleration.z =
            signum(frame_deceleration.z) * frame_deceleration.z.abs().min(self.velocity.z.abs());

        // 3. Единственное место где velocity затухает
        self.velocity += frame_deceleration;

        // 4. Ускорение (только в velocity) + поворот (current * delta)
        let mut rotation = target.rotation;

        if self.input.forward {
            self.velocity.z += accel.forward * t;
        }
        if self.input.backward {
            self.velocity.z -= accel.forward * t;
        }
        if self.input.left {
            rotation *= Quat::from_axis_angle(Vec3::Y, std::f32::consts::PI * t * self.profile.turn_rate);
        }
        if self.input.right {
            rotation *= Quat::from_axis_angle(Vec3::Y, -std::f32::consts::PI * t * self.profile.turn_rate);
        }

        // 5. Новая ориентация в target
        target.rotation = rotation.normalize();

        // 6. World-space направления по уже обновлённой ориентации
        let forward = (target.rotation * Vec3::Z).normalize();
        let sideways = (target.rotation * Vec3::X).normalize();

        // 7. Перемещение
        target.translation += sideways * (self.velocity.x * t);
        target.translation += forward * (self.velocity.z * t);
    }
}

/// sign(x) с sign(0) = 0 (`f32::signum` даёт ±1 для ±0)
fn signum(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

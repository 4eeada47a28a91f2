//! Animation playback clock
//!
//! FrameDriver форвардит elapsed time сюда так же, как в MotionIntegrator.
//! Рендер-сторона (клиент) только сэмплирует playhead, сама время не двигает.

use bevy::prelude::*;

/// Animation player handle: всё что нужно FrameDriver'у
pub trait AnimationMixer {
    fn update(&mut self, elapsed_secs: f32);
}

/// Один зацикленный clip (без blending)
///
/// Инвариант: если `duration` известна и > 0, то `0 ≤ time < duration`.
/// Duration может прийти позже (clip грузится асинхронно): до этого время
/// просто накапливается и оборачивается при `set_duration`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct LoopingClip {
    time: f32,
    duration: Option<f32>,
    pub playback_rate: f32,
}

impl Default for LoopingClip {
    fn default() -> Self {
        Self {
            time: 0.0,
            duration: None,
            playback_rate: 1.0,
        }
    }
}

impl LoopingClip {
    pub fn new(duration: Option<f32>) -> Self {
        Self {
            duration,
            ..default()
        }
    }

    /// Текущий playhead (секунды внутри clip'а)
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn duration(&self) -> Option<f32> {
        self.duration
    }

    pub fn set_duration(&mut self, duration: f32) {
        self.duration = Some(duration);
        self.wrap();
    }

    /// Нормализованная фаза 0..1 (None пока duration неизвестна)
    pub fn phase(&self) -> Option<f32> {
        match self.duration {
            Some(duration) if duration > 0.0 => Some(self.time / duration),
            _ => None,
        }
    }

    fn wrap(&mut self) {
        if let Some(duration) = self.duration {
            if duration > 0.0 {
                self.time = self.time.rem_euclid(duration);
            }
        }
    }
}

impl AnimationMixer for LoopingClip {
    fn update(&mut self, elapsed_secs: f32) {
        self.time += elapsed_secs * self.playback_rate;
        self.wrap();
    }
}

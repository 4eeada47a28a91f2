//! FrameDriver: update/render cadence на display refresh tick'ах
//!
//! Per-tick порядок:
//! 1. Первый tick → запоминаем timestamp (кадр нулевой длины)
//! 2. Re-arm: запрос следующего кадра ДО любой работы текущего
//! 3. Render текущего состояния
//! 4. Step(elapsed сек) → animation players + motion integrator
//! 5. previous = current

use bevy::prelude::*;

use super::FrameClock;

/// Окружение драйвера (display signal, renderer, simulation step)
///
/// ECS реализация: `WorldFrameHost` (systems.rs); в тестах: recording mock.
pub trait FrameHost {
    /// Запросить следующий display refresh (self-re-arming loop)
    fn request_next_frame(&mut self);
    /// Нарисовать сцену текущей камерой
    fn render(&mut self);
    /// Форвард elapsed time во все готовые collaborator'ы
    fn step(&mut self, elapsed_secs: f32);
}

/// Uninitialized → Running (один раз, обратно нельзя)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum DriverState {
    #[default]
    Uninitialized,
    Running,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct FrameDriver {
    state: DriverState,
    clock: FrameClock,
    ticks: u64,
}

impl FrameDriver {
    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Количество обработанных tick'ов (с момента start)
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Переход в Running после one-time setup сцены; повторный вызов: no-op
    pub fn start(&mut self) {
        if self.state == DriverState::Running {
            return;
        }
        self.state = DriverState::Running;
        crate::log_info("FrameDriver: Uninitialized → Running");
    }

    /// Один display refresh tick
    ///
    /// Возвращает обработанный elapsed (сек) или `None` если драйвер ещё не запущен.
    pub fn tick(&mut self, timestamp_ms: f64, host: &mut impl FrameHost) -> Option<f32> {
        if self.state != DriverState::Running {
            return None;
        }

        if self.clock.prime(timestamp_ms) {
            crate::log(&format!("FrameDriver: first tick at {:.3} ms", timestamp_ms));
        }

        host.request_next_frame();
        host.render();

        let mut elapsed_ms = self.clock.elapsed_ms(timestamp_ms);
        if elapsed_ms < 0.0 {
            crate::log_warning(&format!(
                "FrameDriver: timestamp went backwards ({:.3} ms), clamping elapsed to 0",
                elapsed_ms
            ));
            elapsed_ms = 0.0;
        }

        let elapsed_secs = (elapsed_ms * 0.001) as f32;
        host.step(elapsed_secs);

        self.clock.record(timestamp_ms);
        self.ticks += 1;

        Some(elapsed_secs)
    }
}

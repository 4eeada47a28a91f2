//! Key transition events (InputSource → MotionIntegrator)

use bevy::input::keyboard::KeyCode;
use bevy::prelude::Event;

/// Физический переход клавиши (down/up), не level-polling
///
/// # Архитектура
/// - Emit: клиентский keyboard bridge (из Bevy `KeyboardInput`) или headless тесты
/// - Consume: `apply_key_transitions` (порядок = порядок прихода событий)
///
/// Повторный `pressed: true` при зажатой клавише безвреден (idempotent write).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTransition {
    pub key: KeyCode,
    pub pressed: bool,
}

impl KeyTransition {
    pub fn down(key: KeyCode) -> Self {
        Self { key, pressed: true }
    }

    pub fn up(key: KeyCode) -> Self {
        Self { key, pressed: false }
    }
}

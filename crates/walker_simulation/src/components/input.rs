//! Состояние клавиш движения (edge-triggered)

use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;

/// Клавиша движения (фиксированный mapping WASD, без remapping)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum MoveKey {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveKey {
    /// Bevy physical key → MoveKey
    ///
    /// Стрелки и всё остальное намеренно не маппятся.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(MoveKey::Forward),
            KeyCode::KeyA => Some(MoveKey::Left),
            KeyCode::KeyS => Some(MoveKey::Backward),
            KeyCode::KeyD => Some(MoveKey::Right),
            _ => None,
        }
    }

    /// Legacy integer key codes (87 = W, 65 = A, 83 = S, 68 = D)
    ///
    /// Для input source'ов, которые отдают числовые коды вместо `KeyCode`.
    pub fn from_legacy_code(code: u32) -> Option<Self> {
        match code {
            87 => Some(MoveKey::Forward),
            65 => Some(MoveKey::Left),
            83 => Some(MoveKey::Backward),
            68 => Some(MoveKey::Right),
            // 37..=40 (стрелки): no-op
            _ => None,
        }
    }
}

/// Четыре независимых флага движения
///
/// Диагональ = forward/backward + left/right одновременно.
/// Меняется только key-down/key-up событиями, читается только в `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Backward => self.backward = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Backward => self.backward,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
        }
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_mapping() {
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyW), Some(MoveKey::Forward));
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyA), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyS), Some(MoveKey::Backward));
        assert_eq!(MoveKey::from_key_code(KeyCode::KeyD), Some(MoveKey::Right));
    }

    #[test]
    fn test_arrows_are_ignored() {
        assert_eq!(MoveKey::from_key_code(KeyCode::ArrowUp), None);
        assert_eq!(MoveKey::from_key_code(KeyCode::ArrowLeft), None);
        for code in 37..=40 {
            assert_eq!(MoveKey::from_legacy_code(code), None);
        }
    }

    #[test]
    fn test_legacy_codes_match_wasd() {
        assert_eq!(MoveKey::from_legacy_code(87), Some(MoveKey::Forward));
        assert_eq!(MoveKey::from_legacy_code(65), Some(MoveKey::Left));
        assert_eq!(MoveKey::from_legacy_code(83), Some(MoveKey::Backward));
        assert_eq!(MoveKey::from_legacy_code(68), Some(MoveKey::Right));
        assert_eq!(MoveKey::from_legacy_code(32), None);
    }

    #[test]
    fn test_flags_are_independent() {
        let mut input = InputState::default();
        input.set(MoveKey::Forward, true);
        input.set(MoveKey::Left, true);

        assert!(input.forward && input.left);
        assert!(!input.backward && !input.right);

        input.set(MoveKey::Forward, false);
        assert!(!input.is_held(MoveKey::Forward));
        assert!(input.is_held(MoveKey::Left));
        assert!(input.any());
    }
}

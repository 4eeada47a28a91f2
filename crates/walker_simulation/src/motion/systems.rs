//! Motion ECS systems

use bevy::prelude::*;

use super::{KeyTransition, MotionIntegrator};

/// Применяет key transitions ко всем integrator'ам
///
/// Single-player: обычно ровно один integrator; если персонаж ещё грузится
/// (integrator не создан): события просто теряются.
pub fn apply_key_transitions(
    mut transitions: EventReader<KeyTransition>,
    mut controls: Query<&mut MotionIntegrator>,
) {
    for transition in transitions.read() {
        for mut integrator in controls.iter_mut() {
            if transition.pressed {
                integrator.on_key_down(transition.key);
            } else {
                integrator.on_key_up(transition.key);
            }
        }
    }
}

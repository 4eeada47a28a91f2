use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use walker_simulation::{KeyTransition, WalkerSet};

/// Bevy KeyboardInput → KeyTransition (simulation ничего не знает о winit)
pub struct KeyboardBridgePlugin;

impl Plugin for KeyboardBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, forward_keyboard_input.before(WalkerSet::Input));
    }
}

/// Каждое нажатие/отпускание идёт как есть, фильтрация клавиш в integrator
fn forward_keyboard_input(
    mut keyboard: EventReader<KeyboardInput>,
    mut transitions: EventWriter<KeyTransition>,
) {
    for event in keyboard.read() {
        transitions.write(KeyTransition {
            key: event.key_code,
            pressed: event.state == ButtonState::Pressed,
        });
    }
}

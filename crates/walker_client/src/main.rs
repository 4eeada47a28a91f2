use bevy::prelude::*;
use bevy::winit::WinitSettings;
use walker_simulation::{
    init_logger, load_config_or_default, set_log_level, start_frame_driver, SimulationPlugin,
};

mod camera;
mod character;
mod frame_bridge;
mod input;
mod scene;

use camera::CameraPlugin;
use character::{load_character, CharacterPlugin};
use frame_bridge::FrameBridgePlugin;
use input::KeyboardBridgePlugin;
use scene::setup_scene;

const CONFIG_PATH: &str = "assets/config/walker.json";

fn main() {
    init_logger();
    let config = load_config_or_default(CONFIG_PATH);
    set_log_level(config.log_level);

    App::new()
        // Bevy defaults (rendering, input, time, assets, gltf, animation)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Walker".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Кадр рисуется только по запросу: FrameDriver перевзводит loop сам
        .insert_resource(WinitSettings::desktop_app())
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin)
        .insert_resource(config)
        // Display clock, redraw requests, animation sampling, resize
        .add_plugins(FrameBridgePlugin)
        // KeyboardInput → KeyTransition
        .add_plugins(KeyboardBridgePlugin)
        // Orbit camera controls
        .add_plugins(CameraPlugin)
        // Character asset loading (async → MotionIntegrator)
        .add_plugins(CharacterPlugin)
        // One-time setup → FrameDriver: Uninitialized → Running
        .add_systems(Startup, (setup_scene, load_character, start_frame_driver).chain())
        .run();
}

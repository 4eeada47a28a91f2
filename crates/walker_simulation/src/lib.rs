//! Walker Simulation Core
//!
//! Headless ECS-симуляция на Bevy 0.16:
//! - motion: MotionIntegrator (input → velocity → Transform)
//! - frame: FrameDriver (display refresh → render → step)
//! - animation: LoopingClip (animation player clock)
//!
//! Клиент (walker_client) добавляет окно, сцену, ассеты и keyboard bridge.

use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod components;
pub mod config;
pub mod frame;
pub mod logger;
pub mod motion;

// Re-export базовых типов для удобства
pub use animation::{AnimationMixer, LoopingClip};
pub use components::*;
pub use config::{load_config, load_config_or_default, ConfigError, SimulationConfig};
pub use frame::{
    advance_frame, start_frame_driver, DisplayTimestamp, DriverState, FrameClock, FrameDriver, FrameHost,
    FrameStats, WorldFrameHost,
};
pub use logger::*;
pub use motion::{apply_key_transitions, CharacterControlParams, KeyTransition, MotionIntegrator};

/// System set frame loop'а: сначала input, потом tick
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WalkerSet {
    Input,
    Frame,
}

/// Главный plugin симуляции
///
/// FrameDriver стартует в `Uninitialized`: хост вызывает `start()` после
/// one-time setup сцены (клиент: `start_frame_driver` в Startup).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<KeyTransition>()
            .init_resource::<FrameDriver>()
            .init_resource::<DisplayTimestamp>()
            .init_resource::<FrameStats>()
            .init_resource::<SimulationConfig>()
            .register_type::<MotionIntegrator>()
            .register_type::<LoopingClip>()
            .configure_sets(Update, (WalkerSet::Input, WalkerSet::Frame).chain())
            .add_systems(Update, apply_key_transitions.in_set(WalkerSet::Input))
            .add_systems(Update, advance_frame.in_set(WalkerSet::Frame));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}

/// Spawn helper: персонаж-target + integrator на нём же
pub fn spawn_controlled_character(world: &mut World, transform: Transform, profile: MotionProfile) -> Entity {
    let entity = world.spawn(transform).id();
    world.entity_mut(entity).insert(MotionIntegrator::new(
        CharacterControlParams {
            target: Some(entity),
            camera: None,
        },
        profile,
    ));
    entity
}

/// Snapshot motion state для сравнения детерминизма
///
/// Битовое представление translation/rotation/velocity, отсортированное по Entity.
pub fn motion_snapshot(world: &mut World) -> Vec<u8> {
    let mut query = world.query::<(Entity, &MotionIntegrator)>();
    let mut controls: Vec<(Entity, MotionIntegrator)> =
        query.iter(world).map(|(entity, integrator)| (entity, *integrator)).collect();

    // Сортируем по Entity ID для детерминизма
    controls.sort_by_key(|(entity, _)| entity.index());

    let mut snapshot = Vec::new();
    for (entity, integrator) in controls {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        push_vec3(&mut snapshot, integrator.velocity());

        if let Some(transform) = integrator.target().and_then(|target| world.get::<Transform>(target)) {
            push_vec3(&mut snapshot, transform.translation);
            for component in transform.rotation.to_array() {
                snapshot.extend_from_slice(&component.to_bits().to_le_bytes());
            }
        }
    }

    snapshot
}

fn push_vec3(buffer: &mut Vec<u8>, value: Vec3) {
    for component in value.to_array() {
        buffer.extend_from_slice(&component.to_bits().to_le_bytes());
    }
}

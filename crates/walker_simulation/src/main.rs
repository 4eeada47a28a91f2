//! Headless симуляция walker
//!
//! Гоняет frame loop без рендера: 60 Hz display ticks, скриптованный W + A.

use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use walker_simulation::{
    create_headless_app, load_config_or_default, log_info, set_log_level, spawn_controlled_character,
    DisplayTimestamp, FrameDriver, FrameStats, KeyTransition, MotionIntegrator,
};

const FRAME_MS: f64 = 1000.0 / 60.0;
const TICK_COUNT: u64 = 600;

fn main() {
    let mut app = create_headless_app();

    let config = load_config_or_default("assets/config/walker.json");
    set_log_level(config.log_level);
    app.insert_resource(config);

    let character = spawn_controlled_character(app.world_mut(), Transform::default(), config.motion);
    app.world_mut().resource_mut::<FrameDriver>().start();

    log_info(&format!("Starting headless walker ({} ticks @ 60 Hz)", TICK_COUNT));

    for tick in 0..TICK_COUNT {
        // Скрипт: W всё время, A первые 2 секунды
        match tick {
            0 => {
                app.world_mut().send_event(KeyTransition::down(KeyCode::KeyW));
                app.world_mut().send_event(KeyTransition::down(KeyCode::KeyA));
            }
            120 => {
                app.world_mut().send_event(KeyTransition::up(KeyCode::KeyA));
            }
            _ => {}
        }

        app.world_mut().resource_mut::<DisplayTimestamp>().0 = tick as f64 * FRAME_MS;
        app.update();

        if tick % 60 == 0 {
            let world = app.world();
            let (Some(transform), Some(integrator)) =
                (world.get::<Transform>(character), world.get::<MotionIntegrator>(character))
            else {
                continue;
            };
            log_info(&format!(
                "Tick {}: position = {:.3?}, forward velocity = {:.3}",
                tick,
                transform.translation,
                integrator.velocity().z
            ));
        }
    }

    let stats = *app.world().resource::<FrameStats>();
    log_info(&format!(
        "Simulation complete! rendered = {}, integrator steps = {}",
        stats.rendered, stats.stepped_integrators
    ));
}

//! Frame loop ECS plumbing
//!
//! `advance_frame` (exclusive system) тикает `FrameDriver` resource и через
//! `WorldFrameHost` форвардит elapsed во все готовые collaborator'ы.

use bevy::prelude::*;

use super::{FrameDriver, FrameHost};
use crate::animation::{AnimationMixer, LoopingClip};
use crate::motion::MotionIntegrator;

/// Timestamp текущего display refresh (ms, монотонный)
///
/// Клиент пишет сюда `Time<Real>` в `First`; headless драйверы: вручную.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayTimestamp(pub f64);

/// Счётчики frame loop'а
///
/// - `requested`: сколько раз loop перевзвёлся (клиент превращает в RequestRedraw)
/// - `rendered`: сколько раз сцена отдана рендеру
/// - `stepped_integrators`: сколько integrator update'ов реально выполнено
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub requested: u64,
    pub rendered: u64,
    pub stepped_integrators: u64,
    pub last_elapsed_secs: f32,
}

/// FrameHost поверх `World`
pub struct WorldFrameHost<'w> {
    world: &'w mut World,
}

impl<'w> WorldFrameHost<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    fn stats(&mut self) -> Mut<'_, FrameStats> {
        if !self.world.contains_resource::<FrameStats>() {
            self.world.init_resource::<FrameStats>();
        }
        self.world.resource_mut::<FrameStats>()
    }

    fn step_animation_players(&mut self, elapsed_secs: f32) {
        let mut clips = self.world.query::<&mut LoopingClip>();
        for mut clip in clips.iter_mut(self.world) {
            clip.update(elapsed_secs);
        }
    }

    /// Integrator без target или с target без Transform: пропускаем этот tick
    fn step_integrators(&mut self, elapsed_secs: f32) -> u64 {
        let mut controls = self.world.query::<(Entity, &MotionIntegrator)>();
        let active: Vec<(Entity, Entity)> = controls
            .iter(self.world)
            .filter_map(|(owner, integrator)| integrator.target().map(|target| (owner, target)))
            .collect();

        let mut stepped = 0;
        for (owner, target) in active {
            let Some(mut integrator) = self.world.get::<MotionIntegrator>(owner).copied() else {
                continue;
            };

            {
                let Some(mut transform) = self.world.get_mut::<Transform>(target) else {
                    continue;
                };
                integrator.update(&mut transform, elapsed_secs);
            }

            if let Some(mut slot) = self.world.get_mut::<MotionIntegrator>(owner) {
                *slot = integrator;
            }
            stepped += 1;
        }
        stepped
    }
}

impl FrameHost for WorldFrameHost<'_> {
    fn request_next_frame(&mut self) {
        self.stats().requested += 1;
    }

    fn render(&mut self) {
        // Bevy render sub-app рисует после Update; здесь только hand-off
        self.stats().rendered += 1;
    }

    fn step(&mut self, elapsed_secs: f32) {
        self.step_animation_players(elapsed_secs);
        let stepped = self.step_integrators(elapsed_secs);

        let mut stats = self.stats();
        stats.stepped_integrators += stepped;
        stats.last_elapsed_secs = elapsed_secs;
    }
}

/// Один display refresh tick в ECS
pub fn advance_frame(world: &mut World) {
    let Some(timestamp) = world.get_resource::<DisplayTimestamp>().copied() else {
        return;
    };
    if !world.contains_resource::<FrameDriver>() {
        return;
    }

    world.resource_scope(|world, mut driver: Mut<FrameDriver>| {
        let mut host = WorldFrameHost::new(world);
        driver.tick(timestamp.0, &mut host);
    });
}

/// Startup helper: переводит драйвер в Running после setup сцены
pub fn start_frame_driver(mut driver: ResMut<FrameDriver>) {
    driver.start();
}

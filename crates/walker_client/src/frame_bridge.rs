//! Frame bridge: display clock → FrameDriver, FrameDriver → winit / AnimationPlayer

use bevy::prelude::*;
use bevy::window::{RequestRedraw, WindowResized};
use walker_simulation::{log, DisplayTimestamp, FrameStats, LoopingClip, WalkerSet};

use crate::camera::MainCamera;
use crate::character::WalkCycle;

pub struct FrameBridgePlugin;

impl Plugin for FrameBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(First, sample_display_clock)
            .add_systems(
                Update,
                (forward_redraw_requests, sync_walk_cycles).after(WalkerSet::Frame),
            )
            .add_systems(Update, handle_window_resize);
    }
}

/// Timestamp кадра в миллисекундах (аналог display refresh timestamp)
fn sample_display_clock(time: Res<Time<Real>>, mut timestamp: ResMut<DisplayTimestamp>) {
    timestamp.0 = time.elapsed_secs_f64() * 1000.0;
}

/// Re-arm FrameDriver'а → RequestRedraw (desktop_app иначе уснёт до input'а)
fn forward_redraw_requests(
    stats: Res<FrameStats>,
    mut forwarded: Local<u64>,
    mut redraw: EventWriter<RequestRedraw>,
) {
    if stats.requested > *forwarded {
        *forwarded = stats.requested;
        redraw.write(RequestRedraw);
    }
}

/// LoopingClip playhead → ActiveAnimation
///
/// Duration становится известна только после загрузки clip'а.
fn sync_walk_cycles(
    clips: Res<Assets<AnimationClip>>,
    mut players: Query<(&mut LoopingClip, &WalkCycle, &mut AnimationPlayer)>,
) {
    for (mut looping, walk, mut player) in players.iter_mut() {
        if looping.duration().is_none() {
            if let Some(clip) = clips.get(&walk.clip) {
                looping.set_duration(clip.duration());
            }
        }

        if let Some(active) = player.animation_mut(walk.node) {
            active.seek_to(looping.time());
        }
    }
}

fn handle_window_resize(
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
) {
    for event in resized.read() {
        if event.height <= 0.0 {
            continue;
        }
        let aspect_ratio = event.width / event.height;

        for mut projection in cameras.iter_mut() {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = aspect_ratio;
            }
        }

        log(&format!("Window resized: {}x{} (aspect {:.3})", event.width, event.height, aspect_ratio));
    }
}

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (
            orbit_camera_controls,
            update_camera_transform,
        ).chain());
    }
}

/// Marker: камера которой рендерим сцену
#[derive(Component)]
pub struct MainCamera;

/// Orbit controls (без panning)
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,   // Horizontal rotation (radians)
    pub pitch: f32, // Vertical rotation (radians)
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Стартовая позиция (75, 20, 0) при focus (0, 20, 0)
        Self {
            focus: Vec3::new(0.0, 20.0, 0.0),
            distance: 75.0,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            sensitivity: 0.005,
            zoom_speed: 5.0,
            min_distance: 10.0,
            max_distance: 500.0,
        }
    }
}

impl OrbitCamera {
    /// Transform из сферических координат вокруг focus
    pub fn transform(&self) -> Transform {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();

        Transform::from_translation(self.focus + Vec3::new(x, y, z)).looking_at(self.focus, Vec3::Y)
    }
}

/// Handle mouse input for orbit camera
fn orbit_camera_controls(
    mut query: Query<&mut OrbitCamera>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut mouse_wheel: EventReader<MouseWheel>,
) {
    let mut camera = match query.single_mut() {
        Ok(cam) => cam,
        Err(_) => return,
    };

    // Left mouse button: orbit
    if mouse_buttons.pressed(MouseButton::Left) {
        for motion in mouse_motion.read() {
            camera.yaw -= motion.delta.x * camera.sensitivity;
            camera.pitch += motion.delta.y * camera.sensitivity;

            // Clamp pitch to avoid gimbal lock
            camera.pitch = camera.pitch.clamp(
                -std::f32::consts::FRAC_PI_2 + 0.1,
                std::f32::consts::FRAC_PI_2 - 0.1,
            );
        }
    } else {
        // Consume motion events even when not orbiting
        mouse_motion.clear();
    }

    // Mouse wheel: zoom
    for wheel in mouse_wheel.read() {
        camera.distance -= wheel.y * camera.zoom_speed;
        camera.distance = camera.distance.clamp(camera.min_distance, camera.max_distance);
    }
}

/// Update camera transform based on orbit parameters
fn update_camera_transform(
    mut query: Query<(&OrbitCamera, &mut Transform), Changed<OrbitCamera>>,
) {
    for (camera, mut transform) in query.iter_mut() {
        *transform = camera.transform();
    }
}

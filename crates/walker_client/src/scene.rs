//! One-time scene setup: ground, lights, camera

use bevy::pbr::{CascadeShadowConfigBuilder, NotShadowCaster};
use bevy::prelude::*;

use crate::camera::{MainCamera, OrbitCamera};

/// Ground plane (100x100), directional light с тенями, ambient, camera
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Ground plane: принимает тени, сам не отбрасывает
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(50.0)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x20, 0x20, 0x20),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(0.0, 0.0, 0.0),
        NotShadowCaster,
    ));

    // Directional light (sun), тени до 500m
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(20.0, 100.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            maximum_distance: 500.0,
            ..default()
        }
        .build(),
    ));

    // Ambient light
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        affects_lightmapped_meshes: false,
    });

    // Camera: fov 60°, near 1, far 1000, орбита вокруг (0, 20, 0)
    let orbit = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 60.0_f32.to_radians(),
            aspect_ratio: 1920.0 / 1080.0,
            near: 1.0,
            far: 1000.0,
        }),
        orbit.transform(),
        orbit,
        MainCamera,
    ));

    walker_simulation::log_info("Scene ready: ground, lights, camera");
}

//! Tests for motion integrator.

#[cfg(test)]
mod tests {
    use bevy::input::keyboard::KeyCode;
    use bevy::prelude::*;
    use std::f32::consts::PI;

    use crate::components::{AccelerationProfile, InputState, MotionProfile, MoveKey};
    use crate::motion::{CharacterControlParams, MotionIntegrator};

    const EPS: f32 = 1e-4;

    fn integrator() -> MotionIntegrator {
        MotionIntegrator::new(
            CharacterControlParams {
                target: Some(Entity::PLACEHOLDER),
                camera: None,
            },
            MotionProfile::default(),
        )
    }

    /// Yaw вокруг Y из кватерниона (корректно для |yaw| < π)
    fn yaw_of(rotation: Quat) -> f32 {
        rotation.to_euler(EulerRot::YXZ).0
    }

    #[test]
    fn test_key_down_twice_is_idempotent() {
        let mut once = integrator();
        once.on_key_down(KeyCode::KeyW);

        let mut twice = integrator();
        twice.on_key_down(KeyCode::KeyW);
        twice.on_key_down(KeyCode::KeyW);

        assert_eq!(once.input(), twice.input());
        assert!(twice.input().forward);
    }

    #[test]
    fn test_key_up_clears_only_its_flag() {
        let mut controls = integrator();
        controls.on_key_down(KeyCode::KeyW);
        controls.on_key_down(KeyCode::KeyA);
        controls.on_key_up(KeyCode::KeyW);

        assert_eq!(
            controls.input(),
            InputState {
                forward: false,
                backward: false,
                left: true,
                right: false,
            }
        );
    }

    #[test]
    fn test_numeric_key_codes() {
        let mut controls = integrator();
        controls.on_key_code_down(87);
        controls.on_key_code_down(68);
        controls.on_key_code_down(38); // стрелка вверх игнорируется
        assert!(controls.input().forward);
        assert!(controls.input().right);
        assert!(!controls.input().backward);

        controls.on_key_code_up(87);
        assert!(!controls.input().forward);
        assert!(controls.input().right);
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let mut controls = integrator();
        controls.on_key_down(KeyCode::ArrowUp);
        controls.on_key_down(KeyCode::Space);
        controls.on_key_up(KeyCode::KeyQ);

        assert_eq!(controls.input(), InputState::default());
    }

    #[test]
    fn test_inert_without_target() {
        let controls = MotionIntegrator::new(CharacterControlParams::default(), MotionProfile::default());
        assert!(controls.is_inert());
        assert!(!integrator().is_inert());
    }

    #[test]
    fn test_zero_input_decay_never_flips_sign() {
        let mut controls = integrator();
        let mut target = Transform::default();

        // 0.5 sec разгона вперёд
        controls.on_key_down(KeyCode::KeyW);
        for _ in 0..5 {
            controls.update(&mut target, 0.1);
        }
        controls.on_key_up(KeyCode::KeyW);
        assert!(controls.velocity().z > 0.0);

        // Разные dt, включая огромный (clamp должен съесть overshoot)
        let steps = [0.016, 0.1, 0.5, 1.0, 3.0, 0.0, 0.25];
        let mut previous_speed = controls.velocity().length();
        for dt in steps {
            controls.update(&mut target, dt);
            let velocity = controls.velocity();
            assert!(velocity.z >= 0.0, "forward velocity flipped sign: {}", velocity.z);
            assert!(velocity.length() <= previous_speed + EPS);
            previous_speed = velocity.length();
        }
    }

    #[test]
    fn test_zero_input_backward_decay_never_flips_sign() {
        let mut controls = integrator();
        let mut target = Transform::default();

        controls.on_key_down(KeyCode::KeyS);
        for _ in 0..5 {
            controls.update(&mut target, 0.1);
        }
        controls.on_key_up(KeyCode::KeyS);

        for _ in 0..20 {
            controls.update(&mut target, 0.7);
            assert!(controls.velocity().z <= 0.0);
        }
    }

    #[test]
    fn test_large_step_stops_exactly_at_zero() {
        let mut controls = integrator();
        let mut target = Transform::default();

        controls.on_key_down(KeyCode::KeyW);
        controls.update(&mut target, 0.1);
        controls.on_key_up(KeyCode::KeyW);

        // |v * -5 * 1.0| > |v| → clamp до |v|
        controls.update(&mut target, 1.0);
        assert_eq!(controls.velocity().z, 0.0);
    }

    #[test]
    fn test_forward_converges_to_steady_state() {
        let mut controls = integrator();
        let mut target = Transform::default();
        controls.on_key_down(KeyCode::KeyW);

        for _ in 0..100 {
            controls.update(&mut target, 0.1);
        }

        let steady = MotionProfile::default().steady_forward_speed().unwrap();
        assert!((controls.velocity().z - steady).abs() < EPS, "v = {}", controls.velocity().z);
        assert!(controls.velocity().z <= steady + EPS);
    }

    #[test]
    fn test_left_turn_rate() {
        let mut controls = integrator();
        let mut target = Transform::default();
        controls.on_key_down(KeyCode::KeyA);

        let dt = 1.0 / 60.0;
        let mut previous_yaw = 0.0;
        for tick in 1..=60 {
            controls.update(&mut target, dt);
            let yaw = yaw_of(target.rotation);
            assert!(yaw > previous_yaw, "yaw не растёт на tick {}", tick);
            previous_yaw = yaw;
        }

        // 1 sec * π * 0.25 = π/4
        let expected = PI * MotionProfile::default().turn_rate * 1.0;
        assert!((yaw_of(target.rotation) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_right_turn_is_mirror() {
        let mut controls = integrator();
        let mut target = Transform::default();
        controls.on_key_down(KeyCode::KeyD);

        for _ in 0..60 {
            controls.update(&mut target, 1.0 / 60.0);
        }

        let expected = -PI * MotionProfile::default().turn_rate;
        assert!((yaw_of(target.rotation) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_left_and_right_cancel() {
        let mut controls = integrator();
        let mut target = Transform::default();
        controls.on_key_down(KeyCode::KeyA);
        controls.on_key_down(KeyCode::KeyD);

        for _ in 0..30 {
            controls.update(&mut target, 0.05);
        }

        assert!(yaw_of(target.rotation).abs() < 1e-5);
    }

    #[test]
    fn test_turning_does_not_drive_lateral_velocity() {
        let mut controls = integrator();
        let mut target = Transform::default();
        controls.on_key_down(KeyCode::KeyA);

        for _ in 0..10 {
            controls.update(&mut target, 0.1);
        }

        assert_eq!(controls.velocity().x, 0.0);
        assert_eq!(controls.velocity().y, 0.0);
        // Поворот на месте без forward velocity не двигает entity
        assert!(target.translation.length() < EPS);
    }

    #[test]
    fn test_rotation_composes_in_local_order() {
        // Начальная ориентация с наклоном: current * delta ≠ delta * current
        let initial = Quat::from_rotation_x(0.5);
        let mut target = Transform::from_rotation(initial);
        let mut controls = integrator();
        controls.on_key_down(KeyCode::KeyA);

        controls.update(&mut target, 0.1);

        let delta = Quat::from_axis_angle(Vec3::Y, PI * 0.1 * 0.25);
        let local = (initial * delta).normalize();
        let world = (delta * initial).normalize();
        assert!(target.rotation.angle_between(local) < 1e-5);
        assert!(target.rotation.angle_between(world) > 1e-3);
    }

    #[test]
    fn test_forward_and_left_curve() {
        let mut controls = integrator();
        let mut target = Transform::default();
        let start = target.translation;
        let initial_heading = target.rotation * Vec3::Z;

        controls.on_key_down(KeyCode::KeyW);
        controls.on_key_down(KeyCode::KeyA);
        for _ in 0..20 {
            controls.update(&mut target, 0.1);
        }

        let displacement = target.translation - start;
        assert!(displacement.length() > 1.0);
        // Не коллинеарно начальному heading → траектория изогнута
        let sine = displacement.normalize().cross(initial_heading).length();
        assert!(sine > 0.1, "displacement collinear with heading: {:?}", displacement);
        // Поворот влево (+yaw) уводит forward к +X
        assert!(displacement.x > 0.0);
    }

    #[test]
    fn test_end_to_end_forward_reference() {
        let profile = MotionProfile {
            acceleration: AccelerationProfile {
                forward: 50.0,
                ..default()
            },
            ..default()
        };
        let mut controls = MotionIntegrator::new(
            CharacterControlParams {
                target: Some(Entity::PLACEHOLDER),
                camera: None,
            },
            profile,
        );
        let mut target = Transform::default();
        controls.set_key(MoveKey::Forward, true);

        // Ручная итерация формулы
        let dt = 0.1_f32;
        let mut v = 0.0_f32;
        let mut z = 0.0_f32;
        for _ in 0..10 {
            let mut decel = v * profile.deceleration.forward * dt;
            decel = decel.signum() * decel.abs().min(v.abs());
            v += decel;
            v += profile.acceleration.forward * dt;
            z += v * dt;

            controls.update(&mut target, dt);
        }

        assert!((controls.velocity().z - v).abs() < EPS);
        assert!((target.translation.z - z).abs() < EPS);

        // Closed form: v_n = 10 * (1 - 0.5^n), Σ → 10 - (1 - 0.5^10)
        assert!((controls.velocity().z - 9.990_234).abs() < EPS);
        assert!((target.translation.z - 9.000_977).abs() < EPS);
        assert!(target.translation.x.abs() < EPS);
        assert!(target.translation.y.abs() < EPS);
    }

    #[test]
    fn test_scale_untouched() {
        let mut controls = integrator();
        let mut target = Transform::from_scale(Vec3::splat(0.1));
        controls.on_key_down(KeyCode::KeyW);
        controls.on_key_down(KeyCode::KeyD);

        for _ in 0..10 {
            controls.update(&mut target, 0.1);
        }

        assert_eq!(target.scale, Vec3::splat(0.1));
        assert!((target.rotation.length() - 1.0).abs() < 1e-5);
    }
}

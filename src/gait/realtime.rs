//! Procedural realtime gait synthesis for the hexapod.
//!
//! Instead of playing a precomputed table, every tick computes each foot's
//! offset from the standing pose directly from the commanded velocity: a
//! linear backward sweep for legs in stance, a half-sine arc for legs in
//! swing, with a fixed per-leg phase offset realizing a two-group trot.
use core::f32::consts::PI;

use log::{debug, info};
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::gait::hex_tables::HEX_STANDBY_POSE;
use crate::gait::params::{GaitParameters, Velocity};
use crate::kinematics::{Locations, Point3D};
use crate::robot::config;

/// Per-leg phase offset. Legs FR/BR/L against R/BL/FL, the classic
/// alternating-tripod split.
const TROT_PHASE_OFFSET: [f32; 6] = [0.0, 0.5, 0.0, 0.5, 0.0, 0.5];

#[derive(Debug)]
pub struct RealtimeGait {
    params: GaitParameters,
    velocity: Velocity,
    position: Locations<6>,
    phase: f32,
}

impl Default for RealtimeGait {
    fn default() -> Self {
        Self::new()
    }
}

impl RealtimeGait {
    pub fn new() -> Self {
        Self {
            params: GaitParameters::default(),
            velocity: Velocity::default(),
            position: HEX_STANDBY_POSE,
            phase: 0.0,
        }
    }

    pub fn set_parameters(&mut self, params: GaitParameters) {
        self.params = params;
        info!(
            "gait parameters: stride={} lift={} period={}",
            params.stride(),
            params.lift_height(),
            params.period()
        );
    }

    pub fn parameters(&self) -> &GaitParameters {
        &self.params
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
        debug!(
            "velocity: vx={} vy={} vyaw={}",
            velocity.vx, velocity.vy, velocity.vyaw
        );
    }

    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    /// Restart the cycle from phase zero at the standing pose.
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.position = HEX_STANDBY_POSE;
    }

    /// Advance the gait phase by the elapsed tick time and return the foot
    /// positions for this instant.
    pub fn update(&mut self, elapsed_ms: u32) -> &Locations<6> {
        self.phase += elapsed_ms as f32 / self.params.period();
        self.phase -= self.phase.floor();

        // Stopped: hold the exact standing pose, regardless of phase.
        if self.velocity.is_zero() {
            self.position = HEX_STANDBY_POSE;
            return &self.position;
        }

        let move_speed = (self.velocity.vx * self.velocity.vx
            + self.velocity.vy * self.velocity.vy)
            .sqrt();
        let move_angle = self.velocity.vy.atan2(self.velocity.vx);

        for i in 0..6 {
            let mut leg_pos = HEX_STANDBY_POSE[i];

            let mut leg_phase = self.phase + TROT_PHASE_OFFSET[i];
            leg_phase -= leg_phase.floor();

            if move_speed > 0.0 {
                let stride_scale = (move_speed / config::MAX_VELOCITY_X).min(1.0);
                let stride = self.params.stride() * stride_scale;

                let offset = if leg_phase < self.params.duty_factor() {
                    let stance_ratio = leg_phase / self.params.duty_factor();
                    stance_offset(stance_ratio, stride, move_angle)
                } else {
                    let swing_ratio = (leg_phase - self.params.duty_factor())
                        / (1.0 - self.params.duty_factor());
                    swing_offset(swing_ratio, stride, move_angle, self.params.lift_height())
                };
                leg_pos += offset;
            }

            if self.velocity.vyaw != 0.0 {
                leg_pos += self.rotation_offset(i);
            }

            self.position[i] = leg_pos;
        }

        &self.position
    }

    /// Tangential offset from the yaw rate: the arc the mount point sweeps
    /// in one gait period, halved to center it on the stance.
    fn rotation_offset(&self, leg: usize) -> Point3D {
        let mount = config::HEX_MOUNTS[leg];
        let radius = (mount.x * mount.x + mount.y * mount.y).sqrt();
        let mount_angle = mount.y.atan2(mount.x);

        let arc_deg = self.velocity.vyaw * self.params.period() / 1000.0;
        let arc_len = radius * arc_deg * PI / 180.0;

        Point3D::new(
            -mount_angle.sin() * arc_len * 0.5,
            mount_angle.cos() * arc_len * 0.5,
            0.0,
        )
    }
}

/// Stance: foot sweeps linearly from +stride/2 to -stride/2 along the travel
/// direction, staying on the ground.
fn stance_offset(ratio: f32, stride: f32, angle: f32) -> Point3D {
    let offset = stride * (0.5 - ratio);
    Point3D::new(offset * angle.cos(), offset * angle.sin(), 0.0)
}

/// Swing: foot returns from -stride/2 to +stride/2 while z follows a
/// half-sine arc, zero at lift-off and touch-down.
fn swing_offset(ratio: f32, stride: f32, angle: f32, lift_height: f32) -> Point3D {
    let offset = stride * (ratio - 0.5);
    Point3D::new(
        offset * angle.cos(),
        offset * angle.sin(),
        lift_height * (PI * ratio).sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_returns_exact_standby_every_tick() {
        let mut gait = RealtimeGait::new();
        for _ in 0..50 {
            assert_eq!(*gait.update(20), HEX_STANDBY_POSE);
        }
    }

    #[test]
    fn swing_z_is_zero_at_ends_and_lift_height_at_apex() {
        let lift = 25.0;
        assert!(swing_offset(0.0, 50.0, 0.0, lift).z.abs() < 1e-5);
        assert!((swing_offset(0.5, 50.0, 0.0, lift).z - lift).abs() < 1e-5);
        assert!(swing_offset(1.0, 50.0, 0.0, lift).z.abs() < 1e-4);
    }

    #[test]
    fn stance_sweeps_from_front_to_back() {
        // travel along +x for angle 0
        assert!((stance_offset(0.0, 50.0, 0.0).x - 25.0).abs() < 1e-5);
        assert!((stance_offset(1.0, 50.0, 0.0).x + 25.0).abs() < 1e-5);
        assert_eq!(stance_offset(0.5, 50.0, 0.0).z, 0.0);
    }

    #[test]
    fn stride_scales_with_speed_magnitude() {
        let mut gait = RealtimeGait::new();
        gait.set_velocity(Velocity::new(config::MAX_VELOCITY_X / 2.0, 0.0, 0.0));
        let half = *gait.update(100);
        gait.reset();
        gait.set_velocity(Velocity::new(config::MAX_VELOCITY_X, 0.0, 0.0));
        let full = *gait.update(100);
        let half_dx = half[0].x - HEX_STANDBY_POSE[0].x;
        let full_dx = full[0].x - HEX_STANDBY_POSE[0].x;
        assert!((full_dx - 2.0 * half_dx).abs() < 1e-3);
    }

    #[test]
    fn opposite_phase_groups_alternate_support() {
        let mut gait = RealtimeGait::new();
        gait.set_velocity(Velocity::new(0.0, 100.0, 0.0));
        // quarter period in: group A mid-stance, group B mid-swing
        let pos = *gait.update(200);
        let a_lifted = pos[0].z > HEX_STANDBY_POSE[0].z + 1.0;
        let b_lifted = pos[1].z > HEX_STANDBY_POSE[1].z + 1.0;
        assert_ne!(a_lifted, b_lifted);
    }

    #[test]
    fn pure_yaw_offsets_are_tangential() {
        let mut gait = RealtimeGait::new();
        gait.set_velocity(Velocity::new(0.0, 0.0, 45.0));
        let pos = *gait.update(100);
        for i in 0..6 {
            let offset = pos[i] - HEX_STANDBY_POSE[i];
            let mount = config::HEX_MOUNTS[i];
            // tangential: perpendicular to the mount radial, no z component
            let radial_dot = offset.x * mount.x + offset.y * mount.y;
            assert!(radial_dot.abs() < 1e-2, "leg {i}: {radial_dot}");
            assert_eq!(offset.z, 0.0);
        }
    }
}

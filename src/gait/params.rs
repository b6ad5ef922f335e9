//! Clamped parameter types shared by the gait generators.
//!
//! Out-of-range values are never rejected: every setter clamps to the
//! nearest configured bound and logs the correction, so a sloppy remote
//! control can never wedge the robot.
use log::warn;

use crate::robot::config;

fn clamp_logged(name: &str, value: f32, min: f32, max: f32) -> f32 {
    if value < min || value > max {
        warn!("{name} {value} outside [{min}, {max}], clamping");
    }
    value.clamp(min, max)
}

/// Stride shape of the realtime gait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaitParameters {
    stride: f32,
    lift_height: f32,
    period: f32,
    duty_factor: f32,
}

impl Default for GaitParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GaitParameters {
    pub const DEFAULT: GaitParameters = GaitParameters {
        stride: config::DEFAULT_STRIDE,
        lift_height: config::DEFAULT_LIFT_HEIGHT,
        period: config::DEFAULT_GAIT_PERIOD,
        duty_factor: config::DEFAULT_DUTY_FACTOR,
    };

    pub fn new(stride: f32, lift_height: f32, period: f32, duty_factor: f32) -> Self {
        Self {
            stride: clamp_logged("stride", stride, config::MIN_STRIDE, config::MAX_STRIDE),
            lift_height: clamp_logged(
                "lift height",
                lift_height,
                config::MIN_LIFT_HEIGHT,
                config::MAX_LIFT_HEIGHT,
            ),
            period: clamp_logged(
                "gait period",
                period,
                config::MIN_GAIT_PERIOD,
                config::MAX_GAIT_PERIOD,
            ),
            duty_factor: clamp_logged(
                "duty factor",
                duty_factor,
                config::MIN_DUTY_FACTOR,
                config::MAX_DUTY_FACTOR,
            ),
        }
    }

    pub fn stride(&self) -> f32 {
        self.stride
    }

    pub fn lift_height(&self) -> f32 {
        self.lift_height
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn duty_factor(&self) -> f32 {
        self.duty_factor
    }
}

/// Commanded chassis velocity. `vx`/`vy` in mm/s, `vyaw` in deg/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
    pub vyaw: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32, vyaw: f32) -> Self {
        Self {
            vx: clamp_logged("vx", vx, -config::MAX_VELOCITY_X, config::MAX_VELOCITY_X),
            vy: clamp_logged("vy", vy, -config::MAX_VELOCITY_Y, config::MAX_VELOCITY_Y),
            vyaw: clamp_logged(
                "vyaw",
                vyaw,
                -config::MAX_VELOCITY_YAW,
                config::MAX_VELOCITY_YAW,
            ),
        }
    }

    /// Exact zero test. The realtime gait uses this to bypass synthesis
    /// entirely while stopped, so any epsilon here would reintroduce standing
    /// twitch.
    pub fn is_zero(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0 && self.vyaw == 0.0
    }
}

/// Whole-body attitude and offset. Angles in degrees, offsets in mm, all
/// clamped symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyPose {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl BodyPose {
    pub fn new(roll: f32, pitch: f32, yaw: f32, x: f32, y: f32, z: f32) -> Self {
        Self {
            roll: clamp_logged("roll", roll, -config::MAX_ROLL, config::MAX_ROLL),
            pitch: clamp_logged("pitch", pitch, -config::MAX_PITCH, config::MAX_PITCH),
            yaw: clamp_logged("yaw", yaw, -config::MAX_YAW, config::MAX_YAW),
            x: clamp_logged("x offset", x, -config::MAX_PLANE_OFFSET, config::MAX_PLANE_OFFSET),
            y: clamp_logged("y offset", y, -config::MAX_PLANE_OFFSET, config::MAX_PLANE_OFFSET),
            z: clamp_logged(
                "z offset",
                z,
                -config::MAX_HEIGHT_OFFSET,
                config::MAX_HEIGHT_OFFSET,
            ),
        }
    }

    /// Identity test used by the pose transform fast path. All six fields
    /// must be exactly zero.
    pub fn is_identity(&self) -> bool {
        self.roll == 0.0
            && self.pitch == 0.0
            && self.yaw == 0.0
            && self.x == 0.0
            && self.y == 0.0
            && self.z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gait_parameters_clamp_to_bounds() {
        let p = GaitParameters::new(500.0, 1.0, 100.0, 0.9);
        assert_eq!(p.stride(), config::MAX_STRIDE);
        assert_eq!(p.lift_height(), config::MIN_LIFT_HEIGHT);
        assert_eq!(p.period(), config::MIN_GAIT_PERIOD);
        assert_eq!(p.duty_factor(), config::MAX_DUTY_FACTOR);
    }

    #[test]
    fn velocity_zero_is_exact() {
        assert!(Velocity::default().is_zero());
        assert!(!Velocity::new(0.0, 1e-6, 0.0).is_zero());
    }

    #[test]
    fn body_pose_clamps_all_six_fields() {
        let p = BodyPose::new(90.0, -90.0, 45.0, 200.0, -200.0, 120.0);
        assert_eq!(p.roll, config::MAX_ROLL);
        assert_eq!(p.pitch, -config::MAX_PITCH);
        assert_eq!(p.yaw, config::MAX_YAW);
        assert_eq!(p.x, config::MAX_PLANE_OFFSET);
        assert_eq!(p.y, -config::MAX_PLANE_OFFSET);
        assert_eq!(p.z, config::MAX_HEIGHT_OFFSET);
    }

    #[test]
    fn identity_requires_every_field_zero() {
        assert!(BodyPose::default().is_identity());
        assert!(!BodyPose::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0).is_identity());
    }
}

//! Physical and movement constants for the robot.
//!
//! All lengths are millimeters, durations milliseconds, angles degrees.
//! The link lengths and mount offsets describe the actual chassis hardware;
//! changing them invalidates every precomputed gait table.
use crate::kinematics::Point3D;

// Leg link lengths, shared by both chassis variants.
pub const ROOT_TO_JOINT1: f32 = 20.75;
pub const JOINT1_TO_JOINT2: f32 = 28.0;
pub const JOINT2_TO_JOINT3: f32 = 42.6;
pub const JOINT3_TO_TIP: f32 = 89.07;

// Hexapod mount offsets from the chassis center.
pub const HEX_MOUNT_SIDE_X: f32 = 29.87;
pub const HEX_MOUNT_CORNER_X: f32 = 22.41;
pub const HEX_MOUNT_CORNER_Y: f32 = 55.41;

// Quadruped mount offsets; all four legs sit at 45° corners.
pub const QUAD_MOUNT_X: f32 = 25.0;
pub const QUAD_MOUNT_Y: f32 = 45.0;

/// Hexapod mount points in canonical leg order: FR, R, BR, BL, L, FL.
/// X right, Y forward, Z up, origin at the chassis center.
pub const HEX_MOUNTS: [Point3D; 6] = [
    Point3D::new(HEX_MOUNT_CORNER_X, HEX_MOUNT_CORNER_Y, 0.0),
    Point3D::new(HEX_MOUNT_SIDE_X, 0.0, 0.0),
    Point3D::new(HEX_MOUNT_CORNER_X, -HEX_MOUNT_CORNER_Y, 0.0),
    Point3D::new(-HEX_MOUNT_CORNER_X, -HEX_MOUNT_CORNER_Y, 0.0),
    Point3D::new(-HEX_MOUNT_SIDE_X, 0.0, 0.0),
    Point3D::new(-HEX_MOUNT_CORNER_X, HEX_MOUNT_CORNER_Y, 0.0),
];

/// Quadruped mount points in canonical leg order: FR, BR, BL, FL.
pub const QUAD_MOUNTS: [Point3D; 4] = [
    Point3D::new(QUAD_MOUNT_X, QUAD_MOUNT_Y, 0.0),
    Point3D::new(QUAD_MOUNT_X, -QUAD_MOUNT_Y, 0.0),
    Point3D::new(-QUAD_MOUNT_X, -QUAD_MOUNT_Y, 0.0),
    Point3D::new(-QUAD_MOUNT_X, QUAD_MOUNT_Y, 0.0),
];

/// Control-loop tick. The servo refresh runs at 50 Hz, so finer timing
/// cannot reach the hardware anyway.
pub const MOVEMENT_INTERVAL_MS: u32 = 20;
/// Minimum blend duration when switching movement tables.
pub const MOVEMENT_SWITCH_DURATION_MS: u32 = 150;

pub const DEFAULT_SPEED: f32 = 0.5;
pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 1.0;

/// Speed multiplier per [`SpeedLevel`](crate::gait::SpeedLevel), slowest
/// first.
pub const SPEED_LEVEL_MULTIPLIERS: [f32; 4] = [0.25, 0.33, 0.5, 1.0];

// Realtime gait parameter bounds.
pub const DEFAULT_STRIDE: f32 = 50.0;
pub const MIN_STRIDE: f32 = 30.0;
pub const MAX_STRIDE: f32 = 80.0;

pub const DEFAULT_LIFT_HEIGHT: f32 = 25.0;
pub const MIN_LIFT_HEIGHT: f32 = 15.0;
pub const MAX_LIFT_HEIGHT: f32 = 40.0;

pub const DEFAULT_GAIT_PERIOD: f32 = 800.0;
pub const MIN_GAIT_PERIOD: f32 = 500.0;
pub const MAX_GAIT_PERIOD: f32 = 1500.0;

pub const DEFAULT_DUTY_FACTOR: f32 = 0.5;
pub const MIN_DUTY_FACTOR: f32 = 0.4;
pub const MAX_DUTY_FACTOR: f32 = 0.6;

// Body pose limits.
pub const MAX_ROLL: f32 = 30.0;
pub const MAX_PITCH: f32 = 30.0;
pub const MAX_YAW: f32 = 30.0;
pub const MAX_HEIGHT_OFFSET: f32 = 50.0;
pub const MAX_PLANE_OFFSET: f32 = 50.0;
/// Walk-mode pitch is kept tighter than the standing pose limit.
pub const MAX_WALK_PITCH: f32 = 15.0;

// Velocity limits.
pub const MAX_VELOCITY_X: f32 = 200.0;
pub const MAX_VELOCITY_Y: f32 = 200.0;
pub const MAX_VELOCITY_YAW: f32 = 90.0;

// Gait transition timing, scaled by speed at runtime.
pub const GROUNDING_DURATION_MS: u32 = 300;
pub const ALIGN_LIFT_DURATION_MS: u32 = 150;
pub const ALIGN_TRANSLATE_DURATION_MS: u32 = 250;
pub const ALIGN_LOWER_DURATION_MS: u32 = 150;
/// Clearance above the higher of start/target during an alignment arc.
pub const ALIGN_CLEARANCE_MM: f32 = 20.0;
/// Legs closer to their target than this (squared mm) are not re-aligned.
pub const ALIGN_DISTANCE_SQ_THRESHOLD: f32 = 1.0;

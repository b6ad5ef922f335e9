//! Motion core for a multi-legged walking robot.
//!
//! Turns high-level locomotion commands (move with a velocity, hold a body
//! pose, play a gait, switch gaits) into per-leg joint angles at a fixed
//! control-loop rate, for a 4- or 6-legged chassis.
//!
//! - [`kinematics`]: geometry primitives, forward/inverse kinematics and the
//!   per-leg local/world frame conversion.
//! - [`gait`]: key-frame tables and playback, the quadruped gait-transition
//!   state machine, the hexapod realtime gait generator and the body-pose
//!   transform.
//! - [`robot`]: leg/joint/servo types, chassis assemblies and the shared
//!   command snapshot written by the comms task.
//! - [`tasks`]: the fixed-rate motion loops spawned by the firmware binary.
#![cfg_attr(not(test), no_std)]

pub mod gait;
pub mod kinematics;
pub mod robot;
pub mod tasks;

//! Core robot types and chassis assemblies.
//!
//! - [`commands`]: command types for inter-task communication and the
//!   remote text protocol.
//! - [`config`]: physical and movement constants for both chassis.
//! - [`joint`] / [`leg`] / [`servo`]: the per-joint hardware stack.
//! - [`quad`] / [`hexapod`]: the assembled robots.
//! - [`state`]: the shared motion request read by the motion loops.
pub mod commands;
pub mod config;
pub mod hexapod;
pub mod joint;
pub mod leg;
pub mod quad;
pub mod servo;
pub mod state;

pub use commands::{ParseCommandError, RobotCommand};
pub use hexapod::HexapodRobot;
pub use joint::Joint;
pub use leg::{HexLeg, Leg, QuadLeg};
pub use quad::QuadRobot;
pub use servo::Servo;
pub use state::MotionRequest;

//! Kinematics for a 3-joint rotary leg.
//!
//! This module provides the mathematical routines shared by every leg of the
//! robot, independent of how many legs the chassis carries:
//!
//! - [`point`] defines the coordinate primitives ([`point::Point3D`],
//!   [`point::Locations`]).
//! - [`conversion`] handles forward/inverse kinematics and the per-leg
//!   chassis/local frame conversion.
//!
//! Used by the leg layer to turn foot targets into joint angles, and by the
//! gait synthesizers to reason about foot positions in the chassis frame.
pub mod conversion;
pub mod point;

pub use conversion::{inverse_kinematics, forward_kinematics, LegFrame, MountAngle};
pub use point::{Locations, Point3D};

//! Gait generation and sequencing.
//!
//! Two ways of producing foot positions live here:
//!
//! - Table playback: precomputed key-frame tables ([`table`], [`quad_tables`],
//!   [`hex_tables`]) advanced by the interpolating [`table::Playback`] engine,
//!   with the quadruped [`transition`] machine sequencing safe hand-offs
//!   between tables.
//! - Realtime synthesis: [`realtime`] computes hexapod stance/swing
//!   trajectories from a velocity vector every tick.
//!
//! [`pose`] applies a whole-body roll/pitch/yaw/offset transform on top of
//! either output. [`params`] holds the clamped parameter types shared by
//! both.
pub mod hex_tables;
pub mod params;
pub mod pose;
pub mod quad_tables;
pub mod realtime;
pub mod table;
pub mod transition;

pub use params::{BodyPose, GaitParameters, Velocity};
pub use pose::PoseController;
pub use realtime::RealtimeGait;
pub use table::{GaitTable, Playback};
pub use transition::{GaitSwitchRejected, QuadWalker};

use crate::robot::config;

/// Movement requested of a walking robot. For the quadruped every variant
/// maps to a precomputed table; unsupported combinations degrade to
/// [`MovementMode::Standby`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    Standby,
    Forward,
    ForwardFast,
    Backward,
    TurnLeft,
    TurnRight,
    ShiftLeft,
    ShiftRight,
    Climb,
    RotateX,
    RotateY,
    RotateZ,
    Twist,
}

impl MovementMode {
    /// Posture modes shuffle the body around a fixed footfall pattern; they
    /// never change which legs carry the robot.
    pub fn is_posture(self) -> bool {
        matches!(
            self,
            MovementMode::Standby
                | MovementMode::RotateX
                | MovementMode::RotateY
                | MovementMode::RotateZ
                | MovementMode::Twist
        )
    }

    /// Pair group for the entry-hop shortcut: tables within a group share an
    /// equivalent entry pose by construction.
    pub fn pair_group(self) -> Option<PairGroup> {
        match self {
            MovementMode::Forward | MovementMode::Backward => Some(PairGroup::ForwardBackward),
            MovementMode::TurnLeft | MovementMode::TurnRight => Some(PairGroup::Turn),
            MovementMode::ShiftLeft | MovementMode::ShiftRight => Some(PairGroup::Shift),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairGroup {
    ForwardBackward,
    Turn,
    Shift,
}

/// Quadruped gait family. Each family carries a full set of movement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuadGait {
    #[default]
    Trot,
    Walk,
    Gallop,
    Creep,
}

/// Hexapod realtime control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Stand,
    Walk,
}

/// Discrete speed setting layered over the continuous multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLevel {
    Slowest = 0,
    Slow = 1,
    Medium = 2,
    Fast = 3,
}

impl SpeedLevel {
    pub fn multiplier(self) -> f32 {
        config::SPEED_LEVEL_MULTIPLIERS[self as usize]
    }
}

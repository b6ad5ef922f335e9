//! Joint enumeration and per-joint servo geometry.
//!
//! Defines the [`Joint`] enum for identifying each joint (coxa, femur,
//! tibia) and the mechanical limits the servo layer enforces. Joint order
//! matches the PWM channel mapping: `channel = leg * 3 + joint`.
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joint {
    Coxa = 0,
    Femur = 1,
    Tibia = 2,
}

impl Joint {
    /// Mechanical travel from center, degrees. The solver can ask for more;
    /// the servo clamps and logs.
    pub fn range(self) -> f32 {
        match self {
            Joint::Coxa => 45.0,
            Joint::Femur | Joint::Tibia => 60.0,
        }
    }

    /// Neutral-pose offset baked into the linkage, degrees.
    pub fn adjust(self) -> f32 {
        match self {
            Joint::Femur => 15.0,
            _ => 0.0,
        }
    }

    /// The femur horn is mounted mirrored, so its drive angle is negated.
    pub fn inverted(self) -> bool {
        matches!(self, Joint::Femur)
    }
}

impl Display for Joint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Joint::Coxa => f.write_str("coxa"),
            Joint::Femur => f.write_str("femur"),
            Joint::Tibia => f.write_str("tibia"),
        }
    }
}

impl From<usize> for Joint {
    fn from(value: usize) -> Self {
        match value {
            0 => Joint::Coxa,
            1 => Joint::Femur,
            2 => Joint::Tibia,
            _ => unreachable!(),
        }
    }
}

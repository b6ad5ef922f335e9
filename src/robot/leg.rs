//! Leg identifiers and the three-servo leg assembly.
//!
//! Leg order is a cross-cutting invariant: it must match the PWM channel
//! mapping, the precomputed gait tables and the support classification in
//! the transition machine. It is defined once, here, as the enum
//! discriminants; everything else goes through `as usize`.
use core::fmt::Display;
use core::ops::{Index, IndexMut};

use embedded_hal::pwm::SetDutyCycle;

use crate::kinematics::{inverse_kinematics, LegFrame, Locations, MountAngle, Point3D};
use crate::robot::config;
use crate::robot::servo::Servo;

/// Quadruped legs in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadLeg {
    FrontRight = 0,
    BackRight = 1,
    BackLeft = 2,
    FrontLeft = 3,
}

impl QuadLeg {
    pub const ALL: [QuadLeg; 4] = [
        QuadLeg::FrontRight,
        QuadLeg::BackRight,
        QuadLeg::BackLeft,
        QuadLeg::FrontLeft,
    ];

    /// Mount point and heading of this leg on the quadruped chassis. All
    /// four legs sit on 45° diagonals.
    pub fn frame(self) -> LegFrame {
        let heading = match self {
            QuadLeg::FrontRight => MountAngle::DEG_45,
            QuadLeg::BackRight => MountAngle::DEG_315,
            QuadLeg::BackLeft => MountAngle::DEG_225,
            QuadLeg::FrontLeft => MountAngle::DEG_135,
        };
        LegFrame::new(config::QUAD_MOUNTS[self as usize], heading)
    }
}

impl Display for QuadLeg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuadLeg::FrontRight => f.write_str("front right"),
            QuadLeg::BackRight => f.write_str("back right"),
            QuadLeg::BackLeft => f.write_str("back left"),
            QuadLeg::FrontLeft => f.write_str("front left"),
        }
    }
}

impl From<usize> for QuadLeg {
    fn from(value: usize) -> Self {
        match value {
            0 => QuadLeg::FrontRight,
            1 => QuadLeg::BackRight,
            2 => QuadLeg::BackLeft,
            3 => QuadLeg::FrontLeft,
            _ => unreachable!(),
        }
    }
}

/// Hexapod legs in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexLeg {
    FrontRight = 0,
    Right = 1,
    BackRight = 2,
    BackLeft = 3,
    Left = 4,
    FrontLeft = 5,
}

impl HexLeg {
    pub const ALL: [HexLeg; 6] = [
        HexLeg::FrontRight,
        HexLeg::Right,
        HexLeg::BackRight,
        HexLeg::BackLeft,
        HexLeg::Left,
        HexLeg::FrontLeft,
    ];

    pub fn frame(self) -> LegFrame {
        let heading = match self {
            HexLeg::FrontRight => MountAngle::DEG_45,
            HexLeg::Right => MountAngle::DEG_0,
            HexLeg::BackRight => MountAngle::DEG_315,
            HexLeg::BackLeft => MountAngle::DEG_225,
            HexLeg::Left => MountAngle::DEG_180,
            HexLeg::FrontLeft => MountAngle::DEG_135,
        };
        LegFrame::new(config::HEX_MOUNTS[self as usize], heading)
    }
}

impl Display for HexLeg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HexLeg::FrontRight => f.write_str("front right"),
            HexLeg::Right => f.write_str("right"),
            HexLeg::BackRight => f.write_str("back right"),
            HexLeg::BackLeft => f.write_str("back left"),
            HexLeg::Left => f.write_str("left"),
            HexLeg::FrontLeft => f.write_str("front left"),
        }
    }
}

impl From<usize> for HexLeg {
    fn from(value: usize) -> Self {
        match value {
            0 => HexLeg::FrontRight,
            1 => HexLeg::Right,
            2 => HexLeg::BackRight,
            3 => HexLeg::BackLeft,
            4 => HexLeg::Left,
            5 => HexLeg::FrontLeft,
            _ => unreachable!(),
        }
    }
}

impl Index<QuadLeg> for Locations<4> {
    type Output = Point3D;

    fn index(&self, leg: QuadLeg) -> &Self::Output {
        &self[leg as usize]
    }
}

impl IndexMut<QuadLeg> for Locations<4> {
    fn index_mut(&mut self, leg: QuadLeg) -> &mut Self::Output {
        &mut self[leg as usize]
    }
}

impl Index<HexLeg> for Locations<6> {
    type Output = Point3D;

    fn index(&self, leg: HexLeg) -> &Self::Output {
        &self[leg as usize]
    }
}

impl IndexMut<HexLeg> for Locations<6> {
    fn index_mut(&mut self, leg: HexLeg) -> &mut Self::Output {
        &mut self[leg as usize]
    }
}

/// One leg: a mount frame plus its coxa/femur/tibia servos, caching the
/// last driven tip position so redundant solves are skipped.
#[derive(Debug)]
pub struct Leg<PWM> {
    frame: LegFrame,
    servos: [Servo<PWM>; 3],
    tip: Point3D,
}

impl<PWM> Leg<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(frame: LegFrame, servos: [Servo<PWM>; 3]) -> Self {
        Self {
            frame,
            servos,
            // NaN compares unequal to everything, so the first move always
            // drives the servos
            tip: Point3D::new(f32::NAN, f32::NAN, f32::NAN),
        }
    }

    /// Moves the tip to `world` (chassis frame). No-op when the target is
    /// bit-identical to the last driven position.
    pub fn move_tip(&mut self, world: Point3D) {
        if world == self.tip {
            return;
        }
        self.tip = world;
        let angles = inverse_kinematics(self.frame.to_local(world));
        for (servo, angle) in self.servos.iter_mut().zip(angles) {
            servo.set_angle(angle);
        }
    }

    /// Moves the tip to a position in the leg's own frame.
    pub fn move_tip_local(&mut self, local: Point3D) {
        self.move_tip(self.frame.to_world(local));
    }

    /// Invalidates the cached tip so the next move re-drives the servos
    /// even if the target has not changed. Used after calibration writes.
    pub fn force_reset_tip_position(&mut self) {
        self.tip = Point3D::new(f32::NAN, f32::NAN, f32::NAN);
    }

    pub fn tip(&self) -> Point3D {
        self.tip
    }

    pub fn joint_angles(&self) -> [f32; 3] {
        [
            self.servos[0].angle(),
            self.servos[1].angle(),
            self.servos[2].angle(),
        ]
    }

    pub fn servo_mut(&mut self, joint: usize) -> &mut Servo<PWM> {
        &mut self.servos[joint]
    }

    pub fn servo(&self, joint: usize) -> &Servo<PWM> {
        &self.servos[joint]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_leg_roundtrip_through_usize() {
        for leg in QuadLeg::ALL {
            assert_eq!(QuadLeg::from(leg as usize), leg);
        }
    }

    #[test]
    fn hex_leg_roundtrip_through_usize() {
        for leg in HexLeg::ALL {
            assert_eq!(HexLeg::from(leg as usize), leg);
        }
    }

    #[test]
    fn quad_frames_mirror_across_the_chassis() {
        let fr = QuadLeg::FrontRight.frame();
        let bl = QuadLeg::BackLeft.frame();
        assert_eq!(fr.mount().x, -bl.mount().x);
        assert_eq!(fr.mount().y, -bl.mount().y);
    }

    #[test]
    fn locations_index_by_leg() {
        let mut locs = Locations::<4>::default();
        locs[QuadLeg::BackLeft] = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(locs[2], Point3D::new(1.0, 2.0, 3.0));
    }
}

//! Inverse and forward kinematics, plus chassis/local frame conversion.
//!
//! Every leg is the same mechanism: a coxa joint rotating in the horizontal
//! plane, then femur and tibia rotating in the vertical plane through the
//! coxa axis. The local frame has X pointing outward along the coxa at 0°,
//! Z up, origin at the leg root. Angles are degrees, as the servo layer
//! consumes them.
//!
//! Used by the leg layer (held by each robot) to plan and execute foot moves.
use core::f32::consts::{FRAC_1_SQRT_2, PI};

use log::warn;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::kinematics::point::Point3D;
use crate::robot::config::{JOINT1_TO_JOINT2, JOINT2_TO_JOINT3, JOINT3_TO_TIP, ROOT_TO_JOINT1};

const DEG_PER_RAD: f32 = 180.0 / PI;

/// `acos` with the argument clamped to its domain. Targets slightly outside
/// the reachable envelope (from float drift or an aggressive pose offset)
/// resolve to the nearest reachable pose instead of NaN.
fn acos_clamped(v: f32) -> f32 {
    if !(-1.0..=1.0).contains(&v) {
        warn!("ik: acos argument {v} out of range, clamping");
        return v.clamp(-1.0, 1.0).acos();
    }
    v.acos()
}

/// Joint angles (degrees, `[coxa, femur, tibia]`) for a foot target in the
/// leg-local frame.
pub fn inverse_kinematics(to: Point3D) -> [f32; 3] {
    let x = to.x - ROOT_TO_JOINT1;
    let y = to.y;

    let coxa = y.atan2(x) * DEG_PER_RAD;

    // Project into the vertical plane through the coxa axis and solve the
    // femur/tibia pair with the law of cosines.
    let x = (x * x + y * y).sqrt() - JOINT1_TO_JOINT2;
    let y = to.z;
    let ar = y.atan2(x);
    let lr2 = x * x + y * y;
    let lr = lr2.sqrt();
    let a1 = acos_clamped(
        (lr2 + JOINT2_TO_JOINT3 * JOINT2_TO_JOINT3 - JOINT3_TO_TIP * JOINT3_TO_TIP)
            / (2.0 * JOINT2_TO_JOINT3 * lr),
    );
    let a2 = acos_clamped(
        (lr2 - JOINT2_TO_JOINT3 * JOINT2_TO_JOINT3 + JOINT3_TO_TIP * JOINT3_TO_TIP)
            / (2.0 * JOINT3_TO_TIP * lr),
    );

    let femur = (ar + a1) * DEG_PER_RAD;
    let tibia = 90.0 - (a1 + a2) * DEG_PER_RAD;

    [coxa, femur, tibia]
}

/// Foot position in the leg-local frame for joint angles (degrees,
/// `[coxa, femur, tibia]`). Inverse of [`inverse_kinematics`] inside the
/// reachable envelope.
pub fn forward_kinematics(angles: [f32; 3]) -> Point3D {
    let coxa = angles[0] / DEG_PER_RAD;
    let femur = angles[1] / DEG_PER_RAD;
    let tibia = angles[2] / DEG_PER_RAD;

    // Reach in the vertical plane, measured from joint 1.
    let r = JOINT1_TO_JOINT2
        + femur.cos() * JOINT2_TO_JOINT3
        + (femur + tibia - PI / 2.0).cos() * JOINT3_TO_TIP;

    Point3D::new(
        ROOT_TO_JOINT1 + coxa.cos() * r,
        coxa.sin() * r,
        femur.sin() * JOINT2_TO_JOINT3 + (femur + tibia - PI / 2.0).sin() * JOINT3_TO_TIP,
    )
}

/// Heading of a leg mount in the horizontal plane, restricted to the
/// multiples of 45° the chassis actually uses so the cos/sin pairs are exact
/// constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountAngle {
    cos: f32,
    sin: f32,
}

impl MountAngle {
    pub const DEG_0: MountAngle = MountAngle { cos: 1.0, sin: 0.0 };
    pub const DEG_45: MountAngle = MountAngle {
        cos: FRAC_1_SQRT_2,
        sin: FRAC_1_SQRT_2,
    };
    pub const DEG_90: MountAngle = MountAngle { cos: 0.0, sin: 1.0 };
    pub const DEG_135: MountAngle = MountAngle {
        cos: -FRAC_1_SQRT_2,
        sin: FRAC_1_SQRT_2,
    };
    pub const DEG_180: MountAngle = MountAngle { cos: -1.0, sin: 0.0 };
    pub const DEG_225: MountAngle = MountAngle {
        cos: -FRAC_1_SQRT_2,
        sin: -FRAC_1_SQRT_2,
    };
    pub const DEG_270: MountAngle = MountAngle { cos: 0.0, sin: -1.0 };
    pub const DEG_315: MountAngle = MountAngle {
        cos: FRAC_1_SQRT_2,
        sin: -FRAC_1_SQRT_2,
    };

    /// Rotate a point around the Z axis by this angle.
    fn rotate(&self, p: Point3D) -> Point3D {
        Point3D::new(
            p.x * self.cos - p.y * self.sin,
            p.x * self.sin + p.y * self.cos,
            p.z,
        )
    }

    const fn inverse(self) -> MountAngle {
        MountAngle {
            cos: self.cos,
            sin: -self.sin,
        }
    }
}

/// Where a leg is bolted to the chassis: mount point plus the heading its
/// local X axis points in. Converts foot positions between the chassis frame
/// and the leg-local frame the solver works in.
#[derive(Debug, Clone, Copy)]
pub struct LegFrame {
    mount: Point3D,
    heading: MountAngle,
}

impl LegFrame {
    pub const fn new(mount: Point3D, heading: MountAngle) -> Self {
        Self { mount, heading }
    }

    pub const fn mount(&self) -> Point3D {
        self.mount
    }

    pub fn to_local(&self, world: Point3D) -> Point3D {
        self.heading.inverse().rotate(world - self.mount)
    }

    pub fn to_world(&self, local: Point3D) -> Point3D {
        self.heading.rotate(local) + self.mount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point3D, b: Point3D) {
        assert!(
            (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3 && (a.z - b.z).abs() < 1e-3,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn fk_at_zero_angles_points_straight_out() {
        // Femur level, tibia hanging straight down.
        let p = forward_kinematics([0.0, 0.0, 0.0]);
        assert_close(
            p,
            Point3D::new(
                ROOT_TO_JOINT1 + JOINT1_TO_JOINT2 + JOINT2_TO_JOINT3,
                0.0,
                -JOINT3_TO_TIP,
            ),
        );
    }

    #[test]
    fn ik_inverts_fk() {
        for angles in [
            [0.0f32, 0.0, 0.0],
            [30.0, 20.0, 45.0],
            [-40.0, -15.0, 60.0],
            [10.0, 55.0, 30.0],
        ] {
            let p = forward_kinematics(angles);
            let solved = inverse_kinematics(p);
            for (a, b) in angles.iter().zip(solved.iter()) {
                assert!((a - b).abs() < 1e-2, "{angles:?} vs {solved:?}");
            }
        }
    }

    #[test]
    fn ik_clamps_unreachable_targets() {
        // Far beyond full leg extension: must not produce NaN.
        let angles = inverse_kinematics(Point3D::new(500.0, 0.0, 0.0));
        assert!(angles.iter().all(|a| a.is_finite()));
    }

    #[test]
    fn frame_round_trip() {
        let frame = LegFrame::new(Point3D::new(22.41, -55.41, 0.0), MountAngle::DEG_315);
        let world = Point3D::new(80.0, -120.0, -60.0);
        let local = frame.to_local(world);
        assert_close(frame.to_world(local), world);
    }

    #[test]
    fn frame_heading_rotates_local_x_outward() {
        let frame = LegFrame::new(Point3D::ZERO, MountAngle::DEG_45);
        let world = frame.to_world(Point3D::new(1.0, 0.0, 0.0));
        assert_close(world, Point3D::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0));
    }
}

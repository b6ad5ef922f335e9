//! Precomputed hexapod tables: the standing pose and a tripod-trot forward
//! cycle. The richer per-mode table set exists only for the quadruped; the
//! hexapod's other movement modes come from the realtime generator or
//! degrade to standby. Frame order follows the canonical leg order
//! FR, R, BR, BL, L, FL.
use log::warn;

use crate::gait::table::GaitTable;
use crate::gait::MovementMode;
use crate::kinematics::{Locations, Point3D};

const fn p(x: f32, y: f32, z: f32) -> Point3D {
    Point3D::new(x, y, z)
}

const fn f(points: [Point3D; 6]) -> Locations<6> {
    Locations::new(points)
}

/// Standing pose, also the base for the realtime gait and pose transform.
#[rustfmt::skip]
pub const HEX_STANDBY_POSE: Locations<6> = f([p(99.2668, 132.2668, -64.7327), p(138.5629, 0.0000, -64.7327), p(99.2668, -132.2668, -64.7327), p(-99.2668, -132.2668, -64.7327), p(-138.5629, 0.0000, -64.7327), p(-99.2668, 132.2668, -64.7327)]);

pub fn select(mode: MovementMode) -> &'static GaitTable<6> {
    match mode {
        MovementMode::Forward => &TROT_FORWARD,
        MovementMode::Standby => &STANDBY,
        other => {
            warn!("no predefined hexapod table for {other:?}, using standby");
            &STANDBY
        }
    }
}

#[rustfmt::skip]
static TROT_FORWARD_FRAMES: [Locations<6>; 20] = [
    f([p(99.2668, 107.2668, -64.7327), p(138.5629, 25.0000, -64.7327), p(99.2668, -157.2668, -64.7327), p(-99.2668, -107.2668, -64.7327), p(-138.5629, -25.0000, -64.7327), p(-99.2668, 157.2668, -64.7327)]),
    f([p(99.2668, 108.4903, -53.9171), p(138.5629, 23.7764, -64.7327), p(99.2668, -156.0432, -53.9171), p(-99.2668, -108.4903, -64.7327), p(-138.5629, -23.7764, -53.9171), p(-99.2668, 156.0432, -64.7327)]),
    f([p(99.2668, 112.0413, -44.1602), p(138.5629, 20.2254, -64.7327), p(99.2668, -152.4922, -44.1602), p(-99.2668, -112.0413, -64.7327), p(-138.5629, -20.2254, -44.1602), p(-99.2668, 152.4922, -64.7327)]),
    f([p(99.2668, 117.5721, -36.4171), p(138.5629, 14.6946, -64.7327), p(99.2668, -146.9614, -36.4171), p(-99.2668, -117.5721, -64.7327), p(-138.5629, -14.6946, -36.4171), p(-99.2668, 146.9614, -64.7327)]),
    f([p(99.2668, 124.5413, -31.4457), p(138.5629, 7.7254, -64.7327), p(99.2668, -139.9922, -31.4457), p(-99.2668, -124.5413, -64.7327), p(-138.5629, -7.7254, -31.4457), p(-99.2668, 139.9922, -64.7327)]),
    f([p(99.2668, 132.2668, -29.7327), p(138.5629, 0.0000, -64.7327), p(99.2668, -132.2668, -29.7327), p(-99.2668, -132.2668, -64.7327), p(-138.5629, 0.0000, -29.7327), p(-99.2668, 132.2668, -64.7327)]),
    f([p(99.2668, 139.9922, -31.4457), p(138.5629, -7.7254, -64.7327), p(99.2668, -124.5413, -31.4457), p(-99.2668, -139.9922, -64.7327), p(-138.5629, 7.7254, -31.4457), p(-99.2668, 124.5413, -64.7327)]),
    f([p(99.2668, 146.9614, -36.4171), p(138.5629, -14.6946, -64.7327), p(99.2668, -117.5721, -36.4171), p(-99.2668, -146.9614, -64.7327), p(-138.5629, 14.6946, -36.4171), p(-99.2668, 117.5721, -64.7327)]),
    f([p(99.2668, 152.4922, -44.1602), p(138.5629, -20.2254, -64.7327), p(99.2668, -112.0413, -44.1602), p(-99.2668, -152.4922, -64.7327), p(-138.5629, 20.2254, -44.1602), p(-99.2668, 112.0413, -64.7327)]),
    f([p(99.2668, 156.0432, -53.9171), p(138.5629, -23.7764, -64.7327), p(99.2668, -108.4903, -53.9171), p(-99.2668, -156.0432, -64.7327), p(-138.5629, 23.7764, -53.9171), p(-99.2668, 108.4903, -64.7327)]),
    f([p(99.2668, 157.2668, -64.7327), p(138.5629, -25.0000, -64.7327), p(99.2668, -107.2668, -64.7327), p(-99.2668, -157.2668, -64.7327), p(-138.5629, 25.0000, -64.7327), p(-99.2668, 107.2668, -64.7327)]),
    f([p(99.2668, 156.0432, -64.7327), p(138.5629, -23.7764, -53.9171), p(99.2668, -108.4903, -64.7327), p(-99.2668, -156.0432, -53.9171), p(-138.5629, 23.7764, -64.7327), p(-99.2668, 108.4903, -53.9171)]),
    f([p(99.2668, 152.4922, -64.7327), p(138.5629, -20.2254, -44.1602), p(99.2668, -112.0413, -64.7327), p(-99.2668, -152.4922, -44.1602), p(-138.5629, 20.2254, -64.7327), p(-99.2668, 112.0413, -44.1602)]),
    f([p(99.2668, 146.9614, -64.7327), p(138.5629, -14.6946, -36.4171), p(99.2668, -117.5721, -64.7327), p(-99.2668, -146.9614, -36.4171), p(-138.5629, 14.6946, -64.7327), p(-99.2668, 117.5721, -36.4171)]),
    f([p(99.2668, 139.9922, -64.7327), p(138.5629, -7.7254, -31.4457), p(99.2668, -124.5413, -64.7327), p(-99.2668, -139.9922, -31.4457), p(-138.5629, 7.7254, -64.7327), p(-99.2668, 124.5413, -31.4457)]),
    f([p(99.2668, 132.2668, -64.7327), p(138.5629, 0.0000, -29.7327), p(99.2668, -132.2668, -64.7327), p(-99.2668, -132.2668, -29.7327), p(-138.5629, 0.0000, -64.7327), p(-99.2668, 132.2668, -29.7327)]),
    f([p(99.2668, 124.5413, -64.7327), p(138.5629, 7.7254, -31.4457), p(99.2668, -139.9922, -64.7327), p(-99.2668, -124.5413, -31.4457), p(-138.5629, -7.7254, -64.7327), p(-99.2668, 139.9922, -31.4457)]),
    f([p(99.2668, 117.5721, -64.7327), p(138.5629, 14.6946, -36.4171), p(99.2668, -146.9614, -64.7327), p(-99.2668, -117.5721, -36.4171), p(-138.5629, -14.6946, -64.7327), p(-99.2668, 146.9614, -36.4171)]),
    f([p(99.2668, 112.0413, -64.7327), p(138.5629, 20.2254, -44.1602), p(99.2668, -152.4922, -64.7327), p(-99.2668, -112.0413, -44.1602), p(-138.5629, -20.2254, -64.7327), p(-99.2668, 152.4922, -44.1602)]),
    f([p(99.2668, 108.4903, -64.7327), p(138.5629, 23.7764, -53.9171), p(99.2668, -156.0432, -64.7327), p(-99.2668, -108.4903, -53.9171), p(-138.5629, -23.7764, -64.7327), p(-99.2668, 156.0432, -53.9171)]),
];
pub static TROT_FORWARD: GaitTable<6> = GaitTable {
    frames: &TROT_FORWARD_FRAMES,
    step_duration_ms: 20,
    entry: 5,
};

#[rustfmt::skip]
static STANDBY_FRAMES: [Locations<6>; 1] = [HEX_STANDBY_POSE];
pub static STANDBY: GaitTable<6> = GaitTable {
    frames: &STANDBY_FRAMES,
    step_duration_ms: 20,
    entry: 0,
};

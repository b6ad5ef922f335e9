//! Precomputed quadruped gait tables.
//!
//! Key frames are generated offline from the chassis geometry in
//! [`config`](crate::robot::config); regenerate them rather than hand-edit.
//! Within each pair group (forward/backward, the turns, the shifts) the
//! second table is the time-reversal of the first, so both share the exact
//! same pose set and their entry frames are the same pose at mirrored
//! indices. Frame order follows the canonical leg order FR, BR, BL, FL.
use crate::gait::table::GaitTable;
use crate::gait::{MovementMode, QuadGait};
use crate::kinematics::{Locations, Point3D};

const fn p(x: f32, y: f32, z: f32) -> Point3D {
    Point3D::new(x, y, z)
}

const fn f(points: [Point3D; 4]) -> Locations<4> {
    Locations::new(points)
}

/// Standing pose, shared by every gait family as the neutral hand-off.
#[rustfmt::skip]
pub const STANDBY_POSE: Locations<4> = f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]);

/// Table for a gait family and movement mode. Posture tables are shared
/// across families; unsupported modes fall back to standby.
pub fn select(gait: QuadGait, mode: MovementMode) -> &'static GaitTable<4> {
    match mode {
        MovementMode::RotateX => &ROTATE_X,
        MovementMode::RotateY => &ROTATE_Y,
        MovementMode::RotateZ => &ROTATE_Z,
        MovementMode::Twist => &TWIST,
        MovementMode::Standby | MovementMode::Climb => &STANDBY,
        _ => {
            let set = match gait {
                QuadGait::Trot => &TROT,
                QuadGait::Walk => &WALK,
                QuadGait::Gallop => &GALLOP,
                QuadGait::Creep => &CREEP,
            };
            match mode {
                MovementMode::Forward => set.forward,
                MovementMode::ForwardFast => set.forward_fast,
                MovementMode::Backward => set.backward,
                MovementMode::TurnLeft => set.turn_left,
                MovementMode::TurnRight => set.turn_right,
                MovementMode::ShiftLeft => set.shift_left,
                MovementMode::ShiftRight => set.shift_right,
                _ => &STANDBY,
            }
        }
    }
}

struct FamilySet {
    forward: &'static GaitTable<4>,
    forward_fast: &'static GaitTable<4>,
    backward: &'static GaitTable<4>,
    turn_left: &'static GaitTable<4>,
    turn_right: &'static GaitTable<4>,
    shift_left: &'static GaitTable<4>,
    shift_right: &'static GaitTable<4>,
}

static TROT: FamilySet = FamilySet {
    forward: &TROT_FORWARD,
    forward_fast: &TROT_FORWARD_FAST,
    backward: &TROT_BACKWARD,
    turn_left: &TROT_TURN_LEFT,
    turn_right: &TROT_TURN_RIGHT,
    shift_left: &TROT_SHIFT_LEFT,
    shift_right: &TROT_SHIFT_RIGHT,
};

static WALK: FamilySet = FamilySet {
    forward: &WALK_FORWARD,
    forward_fast: &WALK_FORWARD_FAST,
    backward: &WALK_BACKWARD,
    turn_left: &WALK_TURN_LEFT,
    turn_right: &WALK_TURN_RIGHT,
    shift_left: &WALK_SHIFT_LEFT,
    shift_right: &WALK_SHIFT_RIGHT,
};

static GALLOP: FamilySet = FamilySet {
    forward: &GALLOP_FORWARD,
    forward_fast: &GALLOP_FORWARD_FAST,
    backward: &GALLOP_BACKWARD,
    turn_left: &GALLOP_TURN_LEFT,
    turn_right: &GALLOP_TURN_RIGHT,
    shift_left: &GALLOP_SHIFT_LEFT,
    shift_right: &GALLOP_SHIFT_RIGHT,
};

static CREEP: FamilySet = FamilySet {
    forward: &CREEP_FORWARD,
    forward_fast: &CREEP_FORWARD_FAST,
    backward: &CREEP_BACKWARD,
    turn_left: &CREEP_TURN_LEFT,
    turn_right: &CREEP_TURN_RIGHT,
    shift_left: &CREEP_SHIFT_LEFT,
    shift_right: &CREEP_SHIFT_RIGHT,
};

#[rustfmt::skip]
static TROT_FORWARD_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 92.7143, -55.6005), p(96.4907, -92.7143, -66.4161), p(-96.4907, -140.2672, -55.6005), p(-96.4907, 140.2672, -66.4161)]),
    f([p(96.4907, 96.2653, -45.8437), p(96.4907, -96.2653, -66.4161), p(-96.4907, -136.7162, -45.8437), p(-96.4907, 136.7162, -66.4161)]),
    f([p(96.4907, 101.7961, -38.1005), p(96.4907, -101.7961, -66.4161), p(-96.4907, -131.1854, -38.1005), p(-96.4907, 131.1854, -66.4161)]),
    f([p(96.4907, 108.7653, -33.1292), p(96.4907, -108.7653, -66.4161), p(-96.4907, -124.2162, -33.1292), p(-96.4907, 124.2162, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 124.2162, -33.1292), p(96.4907, -124.2162, -66.4161), p(-96.4907, -108.7653, -33.1292), p(-96.4907, 108.7653, -66.4161)]),
    f([p(96.4907, 131.1854, -38.1005), p(96.4907, -131.1854, -66.4161), p(-96.4907, -101.7961, -38.1005), p(-96.4907, 101.7961, -66.4161)]),
    f([p(96.4907, 136.7162, -45.8437), p(96.4907, -136.7162, -66.4161), p(-96.4907, -96.2653, -45.8437), p(-96.4907, 96.2653, -66.4161)]),
    f([p(96.4907, 140.2672, -55.6005), p(96.4907, -140.2672, -66.4161), p(-96.4907, -92.7143, -55.6005), p(-96.4907, 92.7143, -66.4161)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 140.2672, -66.4161), p(96.4907, -140.2672, -55.6005), p(-96.4907, -92.7143, -66.4161), p(-96.4907, 92.7143, -55.6005)]),
    f([p(96.4907, 136.7162, -66.4161), p(96.4907, -136.7162, -45.8437), p(-96.4907, -96.2653, -66.4161), p(-96.4907, 96.2653, -45.8437)]),
    f([p(96.4907, 131.1854, -66.4161), p(96.4907, -131.1854, -38.1005), p(-96.4907, -101.7961, -66.4161), p(-96.4907, 101.7961, -38.1005)]),
    f([p(96.4907, 124.2162, -66.4161), p(96.4907, -124.2162, -33.1292), p(-96.4907, -108.7653, -66.4161), p(-96.4907, 108.7653, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 108.7653, -66.4161), p(96.4907, -108.7653, -33.1292), p(-96.4907, -124.2162, -66.4161), p(-96.4907, 124.2162, -33.1292)]),
    f([p(96.4907, 101.7961, -66.4161), p(96.4907, -101.7961, -38.1005), p(-96.4907, -131.1854, -66.4161), p(-96.4907, 131.1854, -38.1005)]),
    f([p(96.4907, 96.2653, -66.4161), p(96.4907, -96.2653, -45.8437), p(-96.4907, -136.7162, -66.4161), p(-96.4907, 136.7162, -45.8437)]),
    f([p(96.4907, 92.7143, -66.4161), p(96.4907, -92.7143, -55.6005), p(-96.4907, -140.2672, -66.4161), p(-96.4907, 140.2672, -55.6005)]),
];
pub static TROT_FORWARD: GaitTable<4> = GaitTable {
    frames: &TROT_FORWARD_FRAMES,
    step_duration_ms: 20,
    entry: 5,
};

#[rustfmt::skip]
static TROT_FORWARD_FAST_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 76.4907, -66.4161), p(96.4907, -76.4907, -66.4161), p(-96.4907, -156.4907, -66.4161), p(-96.4907, 156.4907, -66.4161)]),
    f([p(96.4907, 78.4485, -59.9268), p(96.4907, -78.4485, -66.4161), p(-96.4907, -154.5330, -59.9268), p(-96.4907, 154.5330, -66.4161)]),
    f([p(96.4907, 84.1301, -54.0726), p(96.4907, -84.1301, -66.4161), p(-96.4907, -148.8514, -54.0726), p(-96.4907, 148.8514, -66.4161)]),
    f([p(96.4907, 92.9793, -49.4268), p(96.4907, -92.9793, -66.4161), p(-96.4907, -140.0022, -49.4268), p(-96.4907, 140.0022, -66.4161)]),
    f([p(96.4907, 104.1301, -46.4439), p(96.4907, -104.1301, -66.4161), p(-96.4907, -128.8514, -46.4439), p(-96.4907, 128.8514, -66.4161)]),
    f([p(96.4907, 116.4907, -45.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -45.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 128.8514, -46.4439), p(96.4907, -128.8514, -66.4161), p(-96.4907, -104.1301, -46.4439), p(-96.4907, 104.1301, -66.4161)]),
    f([p(96.4907, 140.0022, -49.4268), p(96.4907, -140.0022, -66.4161), p(-96.4907, -92.9793, -49.4268), p(-96.4907, 92.9793, -66.4161)]),
    f([p(96.4907, 148.8514, -54.0726), p(96.4907, -148.8514, -66.4161), p(-96.4907, -84.1301, -54.0726), p(-96.4907, 84.1301, -66.4161)]),
    f([p(96.4907, 154.5330, -59.9268), p(96.4907, -154.5330, -66.4161), p(-96.4907, -78.4485, -59.9268), p(-96.4907, 78.4485, -66.4161)]),
    f([p(96.4907, 156.4907, -66.4161), p(96.4907, -156.4907, -66.4161), p(-96.4907, -76.4907, -66.4161), p(-96.4907, 76.4907, -66.4161)]),
    f([p(96.4907, 154.5330, -66.4161), p(96.4907, -154.5330, -59.9268), p(-96.4907, -78.4485, -66.4161), p(-96.4907, 78.4485, -59.9268)]),
    f([p(96.4907, 148.8514, -66.4161), p(96.4907, -148.8514, -54.0726), p(-96.4907, -84.1301, -66.4161), p(-96.4907, 84.1301, -54.0726)]),
    f([p(96.4907, 140.0022, -66.4161), p(96.4907, -140.0022, -49.4268), p(-96.4907, -92.9793, -66.4161), p(-96.4907, 92.9793, -49.4268)]),
    f([p(96.4907, 128.8514, -66.4161), p(96.4907, -128.8514, -46.4439), p(-96.4907, -104.1301, -66.4161), p(-96.4907, 104.1301, -46.4439)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -45.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -45.4161)]),
    f([p(96.4907, 104.1301, -66.4161), p(96.4907, -104.1301, -46.4439), p(-96.4907, -128.8514, -66.4161), p(-96.4907, 128.8514, -46.4439)]),
    f([p(96.4907, 92.9793, -66.4161), p(96.4907, -92.9793, -49.4268), p(-96.4907, -140.0022, -66.4161), p(-96.4907, 140.0022, -49.4268)]),
    f([p(96.4907, 84.1301, -66.4161), p(96.4907, -84.1301, -54.0726), p(-96.4907, -148.8514, -66.4161), p(-96.4907, 148.8514, -54.0726)]),
    f([p(96.4907, 78.4485, -66.4161), p(96.4907, -78.4485, -59.9268), p(-96.4907, -154.5330, -66.4161), p(-96.4907, 154.5330, -59.9268)]),
];
pub static TROT_FORWARD_FAST: GaitTable<4> = GaitTable {
    frames: &TROT_FORWARD_FAST_FRAMES,
    step_duration_ms: 20,
    entry: 5,
};

#[rustfmt::skip]
static TROT_BACKWARD_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 92.7143, -66.4161), p(96.4907, -92.7143, -55.6005), p(-96.4907, -140.2672, -66.4161), p(-96.4907, 140.2672, -55.6005)]),
    f([p(96.4907, 96.2653, -66.4161), p(96.4907, -96.2653, -45.8437), p(-96.4907, -136.7162, -66.4161), p(-96.4907, 136.7162, -45.8437)]),
    f([p(96.4907, 101.7961, -66.4161), p(96.4907, -101.7961, -38.1005), p(-96.4907, -131.1854, -66.4161), p(-96.4907, 131.1854, -38.1005)]),
    f([p(96.4907, 108.7653, -66.4161), p(96.4907, -108.7653, -33.1292), p(-96.4907, -124.2162, -66.4161), p(-96.4907, 124.2162, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 124.2162, -66.4161), p(96.4907, -124.2162, -33.1292), p(-96.4907, -108.7653, -66.4161), p(-96.4907, 108.7653, -33.1292)]),
    f([p(96.4907, 131.1854, -66.4161), p(96.4907, -131.1854, -38.1005), p(-96.4907, -101.7961, -66.4161), p(-96.4907, 101.7961, -38.1005)]),
    f([p(96.4907, 136.7162, -66.4161), p(96.4907, -136.7162, -45.8437), p(-96.4907, -96.2653, -66.4161), p(-96.4907, 96.2653, -45.8437)]),
    f([p(96.4907, 140.2672, -66.4161), p(96.4907, -140.2672, -55.6005), p(-96.4907, -92.7143, -66.4161), p(-96.4907, 92.7143, -55.6005)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 140.2672, -55.6005), p(96.4907, -140.2672, -66.4161), p(-96.4907, -92.7143, -55.6005), p(-96.4907, 92.7143, -66.4161)]),
    f([p(96.4907, 136.7162, -45.8437), p(96.4907, -136.7162, -66.4161), p(-96.4907, -96.2653, -45.8437), p(-96.4907, 96.2653, -66.4161)]),
    f([p(96.4907, 131.1854, -38.1005), p(96.4907, -131.1854, -66.4161), p(-96.4907, -101.7961, -38.1005), p(-96.4907, 101.7961, -66.4161)]),
    f([p(96.4907, 124.2162, -33.1292), p(96.4907, -124.2162, -66.4161), p(-96.4907, -108.7653, -33.1292), p(-96.4907, 108.7653, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 108.7653, -33.1292), p(96.4907, -108.7653, -66.4161), p(-96.4907, -124.2162, -33.1292), p(-96.4907, 124.2162, -66.4161)]),
    f([p(96.4907, 101.7961, -38.1005), p(96.4907, -101.7961, -66.4161), p(-96.4907, -131.1854, -38.1005), p(-96.4907, 131.1854, -66.4161)]),
    f([p(96.4907, 96.2653, -45.8437), p(96.4907, -96.2653, -66.4161), p(-96.4907, -136.7162, -45.8437), p(-96.4907, 136.7162, -66.4161)]),
    f([p(96.4907, 92.7143, -55.6005), p(96.4907, -92.7143, -66.4161), p(-96.4907, -140.2672, -55.6005), p(-96.4907, 140.2672, -66.4161)]),
];
pub static TROT_BACKWARD: GaitTable<4> = GaitTable {
    frames: &TROT_BACKWARD_FRAMES,
    step_duration_ms: 20,
    entry: 15,
};

#[rustfmt::skip]
static TROT_TURN_LEFT_FRAMES: [Locations<4>; 20] = [
    f([p(115.7437, 100.5433, -66.4161), p(115.7437, -100.5433, -66.4161), p(-115.7437, -100.5433, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(114.8014, 101.3238, -55.6005), p(114.8014, -101.3238, -66.4161), p(-114.8014, -101.3238, -55.6005), p(-114.8014, 101.3238, -66.4161)]),
    f([p(112.0667, 103.5890, -45.8437), p(112.0667, -103.5890, -66.4161), p(-112.0667, -103.5890, -45.8437), p(-112.0667, 103.5890, -66.4161)]),
    f([p(107.8074, 107.1170, -38.1005), p(107.8074, -107.1170, -66.4161), p(-107.8074, -107.1170, -38.1005), p(-107.8074, 107.1170, -66.4161)]),
    f([p(102.4402, 111.5627, -33.1292), p(102.4402, -111.5627, -66.4161), p(-102.4402, -111.5627, -33.1292), p(-102.4402, 111.5627, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(90.5412, 121.4188, -33.1292), p(90.5412, -121.4188, -66.4161), p(-90.5412, -121.4188, -33.1292), p(-90.5412, 121.4188, -66.4161)]),
    f([p(85.1741, 125.8644, -38.1005), p(85.1741, -125.8644, -66.4161), p(-85.1741, -125.8644, -38.1005), p(-85.1741, 125.8644, -66.4161)]),
    f([p(80.9148, 129.3925, -45.8437), p(80.9148, -129.3925, -66.4161), p(-80.9148, -129.3925, -45.8437), p(-80.9148, 129.3925, -66.4161)]),
    f([p(78.1801, 131.6577, -55.6005), p(78.1801, -131.6577, -66.4161), p(-78.1801, -131.6577, -55.6005), p(-78.1801, 131.6577, -66.4161)]),
    f([p(77.2378, 132.4382, -66.4161), p(77.2378, -132.4382, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(78.1801, 131.6577, -66.4161), p(78.1801, -131.6577, -55.6005), p(-78.1801, -131.6577, -66.4161), p(-78.1801, 131.6577, -55.6005)]),
    f([p(80.9148, 129.3925, -66.4161), p(80.9148, -129.3925, -45.8437), p(-80.9148, -129.3925, -66.4161), p(-80.9148, 129.3925, -45.8437)]),
    f([p(85.1741, 125.8644, -66.4161), p(85.1741, -125.8644, -38.1005), p(-85.1741, -125.8644, -66.4161), p(-85.1741, 125.8644, -38.1005)]),
    f([p(90.5412, 121.4188, -66.4161), p(90.5412, -121.4188, -33.1292), p(-90.5412, -121.4188, -66.4161), p(-90.5412, 121.4188, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(102.4402, 111.5627, -66.4161), p(102.4402, -111.5627, -33.1292), p(-102.4402, -111.5627, -66.4161), p(-102.4402, 111.5627, -33.1292)]),
    f([p(107.8074, 107.1170, -66.4161), p(107.8074, -107.1170, -38.1005), p(-107.8074, -107.1170, -66.4161), p(-107.8074, 107.1170, -38.1005)]),
    f([p(112.0667, 103.5890, -66.4161), p(112.0667, -103.5890, -45.8437), p(-112.0667, -103.5890, -66.4161), p(-112.0667, 103.5890, -45.8437)]),
    f([p(114.8014, 101.3238, -66.4161), p(114.8014, -101.3238, -55.6005), p(-114.8014, -101.3238, -66.4161), p(-114.8014, 101.3238, -55.6005)]),
];
pub static TROT_TURN_LEFT: GaitTable<4> = GaitTable {
    frames: &TROT_TURN_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 5,
};

#[rustfmt::skip]
static TROT_TURN_RIGHT_FRAMES: [Locations<4>; 20] = [
    f([p(115.7437, 100.5433, -66.4161), p(115.7437, -100.5433, -66.4161), p(-115.7437, -100.5433, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(114.8014, 101.3238, -66.4161), p(114.8014, -101.3238, -55.6005), p(-114.8014, -101.3238, -66.4161), p(-114.8014, 101.3238, -55.6005)]),
    f([p(112.0667, 103.5890, -66.4161), p(112.0667, -103.5890, -45.8437), p(-112.0667, -103.5890, -66.4161), p(-112.0667, 103.5890, -45.8437)]),
    f([p(107.8074, 107.1170, -66.4161), p(107.8074, -107.1170, -38.1005), p(-107.8074, -107.1170, -66.4161), p(-107.8074, 107.1170, -38.1005)]),
    f([p(102.4402, 111.5627, -66.4161), p(102.4402, -111.5627, -33.1292), p(-102.4402, -111.5627, -66.4161), p(-102.4402, 111.5627, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(90.5412, 121.4188, -66.4161), p(90.5412, -121.4188, -33.1292), p(-90.5412, -121.4188, -66.4161), p(-90.5412, 121.4188, -33.1292)]),
    f([p(85.1741, 125.8644, -66.4161), p(85.1741, -125.8644, -38.1005), p(-85.1741, -125.8644, -66.4161), p(-85.1741, 125.8644, -38.1005)]),
    f([p(80.9148, 129.3925, -66.4161), p(80.9148, -129.3925, -45.8437), p(-80.9148, -129.3925, -66.4161), p(-80.9148, 129.3925, -45.8437)]),
    f([p(78.1801, 131.6577, -66.4161), p(78.1801, -131.6577, -55.6005), p(-78.1801, -131.6577, -66.4161), p(-78.1801, 131.6577, -55.6005)]),
    f([p(77.2378, 132.4382, -66.4161), p(77.2378, -132.4382, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(78.1801, 131.6577, -55.6005), p(78.1801, -131.6577, -66.4161), p(-78.1801, -131.6577, -55.6005), p(-78.1801, 131.6577, -66.4161)]),
    f([p(80.9148, 129.3925, -45.8437), p(80.9148, -129.3925, -66.4161), p(-80.9148, -129.3925, -45.8437), p(-80.9148, 129.3925, -66.4161)]),
    f([p(85.1741, 125.8644, -38.1005), p(85.1741, -125.8644, -66.4161), p(-85.1741, -125.8644, -38.1005), p(-85.1741, 125.8644, -66.4161)]),
    f([p(90.5412, 121.4188, -33.1292), p(90.5412, -121.4188, -66.4161), p(-90.5412, -121.4188, -33.1292), p(-90.5412, 121.4188, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(102.4402, 111.5627, -33.1292), p(102.4402, -111.5627, -66.4161), p(-102.4402, -111.5627, -33.1292), p(-102.4402, 111.5627, -66.4161)]),
    f([p(107.8074, 107.1170, -38.1005), p(107.8074, -107.1170, -66.4161), p(-107.8074, -107.1170, -38.1005), p(-107.8074, 107.1170, -66.4161)]),
    f([p(112.0667, 103.5890, -45.8437), p(112.0667, -103.5890, -66.4161), p(-112.0667, -103.5890, -45.8437), p(-112.0667, 103.5890, -66.4161)]),
    f([p(114.8014, 101.3238, -55.6005), p(114.8014, -101.3238, -66.4161), p(-114.8014, -101.3238, -55.6005), p(-114.8014, 101.3238, -66.4161)]),
];
pub static TROT_TURN_RIGHT: GaitTable<4> = GaitTable {
    frames: &TROT_TURN_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 15,
};

#[rustfmt::skip]
static TROT_SHIFT_LEFT_FRAMES: [Locations<4>; 20] = [
    f([p(121.4907, 116.4907, -66.4161), p(71.4907, -116.4907, -66.4161), p(-71.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(120.2672, 116.4907, -55.6005), p(72.7143, -116.4907, -66.4161), p(-72.7143, -116.4907, -55.6005), p(-120.2672, 116.4907, -66.4161)]),
    f([p(116.7162, 116.4907, -45.8437), p(76.2653, -116.4907, -66.4161), p(-76.2653, -116.4907, -45.8437), p(-116.7162, 116.4907, -66.4161)]),
    f([p(111.1854, 116.4907, -38.1005), p(81.7961, -116.4907, -66.4161), p(-81.7961, -116.4907, -38.1005), p(-111.1854, 116.4907, -66.4161)]),
    f([p(104.2162, 116.4907, -33.1292), p(88.7653, -116.4907, -66.4161), p(-88.7653, -116.4907, -33.1292), p(-104.2162, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(88.7653, 116.4907, -33.1292), p(104.2162, -116.4907, -66.4161), p(-104.2162, -116.4907, -33.1292), p(-88.7653, 116.4907, -66.4161)]),
    f([p(81.7961, 116.4907, -38.1005), p(111.1854, -116.4907, -66.4161), p(-111.1854, -116.4907, -38.1005), p(-81.7961, 116.4907, -66.4161)]),
    f([p(76.2653, 116.4907, -45.8437), p(116.7162, -116.4907, -66.4161), p(-116.7162, -116.4907, -45.8437), p(-76.2653, 116.4907, -66.4161)]),
    f([p(72.7143, 116.4907, -55.6005), p(120.2672, -116.4907, -66.4161), p(-120.2672, -116.4907, -55.6005), p(-72.7143, 116.4907, -66.4161)]),
    f([p(71.4907, 116.4907, -66.4161), p(121.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(72.7143, 116.4907, -66.4161), p(120.2672, -116.4907, -55.6005), p(-120.2672, -116.4907, -66.4161), p(-72.7143, 116.4907, -55.6005)]),
    f([p(76.2653, 116.4907, -66.4161), p(116.7162, -116.4907, -45.8437), p(-116.7162, -116.4907, -66.4161), p(-76.2653, 116.4907, -45.8437)]),
    f([p(81.7961, 116.4907, -66.4161), p(111.1854, -116.4907, -38.1005), p(-111.1854, -116.4907, -66.4161), p(-81.7961, 116.4907, -38.1005)]),
    f([p(88.7653, 116.4907, -66.4161), p(104.2162, -116.4907, -33.1292), p(-104.2162, -116.4907, -66.4161), p(-88.7653, 116.4907, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(104.2162, 116.4907, -66.4161), p(88.7653, -116.4907, -33.1292), p(-88.7653, -116.4907, -66.4161), p(-104.2162, 116.4907, -33.1292)]),
    f([p(111.1854, 116.4907, -66.4161), p(81.7961, -116.4907, -38.1005), p(-81.7961, -116.4907, -66.4161), p(-111.1854, 116.4907, -38.1005)]),
    f([p(116.7162, 116.4907, -66.4161), p(76.2653, -116.4907, -45.8437), p(-76.2653, -116.4907, -66.4161), p(-116.7162, 116.4907, -45.8437)]),
    f([p(120.2672, 116.4907, -66.4161), p(72.7143, -116.4907, -55.6005), p(-72.7143, -116.4907, -66.4161), p(-120.2672, 116.4907, -55.6005)]),
];
pub static TROT_SHIFT_LEFT: GaitTable<4> = GaitTable {
    frames: &TROT_SHIFT_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 5,
};

#[rustfmt::skip]
static TROT_SHIFT_RIGHT_FRAMES: [Locations<4>; 20] = [
    f([p(121.4907, 116.4907, -66.4161), p(71.4907, -116.4907, -66.4161), p(-71.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(120.2672, 116.4907, -66.4161), p(72.7143, -116.4907, -55.6005), p(-72.7143, -116.4907, -66.4161), p(-120.2672, 116.4907, -55.6005)]),
    f([p(116.7162, 116.4907, -66.4161), p(76.2653, -116.4907, -45.8437), p(-76.2653, -116.4907, -66.4161), p(-116.7162, 116.4907, -45.8437)]),
    f([p(111.1854, 116.4907, -66.4161), p(81.7961, -116.4907, -38.1005), p(-81.7961, -116.4907, -66.4161), p(-111.1854, 116.4907, -38.1005)]),
    f([p(104.2162, 116.4907, -66.4161), p(88.7653, -116.4907, -33.1292), p(-88.7653, -116.4907, -66.4161), p(-104.2162, 116.4907, -33.1292)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(88.7653, 116.4907, -66.4161), p(104.2162, -116.4907, -33.1292), p(-104.2162, -116.4907, -66.4161), p(-88.7653, 116.4907, -33.1292)]),
    f([p(81.7961, 116.4907, -66.4161), p(111.1854, -116.4907, -38.1005), p(-111.1854, -116.4907, -66.4161), p(-81.7961, 116.4907, -38.1005)]),
    f([p(76.2653, 116.4907, -66.4161), p(116.7162, -116.4907, -45.8437), p(-116.7162, -116.4907, -66.4161), p(-76.2653, 116.4907, -45.8437)]),
    f([p(72.7143, 116.4907, -66.4161), p(120.2672, -116.4907, -55.6005), p(-120.2672, -116.4907, -66.4161), p(-72.7143, 116.4907, -55.6005)]),
    f([p(71.4907, 116.4907, -66.4161), p(121.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(72.7143, 116.4907, -55.6005), p(120.2672, -116.4907, -66.4161), p(-120.2672, -116.4907, -55.6005), p(-72.7143, 116.4907, -66.4161)]),
    f([p(76.2653, 116.4907, -45.8437), p(116.7162, -116.4907, -66.4161), p(-116.7162, -116.4907, -45.8437), p(-76.2653, 116.4907, -66.4161)]),
    f([p(81.7961, 116.4907, -38.1005), p(111.1854, -116.4907, -66.4161), p(-111.1854, -116.4907, -38.1005), p(-81.7961, 116.4907, -66.4161)]),
    f([p(88.7653, 116.4907, -33.1292), p(104.2162, -116.4907, -66.4161), p(-104.2162, -116.4907, -33.1292), p(-88.7653, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(104.2162, 116.4907, -33.1292), p(88.7653, -116.4907, -66.4161), p(-88.7653, -116.4907, -33.1292), p(-104.2162, 116.4907, -66.4161)]),
    f([p(111.1854, 116.4907, -38.1005), p(81.7961, -116.4907, -66.4161), p(-81.7961, -116.4907, -38.1005), p(-111.1854, 116.4907, -66.4161)]),
    f([p(116.7162, 116.4907, -45.8437), p(76.2653, -116.4907, -66.4161), p(-76.2653, -116.4907, -45.8437), p(-116.7162, 116.4907, -66.4161)]),
    f([p(120.2672, 116.4907, -55.6005), p(72.7143, -116.4907, -66.4161), p(-72.7143, -116.4907, -55.6005), p(-120.2672, 116.4907, -66.4161)]),
];
pub static TROT_SHIFT_RIGHT: GaitTable<4> = GaitTable {
    frames: &TROT_SHIFT_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 15,
};

#[rustfmt::skip]
static WALK_FORWARD_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 128.9907, -66.4161), p(96.4907, -128.9907, -66.4161), p(-96.4907, -78.9907, -66.4161), p(-96.4907, 78.9907, -66.4161)]),
    f([p(96.4907, 122.7407, -66.4161), p(96.4907, -135.2407, -66.4161), p(-96.4907, -85.2407, -66.4161), p(-96.4907, 89.9742, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 110.2407, -66.4161), p(96.4907, -147.7407, -66.4161), p(-96.4907, -97.7407, -66.4161), p(-96.4907, 143.0073, -41.6674)]),
    f([p(96.4907, 103.9907, -66.4161), p(96.4907, -153.9907, -66.4161), p(-96.4907, -103.9907, -66.4161), p(-96.4907, 153.9907, -66.4161)]),
    f([p(96.4907, 97.7407, -66.4161), p(96.4907, -143.0073, -41.6674), p(-96.4907, -110.2407, -66.4161), p(-96.4907, 147.7407, -66.4161)]),
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 85.2407, -66.4161), p(96.4907, -89.9742, -41.6674), p(-96.4907, -122.7407, -66.4161), p(-96.4907, 135.2407, -66.4161)]),
    f([p(96.4907, 78.9907, -66.4161), p(96.4907, -78.9907, -66.4161), p(-96.4907, -128.9907, -66.4161), p(-96.4907, 128.9907, -66.4161)]),
    f([p(96.4907, 89.9742, -41.6674), p(96.4907, -85.2407, -66.4161), p(-96.4907, -135.2407, -66.4161), p(-96.4907, 122.7407, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 143.0073, -41.6674), p(96.4907, -97.7407, -66.4161), p(-96.4907, -147.7407, -66.4161), p(-96.4907, 110.2407, -66.4161)]),
    f([p(96.4907, 153.9907, -66.4161), p(96.4907, -103.9907, -66.4161), p(-96.4907, -153.9907, -66.4161), p(-96.4907, 103.9907, -66.4161)]),
    f([p(96.4907, 147.7407, -66.4161), p(96.4907, -110.2407, -66.4161), p(-96.4907, -143.0073, -41.6674), p(-96.4907, 97.7407, -66.4161)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 135.2407, -66.4161), p(96.4907, -122.7407, -66.4161), p(-96.4907, -89.9742, -41.6674), p(-96.4907, 85.2407, -66.4161)]),
];
pub static WALK_FORWARD: GaitTable<4> = GaitTable {
    frames: &WALK_FORWARD_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static WALK_FORWARD_FAST_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 136.4907, -66.4161), p(96.4907, -136.4907, -66.4161), p(-96.4907, -56.4907, -66.4161), p(-96.4907, 56.4907, -66.4161)]),
    f([p(96.4907, 126.4907, -66.4161), p(96.4907, -146.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 74.0643, -51.5669)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -156.4907, -66.4161), p(-96.4907, -76.4907, -66.4161), p(-96.4907, 116.4907, -45.4161)]),
    f([p(96.4907, 106.4907, -66.4161), p(96.4907, -166.4907, -66.4161), p(-96.4907, -86.4907, -66.4161), p(-96.4907, 158.9172, -51.5669)]),
    f([p(96.4907, 96.4907, -66.4161), p(96.4907, -176.4907, -66.4161), p(-96.4907, -96.4907, -66.4161), p(-96.4907, 176.4907, -66.4161)]),
    f([p(96.4907, 86.4907, -66.4161), p(96.4907, -158.9172, -51.5669), p(-96.4907, -106.4907, -66.4161), p(-96.4907, 166.4907, -66.4161)]),
    f([p(96.4907, 76.4907, -66.4161), p(96.4907, -116.4907, -45.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 156.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -74.0643, -51.5669), p(-96.4907, -126.4907, -66.4161), p(-96.4907, 146.4907, -66.4161)]),
    f([p(96.4907, 56.4907, -66.4161), p(96.4907, -56.4907, -66.4161), p(-96.4907, -136.4907, -66.4161), p(-96.4907, 136.4907, -66.4161)]),
    f([p(96.4907, 74.0643, -51.5669), p(96.4907, -66.4907, -66.4161), p(-96.4907, -146.4907, -66.4161), p(-96.4907, 126.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -45.4161), p(96.4907, -76.4907, -66.4161), p(-96.4907, -156.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 158.9172, -51.5669), p(96.4907, -86.4907, -66.4161), p(-96.4907, -166.4907, -66.4161), p(-96.4907, 106.4907, -66.4161)]),
    f([p(96.4907, 176.4907, -66.4161), p(96.4907, -96.4907, -66.4161), p(-96.4907, -176.4907, -66.4161), p(-96.4907, 96.4907, -66.4161)]),
    f([p(96.4907, 166.4907, -66.4161), p(96.4907, -106.4907, -66.4161), p(-96.4907, -158.9172, -51.5669), p(-96.4907, 86.4907, -66.4161)]),
    f([p(96.4907, 156.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -45.4161), p(-96.4907, 76.4907, -66.4161)]),
    f([p(96.4907, 146.4907, -66.4161), p(96.4907, -126.4907, -66.4161), p(-96.4907, -74.0643, -51.5669), p(-96.4907, 66.4907, -66.4161)]),
];
pub static WALK_FORWARD_FAST: GaitTable<4> = GaitTable {
    frames: &WALK_FORWARD_FAST_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static WALK_BACKWARD_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 128.9907, -66.4161), p(96.4907, -128.9907, -66.4161), p(-96.4907, -78.9907, -66.4161), p(-96.4907, 78.9907, -66.4161)]),
    f([p(96.4907, 135.2407, -66.4161), p(96.4907, -122.7407, -66.4161), p(-96.4907, -89.9742, -41.6674), p(-96.4907, 85.2407, -66.4161)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 147.7407, -66.4161), p(96.4907, -110.2407, -66.4161), p(-96.4907, -143.0073, -41.6674), p(-96.4907, 97.7407, -66.4161)]),
    f([p(96.4907, 153.9907, -66.4161), p(96.4907, -103.9907, -66.4161), p(-96.4907, -153.9907, -66.4161), p(-96.4907, 103.9907, -66.4161)]),
    f([p(96.4907, 143.0073, -41.6674), p(96.4907, -97.7407, -66.4161), p(-96.4907, -147.7407, -66.4161), p(-96.4907, 110.2407, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 89.9742, -41.6674), p(96.4907, -85.2407, -66.4161), p(-96.4907, -135.2407, -66.4161), p(-96.4907, 122.7407, -66.4161)]),
    f([p(96.4907, 78.9907, -66.4161), p(96.4907, -78.9907, -66.4161), p(-96.4907, -128.9907, -66.4161), p(-96.4907, 128.9907, -66.4161)]),
    f([p(96.4907, 85.2407, -66.4161), p(96.4907, -89.9742, -41.6674), p(-96.4907, -122.7407, -66.4161), p(-96.4907, 135.2407, -66.4161)]),
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 97.7407, -66.4161), p(96.4907, -143.0073, -41.6674), p(-96.4907, -110.2407, -66.4161), p(-96.4907, 147.7407, -66.4161)]),
    f([p(96.4907, 103.9907, -66.4161), p(96.4907, -153.9907, -66.4161), p(-96.4907, -103.9907, -66.4161), p(-96.4907, 153.9907, -66.4161)]),
    f([p(96.4907, 110.2407, -66.4161), p(96.4907, -147.7407, -66.4161), p(-96.4907, -97.7407, -66.4161), p(-96.4907, 143.0073, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 122.7407, -66.4161), p(96.4907, -135.2407, -66.4161), p(-96.4907, -85.2407, -66.4161), p(-96.4907, 89.9742, -41.6674)]),
];
pub static WALK_BACKWARD: GaitTable<4> = GaitTable {
    frames: &WALK_BACKWARD_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static WALK_TURN_LEFT_FRAMES: [Locations<4>; 16] = [
    f([p(86.8643, 124.4645, -66.4161), p(86.8643, -124.4645, -66.4161), p(-67.6113, -140.4120, -66.4161), p(-67.6113, 140.4120, -66.4161)]),
    f([p(91.6775, 120.4776, -66.4161), p(82.0510, -128.4514, -66.4161), p(-72.4245, -136.4251, -66.4161), p(-76.0699, 133.4056, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(77.2378, -132.4382, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(101.3040, 112.5039, -66.4161), p(72.4245, -136.4251, -66.4161), p(-82.0510, -128.4514, -66.4161), p(-116.9116, 99.5759, -41.6674)]),
    f([p(106.1172, 108.5170, -66.4161), p(67.6113, -140.4120, -66.4161), p(-86.8643, -124.4645, -66.4161), p(-125.3702, 92.5695, -66.4161)]),
    f([p(110.9305, 104.5301, -66.4161), p(76.0699, -133.4056, -41.6674), p(-91.6775, -120.4776, -66.4161), p(-120.5570, 96.5564, -66.4161)]),
    f([p(115.7437, 100.5433, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(120.5570, 96.5564, -66.4161), p(116.9116, -99.5759, -41.6674), p(-101.3040, -112.5039, -66.4161), p(-110.9305, 104.5301, -66.4161)]),
    f([p(125.3702, 92.5695, -66.4161), p(125.3702, -92.5695, -66.4161), p(-106.1172, -108.5170, -66.4161), p(-106.1172, 108.5170, -66.4161)]),
    f([p(116.9116, 99.5759, -41.6674), p(120.5570, -96.5564, -66.4161), p(-110.9305, -104.5301, -66.4161), p(-101.3040, 112.5039, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(115.7437, -100.5433, -66.4161), p(-115.7437, -100.5433, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(76.0699, 133.4056, -41.6674), p(110.9305, -104.5301, -66.4161), p(-120.5570, -96.5564, -66.4161), p(-91.6775, 120.4776, -66.4161)]),
    f([p(67.6113, 140.4120, -66.4161), p(106.1172, -108.5170, -66.4161), p(-125.3702, -92.5695, -66.4161), p(-86.8643, 124.4645, -66.4161)]),
    f([p(72.4245, 136.4251, -66.4161), p(101.3040, -112.5039, -66.4161), p(-116.9116, -99.5759, -41.6674), p(-82.0510, 128.4514, -66.4161)]),
    f([p(77.2378, 132.4382, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(82.0510, 128.4514, -66.4161), p(91.6775, -120.4776, -66.4161), p(-76.0699, -133.4056, -41.6674), p(-72.4245, 136.4251, -66.4161)]),
];
pub static WALK_TURN_LEFT: GaitTable<4> = GaitTable {
    frames: &WALK_TURN_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static WALK_TURN_RIGHT_FRAMES: [Locations<4>; 16] = [
    f([p(86.8643, 124.4645, -66.4161), p(86.8643, -124.4645, -66.4161), p(-67.6113, -140.4120, -66.4161), p(-67.6113, 140.4120, -66.4161)]),
    f([p(82.0510, 128.4514, -66.4161), p(91.6775, -120.4776, -66.4161), p(-76.0699, -133.4056, -41.6674), p(-72.4245, 136.4251, -66.4161)]),
    f([p(77.2378, 132.4382, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(72.4245, 136.4251, -66.4161), p(101.3040, -112.5039, -66.4161), p(-116.9116, -99.5759, -41.6674), p(-82.0510, 128.4514, -66.4161)]),
    f([p(67.6113, 140.4120, -66.4161), p(106.1172, -108.5170, -66.4161), p(-125.3702, -92.5695, -66.4161), p(-86.8643, 124.4645, -66.4161)]),
    f([p(76.0699, 133.4056, -41.6674), p(110.9305, -104.5301, -66.4161), p(-120.5570, -96.5564, -66.4161), p(-91.6775, 120.4776, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(115.7437, -100.5433, -66.4161), p(-115.7437, -100.5433, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(116.9116, 99.5759, -41.6674), p(120.5570, -96.5564, -66.4161), p(-110.9305, -104.5301, -66.4161), p(-101.3040, 112.5039, -66.4161)]),
    f([p(125.3702, 92.5695, -66.4161), p(125.3702, -92.5695, -66.4161), p(-106.1172, -108.5170, -66.4161), p(-106.1172, 108.5170, -66.4161)]),
    f([p(120.5570, 96.5564, -66.4161), p(116.9116, -99.5759, -41.6674), p(-101.3040, -112.5039, -66.4161), p(-110.9305, 104.5301, -66.4161)]),
    f([p(115.7437, 100.5433, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(110.9305, 104.5301, -66.4161), p(76.0699, -133.4056, -41.6674), p(-91.6775, -120.4776, -66.4161), p(-120.5570, 96.5564, -66.4161)]),
    f([p(106.1172, 108.5170, -66.4161), p(67.6113, -140.4120, -66.4161), p(-86.8643, -124.4645, -66.4161), p(-125.3702, 92.5695, -66.4161)]),
    f([p(101.3040, 112.5039, -66.4161), p(72.4245, -136.4251, -66.4161), p(-82.0510, -128.4514, -66.4161), p(-116.9116, 99.5759, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(77.2378, -132.4382, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(91.6775, 120.4776, -66.4161), p(82.0510, -128.4514, -66.4161), p(-72.4245, -136.4251, -66.4161), p(-76.0699, 133.4056, -41.6674)]),
];
pub static WALK_TURN_RIGHT: GaitTable<4> = GaitTable {
    frames: &WALK_TURN_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static WALK_SHIFT_LEFT_FRAMES: [Locations<4>; 16] = [
    f([p(83.9907, 116.4907, -66.4161), p(108.9907, -116.4907, -66.4161), p(-133.9907, -116.4907, -66.4161), p(-58.9907, 116.4907, -66.4161)]),
    f([p(90.2407, 116.4907, -66.4161), p(115.2407, -116.4907, -66.4161), p(-127.7407, -116.4907, -66.4161), p(-69.9742, 116.4907, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(121.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(102.7407, 116.4907, -66.4161), p(127.7407, -116.4907, -66.4161), p(-115.2407, -116.4907, -66.4161), p(-123.0073, 116.4907, -41.6674)]),
    f([p(108.9907, 116.4907, -66.4161), p(133.9907, -116.4907, -66.4161), p(-108.9907, -116.4907, -66.4161), p(-133.9907, 116.4907, -66.4161)]),
    f([p(115.2407, 116.4907, -66.4161), p(123.0073, -116.4907, -41.6674), p(-102.7407, -116.4907, -66.4161), p(-127.7407, 116.4907, -66.4161)]),
    f([p(121.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(127.7407, 116.4907, -66.4161), p(69.9742, -116.4907, -41.6674), p(-90.2407, -116.4907, -66.4161), p(-115.2407, 116.4907, -66.4161)]),
    f([p(133.9907, 116.4907, -66.4161), p(58.9907, -116.4907, -66.4161), p(-83.9907, -116.4907, -66.4161), p(-108.9907, 116.4907, -66.4161)]),
    f([p(123.0073, 116.4907, -41.6674), p(65.2407, -116.4907, -66.4161), p(-77.7407, -116.4907, -66.4161), p(-102.7407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(71.4907, -116.4907, -66.4161), p(-71.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(69.9742, 116.4907, -41.6674), p(77.7407, -116.4907, -66.4161), p(-65.2407, -116.4907, -66.4161), p(-90.2407, 116.4907, -66.4161)]),
    f([p(58.9907, 116.4907, -66.4161), p(83.9907, -116.4907, -66.4161), p(-58.9907, -116.4907, -66.4161), p(-83.9907, 116.4907, -66.4161)]),
    f([p(65.2407, 116.4907, -66.4161), p(90.2407, -116.4907, -66.4161), p(-69.9742, -116.4907, -41.6674), p(-77.7407, 116.4907, -66.4161)]),
    f([p(71.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(77.7407, 116.4907, -66.4161), p(102.7407, -116.4907, -66.4161), p(-123.0073, -116.4907, -41.6674), p(-65.2407, 116.4907, -66.4161)]),
];
pub static WALK_SHIFT_LEFT: GaitTable<4> = GaitTable {
    frames: &WALK_SHIFT_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static WALK_SHIFT_RIGHT_FRAMES: [Locations<4>; 16] = [
    f([p(83.9907, 116.4907, -66.4161), p(108.9907, -116.4907, -66.4161), p(-133.9907, -116.4907, -66.4161), p(-58.9907, 116.4907, -66.4161)]),
    f([p(77.7407, 116.4907, -66.4161), p(102.7407, -116.4907, -66.4161), p(-123.0073, -116.4907, -41.6674), p(-65.2407, 116.4907, -66.4161)]),
    f([p(71.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(65.2407, 116.4907, -66.4161), p(90.2407, -116.4907, -66.4161), p(-69.9742, -116.4907, -41.6674), p(-77.7407, 116.4907, -66.4161)]),
    f([p(58.9907, 116.4907, -66.4161), p(83.9907, -116.4907, -66.4161), p(-58.9907, -116.4907, -66.4161), p(-83.9907, 116.4907, -66.4161)]),
    f([p(69.9742, 116.4907, -41.6674), p(77.7407, -116.4907, -66.4161), p(-65.2407, -116.4907, -66.4161), p(-90.2407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(71.4907, -116.4907, -66.4161), p(-71.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(123.0073, 116.4907, -41.6674), p(65.2407, -116.4907, -66.4161), p(-77.7407, -116.4907, -66.4161), p(-102.7407, 116.4907, -66.4161)]),
    f([p(133.9907, 116.4907, -66.4161), p(58.9907, -116.4907, -66.4161), p(-83.9907, -116.4907, -66.4161), p(-108.9907, 116.4907, -66.4161)]),
    f([p(127.7407, 116.4907, -66.4161), p(69.9742, -116.4907, -41.6674), p(-90.2407, -116.4907, -66.4161), p(-115.2407, 116.4907, -66.4161)]),
    f([p(121.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(115.2407, 116.4907, -66.4161), p(123.0073, -116.4907, -41.6674), p(-102.7407, -116.4907, -66.4161), p(-127.7407, 116.4907, -66.4161)]),
    f([p(108.9907, 116.4907, -66.4161), p(133.9907, -116.4907, -66.4161), p(-108.9907, -116.4907, -66.4161), p(-133.9907, 116.4907, -66.4161)]),
    f([p(102.7407, 116.4907, -66.4161), p(127.7407, -116.4907, -66.4161), p(-115.2407, -116.4907, -66.4161), p(-123.0073, 116.4907, -41.6674)]),
    f([p(96.4907, 116.4907, -66.4161), p(121.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(90.2407, 116.4907, -66.4161), p(115.2407, -116.4907, -66.4161), p(-127.7407, -116.4907, -66.4161), p(-69.9742, 116.4907, -41.6674)]),
];
pub static WALK_SHIFT_RIGHT: GaitTable<4> = GaitTable {
    frames: &WALK_SHIFT_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static GALLOP_FORWARD_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 103.9907, -66.4161), p(96.4907, -103.9907, -66.4161), p(-96.4907, -78.9907, -66.4161), p(-96.4907, 78.9907, -66.4161)]),
    f([p(96.4907, 97.7407, -66.4161), p(96.4907, -110.2407, -66.4161), p(-96.4907, -85.2407, -66.4161), p(-96.4907, 89.9742, -41.6674)]),
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 85.2407, -66.4161), p(96.4907, -122.7407, -66.4161), p(-96.4907, -97.7407, -66.4161), p(-96.4907, 143.0073, -41.6674)]),
    f([p(96.4907, 78.9907, -66.4161), p(96.4907, -128.9907, -66.4161), p(-96.4907, -103.9907, -66.4161), p(-96.4907, 153.9907, -66.4161)]),
    f([p(96.4907, 89.9742, -41.6674), p(96.4907, -135.2407, -66.4161), p(-96.4907, -110.2407, -66.4161), p(-96.4907, 147.7407, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 143.0073, -41.6674), p(96.4907, -147.7407, -66.4161), p(-96.4907, -122.7407, -66.4161), p(-96.4907, 135.2407, -66.4161)]),
    f([p(96.4907, 153.9907, -66.4161), p(96.4907, -153.9907, -66.4161), p(-96.4907, -128.9907, -66.4161), p(-96.4907, 128.9907, -66.4161)]),
    f([p(96.4907, 147.7407, -66.4161), p(96.4907, -143.0073, -41.6674), p(-96.4907, -135.2407, -66.4161), p(-96.4907, 122.7407, -66.4161)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 135.2407, -66.4161), p(96.4907, -89.9742, -41.6674), p(-96.4907, -147.7407, -66.4161), p(-96.4907, 110.2407, -66.4161)]),
    f([p(96.4907, 128.9907, -66.4161), p(96.4907, -78.9907, -66.4161), p(-96.4907, -153.9907, -66.4161), p(-96.4907, 103.9907, -66.4161)]),
    f([p(96.4907, 122.7407, -66.4161), p(96.4907, -85.2407, -66.4161), p(-96.4907, -143.0073, -41.6674), p(-96.4907, 97.7407, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 110.2407, -66.4161), p(96.4907, -97.7407, -66.4161), p(-96.4907, -89.9742, -41.6674), p(-96.4907, 85.2407, -66.4161)]),
];
pub static GALLOP_FORWARD: GaitTable<4> = GaitTable {
    frames: &GALLOP_FORWARD_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static GALLOP_FORWARD_FAST_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 96.4907, -66.4161), p(96.4907, -96.4907, -66.4161), p(-96.4907, -56.4907, -66.4161), p(-96.4907, 56.4907, -66.4161)]),
    f([p(96.4907, 86.4907, -66.4161), p(96.4907, -106.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 74.0643, -51.5669)]),
    f([p(96.4907, 76.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -76.4907, -66.4161), p(-96.4907, 116.4907, -45.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -126.4907, -66.4161), p(-96.4907, -86.4907, -66.4161), p(-96.4907, 158.9172, -51.5669)]),
    f([p(96.4907, 56.4907, -66.4161), p(96.4907, -136.4907, -66.4161), p(-96.4907, -96.4907, -66.4161), p(-96.4907, 176.4907, -66.4161)]),
    f([p(96.4907, 74.0643, -51.5669), p(96.4907, -146.4907, -66.4161), p(-96.4907, -106.4907, -66.4161), p(-96.4907, 166.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -45.4161), p(96.4907, -156.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 156.4907, -66.4161)]),
    f([p(96.4907, 158.9172, -51.5669), p(96.4907, -166.4907, -66.4161), p(-96.4907, -126.4907, -66.4161), p(-96.4907, 146.4907, -66.4161)]),
    f([p(96.4907, 176.4907, -66.4161), p(96.4907, -176.4907, -66.4161), p(-96.4907, -136.4907, -66.4161), p(-96.4907, 136.4907, -66.4161)]),
    f([p(96.4907, 166.4907, -66.4161), p(96.4907, -158.9172, -51.5669), p(-96.4907, -146.4907, -66.4161), p(-96.4907, 126.4907, -66.4161)]),
    f([p(96.4907, 156.4907, -66.4161), p(96.4907, -116.4907, -45.4161), p(-96.4907, -156.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 146.4907, -66.4161), p(96.4907, -74.0643, -51.5669), p(-96.4907, -166.4907, -66.4161), p(-96.4907, 106.4907, -66.4161)]),
    f([p(96.4907, 136.4907, -66.4161), p(96.4907, -56.4907, -66.4161), p(-96.4907, -176.4907, -66.4161), p(-96.4907, 96.4907, -66.4161)]),
    f([p(96.4907, 126.4907, -66.4161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -158.9172, -51.5669), p(-96.4907, 86.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -76.4907, -66.4161), p(-96.4907, -116.4907, -45.4161), p(-96.4907, 76.4907, -66.4161)]),
    f([p(96.4907, 106.4907, -66.4161), p(96.4907, -86.4907, -66.4161), p(-96.4907, -74.0643, -51.5669), p(-96.4907, 66.4907, -66.4161)]),
];
pub static GALLOP_FORWARD_FAST: GaitTable<4> = GaitTable {
    frames: &GALLOP_FORWARD_FAST_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static GALLOP_BACKWARD_FRAMES: [Locations<4>; 16] = [
    f([p(96.4907, 103.9907, -66.4161), p(96.4907, -103.9907, -66.4161), p(-96.4907, -78.9907, -66.4161), p(-96.4907, 78.9907, -66.4161)]),
    f([p(96.4907, 110.2407, -66.4161), p(96.4907, -97.7407, -66.4161), p(-96.4907, -89.9742, -41.6674), p(-96.4907, 85.2407, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -91.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-96.4907, 91.4907, -66.4161)]),
    f([p(96.4907, 122.7407, -66.4161), p(96.4907, -85.2407, -66.4161), p(-96.4907, -143.0073, -41.6674), p(-96.4907, 97.7407, -66.4161)]),
    f([p(96.4907, 128.9907, -66.4161), p(96.4907, -78.9907, -66.4161), p(-96.4907, -153.9907, -66.4161), p(-96.4907, 103.9907, -66.4161)]),
    f([p(96.4907, 135.2407, -66.4161), p(96.4907, -89.9742, -41.6674), p(-96.4907, -147.7407, -66.4161), p(-96.4907, 110.2407, -66.4161)]),
    f([p(96.4907, 141.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-96.4907, -141.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 147.7407, -66.4161), p(96.4907, -143.0073, -41.6674), p(-96.4907, -135.2407, -66.4161), p(-96.4907, 122.7407, -66.4161)]),
    f([p(96.4907, 153.9907, -66.4161), p(96.4907, -153.9907, -66.4161), p(-96.4907, -128.9907, -66.4161), p(-96.4907, 128.9907, -66.4161)]),
    f([p(96.4907, 143.0073, -41.6674), p(96.4907, -147.7407, -66.4161), p(-96.4907, -122.7407, -66.4161), p(-96.4907, 135.2407, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(96.4907, -141.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 141.4907, -66.4161)]),
    f([p(96.4907, 89.9742, -41.6674), p(96.4907, -135.2407, -66.4161), p(-96.4907, -110.2407, -66.4161), p(-96.4907, 147.7407, -66.4161)]),
    f([p(96.4907, 78.9907, -66.4161), p(96.4907, -128.9907, -66.4161), p(-96.4907, -103.9907, -66.4161), p(-96.4907, 153.9907, -66.4161)]),
    f([p(96.4907, 85.2407, -66.4161), p(96.4907, -122.7407, -66.4161), p(-96.4907, -97.7407, -66.4161), p(-96.4907, 143.0073, -41.6674)]),
    f([p(96.4907, 91.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -91.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(96.4907, 97.7407, -66.4161), p(96.4907, -110.2407, -66.4161), p(-96.4907, -85.2407, -66.4161), p(-96.4907, 89.9742, -41.6674)]),
];
pub static GALLOP_BACKWARD: GaitTable<4> = GaitTable {
    frames: &GALLOP_BACKWARD_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static GALLOP_TURN_LEFT_FRAMES: [Locations<4>; 16] = [
    f([p(106.1172, 108.5170, -66.4161), p(106.1172, -108.5170, -66.4161), p(-67.6113, -140.4120, -66.4161), p(-67.6113, 140.4120, -66.4161)]),
    f([p(110.9305, 104.5301, -66.4161), p(101.3040, -112.5039, -66.4161), p(-72.4245, -136.4251, -66.4161), p(-76.0699, 133.4056, -41.6674)]),
    f([p(115.7437, 100.5433, -66.4161), p(96.4907, -116.4907, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(120.5570, 96.5564, -66.4161), p(91.6775, -120.4776, -66.4161), p(-82.0510, -128.4514, -66.4161), p(-116.9116, 99.5759, -41.6674)]),
    f([p(125.3702, 92.5695, -66.4161), p(86.8643, -124.4645, -66.4161), p(-86.8643, -124.4645, -66.4161), p(-125.3702, 92.5695, -66.4161)]),
    f([p(116.9116, 99.5759, -41.6674), p(82.0510, -128.4514, -66.4161), p(-91.6775, -120.4776, -66.4161), p(-120.5570, 96.5564, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(77.2378, -132.4382, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(76.0699, 133.4056, -41.6674), p(72.4245, -136.4251, -66.4161), p(-101.3040, -112.5039, -66.4161), p(-110.9305, 104.5301, -66.4161)]),
    f([p(67.6113, 140.4120, -66.4161), p(67.6113, -140.4120, -66.4161), p(-106.1172, -108.5170, -66.4161), p(-106.1172, 108.5170, -66.4161)]),
    f([p(72.4245, 136.4251, -66.4161), p(76.0699, -133.4056, -41.6674), p(-110.9305, -104.5301, -66.4161), p(-101.3040, 112.5039, -66.4161)]),
    f([p(77.2378, 132.4382, -66.4161), p(96.4907, -116.4907, -31.4161), p(-115.7437, -100.5433, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(82.0510, 128.4514, -66.4161), p(116.9116, -99.5759, -41.6674), p(-120.5570, -96.5564, -66.4161), p(-91.6775, 120.4776, -66.4161)]),
    f([p(86.8643, 124.4645, -66.4161), p(125.3702, -92.5695, -66.4161), p(-125.3702, -92.5695, -66.4161), p(-86.8643, 124.4645, -66.4161)]),
    f([p(91.6775, 120.4776, -66.4161), p(120.5570, -96.5564, -66.4161), p(-116.9116, -99.5759, -41.6674), p(-82.0510, 128.4514, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(115.7437, -100.5433, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(101.3040, 112.5039, -66.4161), p(110.9305, -104.5301, -66.4161), p(-76.0699, -133.4056, -41.6674), p(-72.4245, 136.4251, -66.4161)]),
];
pub static GALLOP_TURN_LEFT: GaitTable<4> = GaitTable {
    frames: &GALLOP_TURN_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static GALLOP_TURN_RIGHT_FRAMES: [Locations<4>; 16] = [
    f([p(106.1172, 108.5170, -66.4161), p(106.1172, -108.5170, -66.4161), p(-67.6113, -140.4120, -66.4161), p(-67.6113, 140.4120, -66.4161)]),
    f([p(101.3040, 112.5039, -66.4161), p(110.9305, -104.5301, -66.4161), p(-76.0699, -133.4056, -41.6674), p(-72.4245, 136.4251, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(115.7437, -100.5433, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-77.2378, 132.4382, -66.4161)]),
    f([p(91.6775, 120.4776, -66.4161), p(120.5570, -96.5564, -66.4161), p(-116.9116, -99.5759, -41.6674), p(-82.0510, 128.4514, -66.4161)]),
    f([p(86.8643, 124.4645, -66.4161), p(125.3702, -92.5695, -66.4161), p(-125.3702, -92.5695, -66.4161), p(-86.8643, 124.4645, -66.4161)]),
    f([p(82.0510, 128.4514, -66.4161), p(116.9116, -99.5759, -41.6674), p(-120.5570, -96.5564, -66.4161), p(-91.6775, 120.4776, -66.4161)]),
    f([p(77.2378, 132.4382, -66.4161), p(96.4907, -116.4907, -31.4161), p(-115.7437, -100.5433, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(72.4245, 136.4251, -66.4161), p(76.0699, -133.4056, -41.6674), p(-110.9305, -104.5301, -66.4161), p(-101.3040, 112.5039, -66.4161)]),
    f([p(67.6113, 140.4120, -66.4161), p(67.6113, -140.4120, -66.4161), p(-106.1172, -108.5170, -66.4161), p(-106.1172, 108.5170, -66.4161)]),
    f([p(76.0699, 133.4056, -41.6674), p(72.4245, -136.4251, -66.4161), p(-101.3040, -112.5039, -66.4161), p(-110.9305, 104.5301, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(77.2378, -132.4382, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-115.7437, 100.5433, -66.4161)]),
    f([p(116.9116, 99.5759, -41.6674), p(82.0510, -128.4514, -66.4161), p(-91.6775, -120.4776, -66.4161), p(-120.5570, 96.5564, -66.4161)]),
    f([p(125.3702, 92.5695, -66.4161), p(86.8643, -124.4645, -66.4161), p(-86.8643, -124.4645, -66.4161), p(-125.3702, 92.5695, -66.4161)]),
    f([p(120.5570, 96.5564, -66.4161), p(91.6775, -120.4776, -66.4161), p(-82.0510, -128.4514, -66.4161), p(-116.9116, 99.5759, -41.6674)]),
    f([p(115.7437, 100.5433, -66.4161), p(96.4907, -116.4907, -66.4161), p(-77.2378, -132.4382, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(110.9305, 104.5301, -66.4161), p(101.3040, -112.5039, -66.4161), p(-72.4245, -136.4251, -66.4161), p(-76.0699, 133.4056, -41.6674)]),
];
pub static GALLOP_TURN_RIGHT: GaitTable<4> = GaitTable {
    frames: &GALLOP_TURN_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static GALLOP_SHIFT_LEFT_FRAMES: [Locations<4>; 16] = [
    f([p(108.9907, 116.4907, -66.4161), p(83.9907, -116.4907, -66.4161), p(-133.9907, -116.4907, -66.4161), p(-58.9907, 116.4907, -66.4161)]),
    f([p(115.2407, 116.4907, -66.4161), p(90.2407, -116.4907, -66.4161), p(-127.7407, -116.4907, -66.4161), p(-69.9742, 116.4907, -41.6674)]),
    f([p(121.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(127.7407, 116.4907, -66.4161), p(102.7407, -116.4907, -66.4161), p(-115.2407, -116.4907, -66.4161), p(-123.0073, 116.4907, -41.6674)]),
    f([p(133.9907, 116.4907, -66.4161), p(108.9907, -116.4907, -66.4161), p(-108.9907, -116.4907, -66.4161), p(-133.9907, 116.4907, -66.4161)]),
    f([p(123.0073, 116.4907, -41.6674), p(115.2407, -116.4907, -66.4161), p(-102.7407, -116.4907, -66.4161), p(-127.7407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(121.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(69.9742, 116.4907, -41.6674), p(127.7407, -116.4907, -66.4161), p(-90.2407, -116.4907, -66.4161), p(-115.2407, 116.4907, -66.4161)]),
    f([p(58.9907, 116.4907, -66.4161), p(133.9907, -116.4907, -66.4161), p(-83.9907, -116.4907, -66.4161), p(-108.9907, 116.4907, -66.4161)]),
    f([p(65.2407, 116.4907, -66.4161), p(123.0073, -116.4907, -41.6674), p(-77.7407, -116.4907, -66.4161), p(-102.7407, 116.4907, -66.4161)]),
    f([p(71.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-71.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(77.7407, 116.4907, -66.4161), p(69.9742, -116.4907, -41.6674), p(-65.2407, -116.4907, -66.4161), p(-90.2407, 116.4907, -66.4161)]),
    f([p(83.9907, 116.4907, -66.4161), p(58.9907, -116.4907, -66.4161), p(-58.9907, -116.4907, -66.4161), p(-83.9907, 116.4907, -66.4161)]),
    f([p(90.2407, 116.4907, -66.4161), p(65.2407, -116.4907, -66.4161), p(-69.9742, -116.4907, -41.6674), p(-77.7407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(71.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(102.7407, 116.4907, -66.4161), p(77.7407, -116.4907, -66.4161), p(-123.0073, -116.4907, -41.6674), p(-65.2407, 116.4907, -66.4161)]),
];
pub static GALLOP_SHIFT_LEFT: GaitTable<4> = GaitTable {
    frames: &GALLOP_SHIFT_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 6,
};

#[rustfmt::skip]
static GALLOP_SHIFT_RIGHT_FRAMES: [Locations<4>; 16] = [
    f([p(108.9907, 116.4907, -66.4161), p(83.9907, -116.4907, -66.4161), p(-133.9907, -116.4907, -66.4161), p(-58.9907, 116.4907, -66.4161)]),
    f([p(102.7407, 116.4907, -66.4161), p(77.7407, -116.4907, -66.4161), p(-123.0073, -116.4907, -41.6674), p(-65.2407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(71.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -31.4161), p(-71.4907, 116.4907, -66.4161)]),
    f([p(90.2407, 116.4907, -66.4161), p(65.2407, -116.4907, -66.4161), p(-69.9742, -116.4907, -41.6674), p(-77.7407, 116.4907, -66.4161)]),
    f([p(83.9907, 116.4907, -66.4161), p(58.9907, -116.4907, -66.4161), p(-58.9907, -116.4907, -66.4161), p(-83.9907, 116.4907, -66.4161)]),
    f([p(77.7407, 116.4907, -66.4161), p(69.9742, -116.4907, -41.6674), p(-65.2407, -116.4907, -66.4161), p(-90.2407, 116.4907, -66.4161)]),
    f([p(71.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -31.4161), p(-71.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(65.2407, 116.4907, -66.4161), p(123.0073, -116.4907, -41.6674), p(-77.7407, -116.4907, -66.4161), p(-102.7407, 116.4907, -66.4161)]),
    f([p(58.9907, 116.4907, -66.4161), p(133.9907, -116.4907, -66.4161), p(-83.9907, -116.4907, -66.4161), p(-108.9907, 116.4907, -66.4161)]),
    f([p(69.9742, 116.4907, -41.6674), p(127.7407, -116.4907, -66.4161), p(-90.2407, -116.4907, -66.4161), p(-115.2407, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -31.4161), p(121.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-121.4907, 116.4907, -66.4161)]),
    f([p(123.0073, 116.4907, -41.6674), p(115.2407, -116.4907, -66.4161), p(-102.7407, -116.4907, -66.4161), p(-127.7407, 116.4907, -66.4161)]),
    f([p(133.9907, 116.4907, -66.4161), p(108.9907, -116.4907, -66.4161), p(-108.9907, -116.4907, -66.4161), p(-133.9907, 116.4907, -66.4161)]),
    f([p(127.7407, 116.4907, -66.4161), p(102.7407, -116.4907, -66.4161), p(-115.2407, -116.4907, -66.4161), p(-123.0073, 116.4907, -41.6674)]),
    f([p(121.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-121.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -31.4161)]),
    f([p(115.2407, 116.4907, -66.4161), p(90.2407, -116.4907, -66.4161), p(-127.7407, -116.4907, -66.4161), p(-69.9742, 116.4907, -41.6674)]),
];
pub static GALLOP_SHIFT_RIGHT: GaitTable<4> = GaitTable {
    frames: &GALLOP_SHIFT_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 10,
};

#[rustfmt::skip]
static CREEP_FORWARD_FRAMES: [Locations<4>; 24] = [
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 81.1354, -29.2930), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 151.8461, -29.2930), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 166.4907, -66.4161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 162.6847, -66.4161), p(96.4907, -70.2968, -66.4161), p(-96.4907, -135.6249, -66.4161), p(-96.4907, 97.3566, -66.4161)]),
    f([p(96.4907, 151.8461, -66.4161), p(96.4907, -81.1354, -66.4161), p(-96.4907, -151.8461, -66.4161), p(-96.4907, 81.1354, -66.4161)]),
    f([p(96.4907, 135.6249, -66.4161), p(96.4907, -97.3566, -66.4161), p(-96.4907, -162.6847, -66.4161), p(-96.4907, 70.2968, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -166.4907, -66.4161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -151.8461, -29.2930), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -81.1354, -29.2930), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 81.1354, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 151.8461, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 166.4907, -66.4161)]),
    f([p(96.4907, 97.3566, -66.4161), p(96.4907, -135.6249, -66.4161), p(-96.4907, -70.2968, -66.4161), p(-96.4907, 162.6847, -66.4161)]),
    f([p(96.4907, 81.1354, -66.4161), p(96.4907, -151.8461, -66.4161), p(-96.4907, -81.1354, -66.4161), p(-96.4907, 151.8461, -66.4161)]),
    f([p(96.4907, 70.2968, -66.4161), p(96.4907, -162.6847, -66.4161), p(-96.4907, -97.3566, -66.4161), p(-96.4907, 135.6249, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -166.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -151.8461, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -81.1354, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_FORWARD: GaitTable<4> = GaitTable {
    frames: &CREEP_FORWARD_FRAMES,
    step_duration_ms: 20,
    entry: 2,
};

#[rustfmt::skip]
static CREEP_FORWARD_FAST_FRAMES: [Locations<4>; 24] = [
    f([p(96.4907, 36.4907, -66.4161), p(96.4907, -36.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 59.9222, -44.1423), p(96.4907, -36.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -34.9161), p(96.4907, -36.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 173.0593, -44.1423), p(96.4907, -36.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 196.4907, -66.4161), p(96.4907, -36.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 190.4011, -66.4161), p(96.4907, -42.5804, -66.4161), p(-96.4907, -147.1054, -66.4161), p(-96.4907, 85.8761, -66.4161)]),
    f([p(96.4907, 173.0593, -66.4161), p(96.4907, -59.9222, -66.4161), p(-96.4907, -173.0593, -66.4161), p(-96.4907, 59.9222, -66.4161)]),
    f([p(96.4907, 147.1054, -66.4161), p(96.4907, -85.8761, -66.4161), p(-96.4907, -190.4011, -66.4161), p(-96.4907, 42.5804, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -196.4907, -66.4161), p(-96.4907, 36.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -173.0593, -44.1423), p(-96.4907, 36.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -34.9161), p(-96.4907, 36.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -59.9222, -44.1423), p(-96.4907, 36.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -36.4907, -66.4161), p(-96.4907, 36.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -36.4907, -66.4161), p(-96.4907, 59.9222, -44.1423)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -36.4907, -66.4161), p(-96.4907, 116.4907, -34.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -36.4907, -66.4161), p(-96.4907, 173.0593, -44.1423)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -36.4907, -66.4161), p(-96.4907, 196.4907, -66.4161)]),
    f([p(96.4907, 85.8761, -66.4161), p(96.4907, -147.1054, -66.4161), p(-96.4907, -42.5804, -66.4161), p(-96.4907, 190.4011, -66.4161)]),
    f([p(96.4907, 59.9222, -66.4161), p(96.4907, -173.0593, -66.4161), p(-96.4907, -59.9222, -66.4161), p(-96.4907, 173.0593, -66.4161)]),
    f([p(96.4907, 42.5804, -66.4161), p(96.4907, -190.4011, -66.4161), p(-96.4907, -85.8761, -66.4161), p(-96.4907, 147.1054, -66.4161)]),
    f([p(96.4907, 36.4907, -66.4161), p(96.4907, -196.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 36.4907, -66.4161), p(96.4907, -173.0593, -44.1423), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 36.4907, -66.4161), p(96.4907, -116.4907, -34.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 36.4907, -66.4161), p(96.4907, -59.9222, -44.1423), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_FORWARD_FAST: GaitTable<4> = GaitTable {
    frames: &CREEP_FORWARD_FAST_FRAMES,
    step_duration_ms: 20,
    entry: 2,
};

#[rustfmt::skip]
static CREEP_BACKWARD_FRAMES: [Locations<4>; 24] = [
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -81.1354, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -151.8461, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 66.4907, -66.4161), p(96.4907, -166.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 70.2968, -66.4161), p(96.4907, -162.6847, -66.4161), p(-96.4907, -97.3566, -66.4161), p(-96.4907, 135.6249, -66.4161)]),
    f([p(96.4907, 81.1354, -66.4161), p(96.4907, -151.8461, -66.4161), p(-96.4907, -81.1354, -66.4161), p(-96.4907, 151.8461, -66.4161)]),
    f([p(96.4907, 97.3566, -66.4161), p(96.4907, -135.6249, -66.4161), p(-96.4907, -70.2968, -66.4161), p(-96.4907, 162.6847, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 166.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 151.8461, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 81.1354, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -66.4907, -66.4161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -81.1354, -29.2930), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -151.8461, -29.2930), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -166.4907, -66.4161), p(-96.4907, 66.4907, -66.4161)]),
    f([p(96.4907, 135.6249, -66.4161), p(96.4907, -97.3566, -66.4161), p(-96.4907, -162.6847, -66.4161), p(-96.4907, 70.2968, -66.4161)]),
    f([p(96.4907, 151.8461, -66.4161), p(96.4907, -81.1354, -66.4161), p(-96.4907, -151.8461, -66.4161), p(-96.4907, 81.1354, -66.4161)]),
    f([p(96.4907, 162.6847, -66.4161), p(96.4907, -70.2968, -66.4161), p(-96.4907, -135.6249, -66.4161), p(-96.4907, 97.3566, -66.4161)]),
    f([p(96.4907, 166.4907, -66.4161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 151.8461, -29.2930), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 81.1354, -29.2930), p(96.4907, -66.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_BACKWARD: GaitTable<4> = GaitTable {
    frames: &CREEP_BACKWARD_FRAMES,
    step_duration_ms: 20,
    entry: 22,
};

#[rustfmt::skip]
static CREEP_TURN_LEFT_FRAMES: [Locations<4>; 24] = [
    f([p(134.9967, 84.5958, -66.4161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(123.7186, 93.9376, -29.2930), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(69.2629, 139.0439, -29.2930), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(57.9848, 148.3857, -66.4161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(60.9159, 145.9579, -66.4161), p(132.0656, -87.0236, -66.4161), p(-111.2263, -104.2851, -66.4161), p(-81.7551, 128.6964, -66.4161)]),
    f([p(69.2629, 139.0439, -66.4161), p(123.7186, -93.9376, -66.4161), p(-123.7186, -93.9376, -66.4161), p(-69.2629, 139.0439, -66.4161)]),
    f([p(81.7551, 128.6964, -66.4161), p(111.2263, -104.2851, -66.4161), p(-132.0656, -87.0236, -66.4161), p(-60.9159, 145.9579, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-134.9967, -84.5958, -66.4161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-123.7186, -93.9376, -29.2930), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-69.2629, -139.0439, -29.2930), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-69.2629, 139.0439, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-123.7186, 93.9376, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-134.9967, 84.5958, -66.4161)]),
    f([p(111.2263, 104.2851, -66.4161), p(81.7551, -128.6964, -66.4161), p(-60.9159, -145.9579, -66.4161), p(-132.0656, 87.0236, -66.4161)]),
    f([p(123.7186, 93.9376, -66.4161), p(69.2629, -139.0439, -66.4161), p(-69.2629, -139.0439, -66.4161), p(-123.7186, 93.9376, -66.4161)]),
    f([p(132.0656, 87.0236, -66.4161), p(60.9159, -145.9579, -66.4161), p(-81.7551, -128.6964, -66.4161), p(-111.2263, 104.2851, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(57.9848, -148.3857, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(69.2629, -139.0439, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(123.7186, -93.9376, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_TURN_LEFT: GaitTable<4> = GaitTable {
    frames: &CREEP_TURN_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 2,
};

#[rustfmt::skip]
static CREEP_TURN_RIGHT_FRAMES: [Locations<4>; 24] = [
    f([p(134.9967, 84.5958, -66.4161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(123.7186, -93.9376, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(69.2629, -139.0439, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(134.9967, 84.5958, -66.4161), p(57.9848, -148.3857, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(132.0656, 87.0236, -66.4161), p(60.9159, -145.9579, -66.4161), p(-81.7551, -128.6964, -66.4161), p(-111.2263, 104.2851, -66.4161)]),
    f([p(123.7186, 93.9376, -66.4161), p(69.2629, -139.0439, -66.4161), p(-69.2629, -139.0439, -66.4161), p(-123.7186, 93.9376, -66.4161)]),
    f([p(111.2263, 104.2851, -66.4161), p(81.7551, -128.6964, -66.4161), p(-60.9159, -145.9579, -66.4161), p(-132.0656, 87.0236, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-134.9967, 84.5958, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-123.7186, 93.9376, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-69.2629, 139.0439, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-57.9848, -148.3857, -66.4161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-69.2629, -139.0439, -29.2930), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-123.7186, -93.9376, -29.2930), p(-57.9848, 148.3857, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-134.9967, -84.5958, -66.4161), p(-57.9848, 148.3857, -66.4161)]),
    f([p(81.7551, 128.6964, -66.4161), p(111.2263, -104.2851, -66.4161), p(-132.0656, -87.0236, -66.4161), p(-60.9159, 145.9579, -66.4161)]),
    f([p(69.2629, 139.0439, -66.4161), p(123.7186, -93.9376, -66.4161), p(-123.7186, -93.9376, -66.4161), p(-69.2629, 139.0439, -66.4161)]),
    f([p(60.9159, 145.9579, -66.4161), p(132.0656, -87.0236, -66.4161), p(-111.2263, -104.2851, -66.4161), p(-81.7551, 128.6964, -66.4161)]),
    f([p(57.9848, 148.3857, -66.4161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(69.2629, 139.0439, -29.2930), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(123.7186, 93.9376, -29.2930), p(134.9967, -84.5958, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_TURN_RIGHT: GaitTable<4> = GaitTable {
    frames: &CREEP_TURN_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 22,
};

#[rustfmt::skip]
static CREEP_SHIFT_LEFT_FRAMES: [Locations<4>; 24] = [
    f([p(146.4907, 116.4907, -66.4161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(131.8461, 116.4907, -29.2930), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(61.1354, 116.4907, -29.2930), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(46.4907, 116.4907, -66.4161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(50.2968, 116.4907, -66.4161), p(50.2968, -116.4907, -66.4161), p(-77.3566, -116.4907, -66.4161), p(-77.3566, 116.4907, -66.4161)]),
    f([p(61.1354, 116.4907, -66.4161), p(61.1354, -116.4907, -66.4161), p(-61.1354, -116.4907, -66.4161), p(-61.1354, 116.4907, -66.4161)]),
    f([p(77.3566, 116.4907, -66.4161), p(77.3566, -116.4907, -66.4161), p(-50.2968, -116.4907, -66.4161), p(-50.2968, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-46.4907, -116.4907, -66.4161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-61.1354, -116.4907, -29.2930), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-131.8461, -116.4907, -29.2930), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-61.1354, 116.4907, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-131.8461, 116.4907, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-146.4907, 116.4907, -66.4161)]),
    f([p(115.6249, 116.4907, -66.4161), p(115.6249, -116.4907, -66.4161), p(-142.6847, -116.4907, -66.4161), p(-142.6847, 116.4907, -66.4161)]),
    f([p(131.8461, 116.4907, -66.4161), p(131.8461, -116.4907, -66.4161), p(-131.8461, -116.4907, -66.4161), p(-131.8461, 116.4907, -66.4161)]),
    f([p(142.6847, 116.4907, -66.4161), p(142.6847, -116.4907, -66.4161), p(-115.6249, -116.4907, -66.4161), p(-115.6249, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(146.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(131.8461, -116.4907, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(61.1354, -116.4907, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_SHIFT_LEFT: GaitTable<4> = GaitTable {
    frames: &CREEP_SHIFT_LEFT_FRAMES,
    step_duration_ms: 20,
    entry: 2,
};

#[rustfmt::skip]
static CREEP_SHIFT_RIGHT_FRAMES: [Locations<4>; 24] = [
    f([p(146.4907, 116.4907, -66.4161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(61.1354, -116.4907, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -13.9161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(131.8461, -116.4907, -29.2930), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(146.4907, 116.4907, -66.4161), p(146.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(142.6847, 116.4907, -66.4161), p(142.6847, -116.4907, -66.4161), p(-115.6249, -116.4907, -66.4161), p(-115.6249, 116.4907, -66.4161)]),
    f([p(131.8461, 116.4907, -66.4161), p(131.8461, -116.4907, -66.4161), p(-131.8461, -116.4907, -66.4161), p(-131.8461, 116.4907, -66.4161)]),
    f([p(115.6249, 116.4907, -66.4161), p(115.6249, -116.4907, -66.4161), p(-142.6847, -116.4907, -66.4161), p(-142.6847, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-146.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-131.8461, 116.4907, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -13.9161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-61.1354, 116.4907, -29.2930)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-146.4907, -116.4907, -66.4161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-131.8461, -116.4907, -29.2930), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -13.9161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-61.1354, -116.4907, -29.2930), p(-46.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-46.4907, -116.4907, -66.4161), p(-46.4907, 116.4907, -66.4161)]),
    f([p(77.3566, 116.4907, -66.4161), p(77.3566, -116.4907, -66.4161), p(-50.2968, -116.4907, -66.4161), p(-50.2968, 116.4907, -66.4161)]),
    f([p(61.1354, 116.4907, -66.4161), p(61.1354, -116.4907, -66.4161), p(-61.1354, -116.4907, -66.4161), p(-61.1354, 116.4907, -66.4161)]),
    f([p(50.2968, 116.4907, -66.4161), p(50.2968, -116.4907, -66.4161), p(-77.3566, -116.4907, -66.4161), p(-77.3566, 116.4907, -66.4161)]),
    f([p(46.4907, 116.4907, -66.4161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(61.1354, 116.4907, -29.2930), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 116.4907, -13.9161), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(131.8461, 116.4907, -29.2930), p(46.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
];
pub static CREEP_SHIFT_RIGHT: GaitTable<4> = GaitTable {
    frames: &CREEP_SHIFT_RIGHT_FRAMES,
    step_duration_ms: 20,
    entry: 22,
};

#[rustfmt::skip]
static ROTATE_X_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 121.4770, -56.7850), p(96.4907, -110.7425, -75.6128), p(-96.4907, -110.7425, -75.6128), p(-96.4907, 121.4770, -56.7850)]),
    f([p(96.4907, 125.2942, -47.7762), p(96.4907, -104.9343, -83.4865), p(-96.4907, -104.9343, -83.4865), p(-96.4907, 125.2942, -47.7762)]),
    f([p(96.4907, 127.8497, -40.4433), p(96.4907, -99.9256, -89.4207), p(-96.4907, -99.9256, -89.4207), p(-96.4907, 127.8497, -40.4433)]),
    f([p(96.4907, 129.2649, -35.6622), p(96.4907, -96.5321, -93.0739), p(-96.4907, -96.5321, -93.0739), p(-96.4907, 129.2649, -35.6622)]),
    f([p(96.4907, 129.7112, -34.0030), p(96.4907, -95.3317, -94.3031), p(-96.4907, -95.3317, -94.3031), p(-96.4907, 129.7112, -34.0030)]),
    f([p(96.4907, 129.2649, -35.6622), p(96.4907, -96.5321, -93.0739), p(-96.4907, -96.5321, -93.0739), p(-96.4907, 129.2649, -35.6622)]),
    f([p(96.4907, 127.8497, -40.4433), p(96.4907, -99.9256, -89.4207), p(-96.4907, -99.9256, -89.4207), p(-96.4907, 127.8497, -40.4433)]),
    f([p(96.4907, 125.2942, -47.7762), p(96.4907, -104.9343, -83.4865), p(-96.4907, -104.9343, -83.4865), p(-96.4907, 125.2942, -47.7762)]),
    f([p(96.4907, 121.4770, -56.7850), p(96.4907, -110.7425, -75.6128), p(-96.4907, -110.7425, -75.6128), p(-96.4907, 121.4770, -56.7850)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(96.4907, 110.7425, -75.6128), p(96.4907, -121.4770, -56.7850), p(-96.4907, -121.4770, -56.7850), p(-96.4907, 110.7425, -75.6128)]),
    f([p(96.4907, 104.9343, -83.4865), p(96.4907, -125.2942, -47.7762), p(-96.4907, -125.2942, -47.7762), p(-96.4907, 104.9343, -83.4865)]),
    f([p(96.4907, 99.9256, -89.4207), p(96.4907, -127.8497, -40.4433), p(-96.4907, -127.8497, -40.4433), p(-96.4907, 99.9256, -89.4207)]),
    f([p(96.4907, 96.5321, -93.0739), p(96.4907, -129.2649, -35.6622), p(-96.4907, -129.2649, -35.6622), p(-96.4907, 96.5321, -93.0739)]),
    f([p(96.4907, 95.3317, -94.3031), p(96.4907, -129.7112, -34.0030), p(-96.4907, -129.7112, -34.0030), p(-96.4907, 95.3317, -94.3031)]),
    f([p(96.4907, 96.5321, -93.0739), p(96.4907, -129.2649, -35.6622), p(-96.4907, -129.2649, -35.6622), p(-96.4907, 96.5321, -93.0739)]),
    f([p(96.4907, 99.9256, -89.4207), p(96.4907, -127.8497, -40.4433), p(-96.4907, -127.8497, -40.4433), p(-96.4907, 99.9256, -89.4207)]),
    f([p(96.4907, 104.9343, -83.4865), p(96.4907, -125.2942, -47.7762), p(-96.4907, -125.2942, -47.7762), p(-96.4907, 104.9343, -83.4865)]),
    f([p(96.4907, 110.7425, -75.6128), p(96.4907, -121.4770, -56.7850), p(-96.4907, -121.4770, -56.7850), p(-96.4907, 110.7425, -75.6128)]),
];
pub static ROTATE_X: GaitTable<4> = GaitTable {
    frames: &ROTATE_X_FRAMES,
    step_duration_ms: 50,
    entry: 0,
};

#[rustfmt::skip]
static ROTATE_Y_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(90.8079, 116.4907, -73.9965), p(90.8079, -116.4907, -73.9965), p(-101.5424, -116.4907, -58.4013), p(-101.5424, 116.4907, -58.4013)]),
    f([p(85.1706, 116.4907, -80.4210), p(85.1706, -116.4907, -80.4210), p(-105.5305, -116.4907, -50.8417), p(-105.5305, 116.4907, -50.8417)]),
    f([p(80.3726, 116.4907, -85.2163), p(80.3726, -116.4907, -85.2163), p(-108.2966, -116.4907, -44.6477), p(-108.2966, 116.4907, -44.6477)]),
    f([p(77.1489, 116.4907, -88.1454), p(77.1489, -116.4907, -88.1454), p(-109.8816, -116.4907, -40.5907), p(-109.8816, 116.4907, -40.5907)]),
    f([p(76.0131, 116.4907, -89.1267), p(76.0131, -116.4907, -89.1267), p(-110.3927, -116.4907, -39.1794), p(-110.3927, 116.4907, -39.1794)]),
    f([p(77.1489, 116.4907, -88.1454), p(77.1489, -116.4907, -88.1454), p(-109.8816, -116.4907, -40.5907), p(-109.8816, 116.4907, -40.5907)]),
    f([p(80.3726, 116.4907, -85.2163), p(80.3726, -116.4907, -85.2163), p(-108.2966, -116.4907, -44.6477), p(-108.2966, 116.4907, -44.6477)]),
    f([p(85.1706, 116.4907, -80.4210), p(85.1706, -116.4907, -80.4210), p(-105.5305, -116.4907, -50.8417), p(-105.5305, 116.4907, -50.8417)]),
    f([p(90.8079, 116.4907, -73.9965), p(90.8079, -116.4907, -73.9965), p(-101.5424, -116.4907, -58.4013), p(-101.5424, 116.4907, -58.4013)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(101.5424, 116.4907, -58.4013), p(101.5424, -116.4907, -58.4013), p(-90.8079, -116.4907, -73.9965), p(-90.8079, 116.4907, -73.9965)]),
    f([p(105.5305, 116.4907, -50.8417), p(105.5305, -116.4907, -50.8417), p(-85.1706, -116.4907, -80.4210), p(-85.1706, 116.4907, -80.4210)]),
    f([p(108.2966, 116.4907, -44.6477), p(108.2966, -116.4907, -44.6477), p(-80.3726, -116.4907, -85.2163), p(-80.3726, 116.4907, -85.2163)]),
    f([p(109.8816, 116.4907, -40.5907), p(109.8816, -116.4907, -40.5907), p(-77.1489, -116.4907, -88.1454), p(-77.1489, 116.4907, -88.1454)]),
    f([p(110.3927, 116.4907, -39.1794), p(110.3927, -116.4907, -39.1794), p(-76.0131, -116.4907, -89.1267), p(-76.0131, 116.4907, -89.1267)]),
    f([p(109.8816, 116.4907, -40.5907), p(109.8816, -116.4907, -40.5907), p(-77.1489, -116.4907, -88.1454), p(-77.1489, 116.4907, -88.1454)]),
    f([p(108.2966, 116.4907, -44.6477), p(108.2966, -116.4907, -44.6477), p(-80.3726, -116.4907, -85.2163), p(-80.3726, 116.4907, -85.2163)]),
    f([p(105.5305, 116.4907, -50.8417), p(105.5305, -116.4907, -50.8417), p(-85.1706, -116.4907, -80.4210), p(-85.1706, 116.4907, -80.4210)]),
    f([p(101.5424, 116.4907, -58.4013), p(101.5424, -116.4907, -58.4013), p(-90.8079, -116.4907, -73.9965), p(-90.8079, 116.4907, -73.9965)]),
];
pub static ROTATE_Y: GaitTable<4> = GaitTable {
    frames: &ROTATE_Y_FRAMES,
    step_duration_ms: 50,
    entry: 0,
};

#[rustfmt::skip]
static ROTATE_Z_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(86.7613, 123.9074, -66.4161), p(105.5890, -108.3121, -66.4161), p(-86.7613, -123.9074, -66.4161), p(-105.5890, 108.3121, -66.4161)]),
    f([p(77.4954, 129.9039, -66.4161), p(113.2057, -100.3246, -66.4161), p(-77.4954, -129.9039, -66.4161), p(-113.2057, 100.3246, -66.4161)]),
    f([p(69.8459, 134.1720, -66.4161), p(118.8233, -93.6034, -66.4161), p(-69.8459, -134.1720, -66.4161), p(-118.8233, 93.6034, -66.4161)]),
    f([p(64.8094, 136.6759, -66.4161), p(122.2210, -89.1211, -66.4161), p(-64.8094, -136.6759, -66.4161), p(-122.2210, 89.1211, -66.4161)]),
    f([p(63.0529, 137.4951, -66.4161), p(123.3529, -87.5478, -66.4161), p(-63.0529, -137.4951, -66.4161), p(-123.3529, 87.5478, -66.4161)]),
    f([p(64.8094, 136.6759, -66.4161), p(122.2210, -89.1211, -66.4161), p(-64.8094, -136.6759, -66.4161), p(-122.2210, 89.1211, -66.4161)]),
    f([p(69.8459, 134.1720, -66.4161), p(118.8233, -93.6034, -66.4161), p(-69.8459, -134.1720, -66.4161), p(-118.8233, 93.6034, -66.4161)]),
    f([p(77.4954, 129.9039, -66.4161), p(113.2057, -100.3246, -66.4161), p(-77.4954, -129.9039, -66.4161), p(-113.2057, 100.3246, -66.4161)]),
    f([p(86.7613, 123.9074, -66.4161), p(105.5890, -108.3121, -66.4161), p(-86.7613, -123.9074, -66.4161), p(-105.5890, 108.3121, -66.4161)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(105.5890, 108.3121, -66.4161), p(86.7613, -123.9074, -66.4161), p(-105.5890, -108.3121, -66.4161), p(-86.7613, 123.9074, -66.4161)]),
    f([p(113.2057, 100.3246, -66.4161), p(77.4954, -129.9039, -66.4161), p(-113.2057, -100.3246, -66.4161), p(-77.4954, 129.9039, -66.4161)]),
    f([p(118.8233, 93.6034, -66.4161), p(69.8459, -134.1720, -66.4161), p(-118.8233, -93.6034, -66.4161), p(-69.8459, 134.1720, -66.4161)]),
    f([p(122.2210, 89.1211, -66.4161), p(64.8094, -136.6759, -66.4161), p(-122.2210, -89.1211, -66.4161), p(-64.8094, 136.6759, -66.4161)]),
    f([p(123.3529, 87.5478, -66.4161), p(63.0529, -137.4951, -66.4161), p(-123.3529, -87.5478, -66.4161), p(-63.0529, 137.4951, -66.4161)]),
    f([p(122.2210, 89.1211, -66.4161), p(64.8094, -136.6759, -66.4161), p(-122.2210, -89.1211, -66.4161), p(-64.8094, 136.6759, -66.4161)]),
    f([p(118.8233, 93.6034, -66.4161), p(69.8459, -134.1720, -66.4161), p(-118.8233, -93.6034, -66.4161), p(-69.8459, 134.1720, -66.4161)]),
    f([p(113.2057, 100.3246, -66.4161), p(77.4954, -129.9039, -66.4161), p(-113.2057, -100.3246, -66.4161), p(-77.4954, 129.9039, -66.4161)]),
    f([p(105.5890, 108.3121, -66.4161), p(86.7613, -123.9074, -66.4161), p(-105.5890, -108.3121, -66.4161), p(-86.7613, 123.9074, -66.4161)]),
];
pub static ROTATE_Z: GaitTable<4> = GaitTable {
    frames: &ROTATE_Z_FRAMES,
    step_duration_ms: 50,
    entry: 0,
};

#[rustfmt::skip]
static TWIST_FRAMES: [Locations<4>; 20] = [
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(92.3188, 121.8149, -62.6898), p(100.4480, -110.9097, -70.0064), p(-92.4159, -117.6443, -70.0770), p(-100.5451, 115.0804, -62.7603)]),
    f([p(87.9428, 126.8703, -58.8357), p(104.1805, -105.0845, -73.4528), p(-88.3309, -118.5433, -73.7348), p(-104.5686, 113.4116, -59.1176)]),
    f([p(83.3737, 131.6457, -54.8625), p(107.6788, -99.0287, -76.7480), p(-84.2455, -119.1908, -77.3816), p(-108.5506, 111.4836, -55.4962)]),
    f([p(78.6227, 136.1307, -50.7795), p(110.9338, -92.7562, -79.8852), p(-80.1696, -119.5905, -81.0099), p(-112.4807, 109.2964, -51.9042)]),
    f([p(73.7017, 140.3158, -46.5960), p(113.9369, -86.2820, -82.8581), p(-76.1128, -119.7469, -84.6119), p(-116.3480, 106.8509, -48.3498)]),
    f([p(78.6227, 136.1307, -50.7795), p(110.9338, -92.7562, -79.8852), p(-80.1696, -119.5905, -81.0099), p(-112.4807, 109.2964, -51.9042)]),
    f([p(83.3737, 131.6457, -54.8625), p(107.6788, -99.0287, -76.7480), p(-84.2455, -119.1908, -77.3816), p(-108.5506, 111.4836, -55.4962)]),
    f([p(87.9428, 126.8703, -58.8357), p(104.1805, -105.0845, -73.4528), p(-88.3309, -118.5433, -73.7348), p(-104.5686, 113.4116, -59.1176)]),
    f([p(92.3188, 121.8149, -62.6898), p(100.4480, -110.9097, -70.0064), p(-92.4159, -117.6443, -70.0770), p(-100.5451, 115.0804, -62.7603)]),
    f([p(96.4907, 116.4907, -66.4161), p(96.4907, -116.4907, -66.4161), p(-96.4907, -116.4907, -66.4161), p(-96.4907, 116.4907, -66.4161)]),
    f([p(100.5451, 115.0804, -62.7603), p(92.4159, -117.6443, -70.0770), p(-100.4480, -110.9097, -70.0064), p(-92.3188, 121.8149, -62.6898)]),
    f([p(104.5686, 113.4116, -59.1176), p(88.3309, -118.5433, -73.7348), p(-104.1805, -105.0845, -73.4528), p(-87.9428, 126.8703, -58.8357)]),
    f([p(108.5506, 111.4836, -55.4962), p(84.2455, -119.1908, -77.3816), p(-107.6788, -99.0287, -76.7480), p(-83.3737, 131.6457, -54.8625)]),
    f([p(112.4807, 109.2964, -51.9042), p(80.1696, -119.5905, -81.0099), p(-110.9338, -92.7562, -79.8852), p(-78.6227, 136.1307, -50.7795)]),
    f([p(116.3480, 106.8509, -48.3498), p(76.1128, -119.7469, -84.6119), p(-113.9369, -86.2820, -82.8581), p(-73.7017, 140.3158, -46.5960)]),
    f([p(112.4807, 109.2964, -51.9042), p(80.1696, -119.5905, -81.0099), p(-110.9338, -92.7562, -79.8852), p(-78.6227, 136.1307, -50.7795)]),
    f([p(108.5506, 111.4836, -55.4962), p(84.2455, -119.1908, -77.3816), p(-107.6788, -99.0287, -76.7480), p(-83.3737, 131.6457, -54.8625)]),
    f([p(104.5686, 113.4116, -59.1176), p(88.3309, -118.5433, -73.7348), p(-104.1805, -105.0845, -73.4528), p(-87.9428, 126.8703, -58.8357)]),
    f([p(100.5451, 115.0804, -62.7603), p(92.4159, -117.6443, -70.0770), p(-100.4480, -110.9097, -70.0064), p(-92.3188, 121.8149, -62.6898)]),
];
pub static TWIST: GaitTable<4> = GaitTable {
    frames: &TWIST_FRAMES,
    step_duration_ms: 50,
    entry: 0,
};

#[rustfmt::skip]
static STANDBY_FRAMES: [Locations<4>; 1] = [STANDBY_POSE];
pub static STANDBY: GaitTable<4> = GaitTable {
    frames: &STANDBY_FRAMES,
    step_duration_ms: 20,
    entry: 0,
};

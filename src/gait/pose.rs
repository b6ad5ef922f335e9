//! Whole-body pose transform.
//!
//! Applies the active roll/pitch/yaw rotation plus translation offset to a
//! base set of foot positions, pivoting each leg around its own mount point.
//! Stateless apart from the currently-active [`BodyPose`].
use core::f32::consts::PI;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::gait::params::BodyPose;
use crate::kinematics::{Locations, Point3D};

const DEG_TO_RAD: f32 = PI / 180.0;

fn rotate_x(p: Point3D, deg: f32) -> Point3D {
    let rad = deg * DEG_TO_RAD;
    let (sin, cos) = (rad.sin(), rad.cos());
    Point3D::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

fn rotate_y(p: Point3D, deg: f32) -> Point3D {
    let rad = deg * DEG_TO_RAD;
    let (sin, cos) = (rad.sin(), rad.cos());
    Point3D::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

fn rotate_z(p: Point3D, deg: f32) -> Point3D {
    let rad = deg * DEG_TO_RAD;
    let (sin, cos) = (rad.sin(), rad.cos());
    Point3D::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Holds the active body pose and applies it to foot position sets.
/// The mount points are fixed per chassis and passed in at construction.
#[derive(Debug)]
pub struct PoseController<const N: usize> {
    mounts: [Point3D; N],
    pose: BodyPose,
}

impl<const N: usize> PoseController<N> {
    pub fn new(mounts: [Point3D; N]) -> Self {
        Self {
            mounts,
            pose: BodyPose::default(),
        }
    }

    pub fn set_pose(&mut self, pose: BodyPose) {
        self.pose = pose;
    }

    pub fn pose(&self) -> &BodyPose {
        &self.pose
    }

    /// Transform a base position set by the active pose. Identity poses
    /// return the input unchanged.
    pub fn apply(&self, base: &Locations<N>) -> Locations<N> {
        self.apply_pose(base, &self.pose)
    }

    /// Transform by an explicit pose, ignoring the active one. Used for
    /// temporary overlays such as the walk-mode pitch.
    pub fn apply_pose(&self, base: &Locations<N>, pose: &BodyPose) -> Locations<N> {
        if pose.is_identity() {
            return *base;
        }

        let mut out = *base;
        for (i, p) in out.0.iter_mut().enumerate() {
            let mount = self.mounts[i];
            // Yaw, then pitch, then roll, each around the leg's own mount.
            // Forward is +Y, so pitch tilts about X and roll about Y.
            let relative = *p - mount;
            let rotated = rotate_y(rotate_x(rotate_z(relative, pose.yaw), pose.pitch), pose.roll);
            *p = rotated + Point3D::new(pose.x, pose.y, pose.z) + mount;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounts() -> [Point3D; 4] {
        [
            Point3D::new(25.0, 45.0, 0.0),
            Point3D::new(25.0, -45.0, 0.0),
            Point3D::new(-25.0, -45.0, 0.0),
            Point3D::new(-25.0, 45.0, 0.0),
        ]
    }

    fn base() -> Locations<4> {
        Locations::new([
            Point3D::new(96.0, 116.0, -66.0),
            Point3D::new(96.0, -116.0, -66.0),
            Point3D::new(-96.0, -116.0, -66.0),
            Point3D::new(-96.0, 116.0, -66.0),
        ])
    }

    #[test]
    fn identity_pose_returns_input_unchanged() {
        let controller = PoseController::new(mounts());
        let input = base();
        assert_eq!(controller.apply(&input), input);
    }

    #[test]
    fn z_offset_shifts_every_leg() {
        let mut controller = PoseController::new(mounts());
        controller.set_pose(BodyPose::new(0.0, 0.0, 0.0, 0.0, 0.0, 10.0));
        let out = controller.apply(&base());
        for (out_p, in_p) in out.iter().zip(base().iter()) {
            assert!((out_p.z - (in_p.z + 10.0)).abs() < 1e-5);
            assert!((out_p.x - in_p.x).abs() < 1e-5);
            assert!((out_p.y - in_p.y).abs() < 1e-5);
        }
    }

    #[test]
    fn yaw_rotates_around_each_mount() {
        let mut controller = PoseController::new(mounts());
        controller.set_pose(BodyPose::new(0.0, 0.0, 30.0, 0.0, 0.0, 0.0));
        let out = controller.apply(&base());
        // distance from each mount is preserved by a pure rotation
        for (i, (out_p, in_p)) in out.iter().zip(base().iter()).enumerate() {
            let m = mounts()[i];
            assert!((out_p.distance_sq(&m) - in_p.distance_sq(&m)).abs() < 1e-2);
            assert_ne!(out_p, in_p);
        }
    }

    #[test]
    fn roll_tilts_left_and_right_sides_oppositely() {
        let mut controller = PoseController::new(mounts());
        controller.set_pose(BodyPose::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        let out = controller.apply(&base());
        // roll rotates about the forward (Y) axis: the right side (+x)
        // drops while the left side rises
        assert!(out[0].z < base()[0].z);
        assert!(out[3].z > base()[3].z);
    }

    #[test]
    fn pitch_tilts_front_and_back_oppositely() {
        let mut controller = PoseController::new(mounts());
        controller.set_pose(BodyPose::new(0.0, 10.0, 0.0, 0.0, 0.0, 0.0));
        let out = controller.apply(&base());
        // pitch rotates about the lateral (X) axis: the front (+y) rises
        assert!(out[0].z > base()[0].z);
        assert!(out[1].z < base()[1].z);
    }
}

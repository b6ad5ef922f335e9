//! Geometry primitives: 3D points and per-leg position sets.
//!
//! All coordinates are millimeters in the chassis frame: X right, Y forward,
//! Z up, origin at the body center. Equality on [`Point3D`] is exact on
//! purpose: the leg layer uses it to skip redundant servo writes, and the
//! realtime gait uses it to detect an exactly-zero velocity.
use core::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3D {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const ZERO: Point3D = Point3D::new(0.0, 0.0, 0.0);

    /// Squared distance to another point. Used by the alignment planner to
    /// ignore legs already in place without paying for a sqrt.
    pub fn distance_sq(&self, other: &Point3D) -> f32 {
        let d = *other - *self;
        d.x * d.x + d.y * d.y + d.z * d.z
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl AddAssign for Point3D {
    fn add_assign(&mut self, rhs: Point3D) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Point3D {
    fn sub_assign(&mut self, rhs: Point3D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Point3D {
    type Output = Point3D;

    fn mul(self, rhs: f32) -> Point3D {
        Point3D::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Whole-chassis foot positions, one point per leg in the canonical leg
/// order. The order is part of the robot's public contract: it must match
/// the servo channel map and every precomputed table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Locations<const N: usize>(pub [Point3D; N]);

impl<const N: usize> Locations<N> {
    pub const fn new(points: [Point3D; N]) -> Self {
        Self(points)
    }

    pub const fn filled(point: Point3D) -> Self {
        Self([point; N])
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Point3D> {
        self.0.iter()
    }

    /// Lowest foot height in the set. The grounding phase pulls every leg
    /// down to this level.
    pub fn min_z(&self) -> f32 {
        let mut min = self.0[0].z;
        for p in &self.0[1..] {
            min = min.min(p.z);
        }
        min
    }

    pub fn max_z(&self) -> f32 {
        let mut max = self.0[0].z;
        for p in &self.0[1..] {
            max = max.max(p.z);
        }
        max
    }

    /// Componentwise linear interpolation toward `target`.
    pub fn lerp_toward(&mut self, target: &Locations<N>, ratio: f32) {
        for (p, t) in self.0.iter_mut().zip(target.0.iter()) {
            *p += (*t - *p) * ratio;
        }
    }
}

impl<const N: usize> Default for Locations<N> {
    fn default() -> Self {
        Self([Point3D::ZERO; N])
    }
}

impl<const N: usize> Index<usize> for Locations<N> {
    type Output = Point3D;

    fn index(&self, index: usize) -> &Point3D {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Locations<N> {
    fn index_mut(&mut self, index: usize) -> &mut Point3D {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_arithmetic() {
        let a = Point3D::new(1.0, -2.0, 3.0);
        let b = Point3D::new(0.5, 0.5, -1.0);
        assert_eq!(a + b, Point3D::new(1.5, -1.5, 2.0));
        assert_eq!(a - b, Point3D::new(0.5, -2.5, 4.0));
        assert_eq!(a * 2.0, Point3D::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn exact_equality_is_bitwise() {
        let a = Point3D::new(1.0 + f32::EPSILON, 0.0, 0.0);
        let b = Point3D::new(1.0, 0.0, 0.0);
        // one ULP apart must not compare equal; the redundant-write
        // suppression in the leg layer relies on exact comparison
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn min_max_z() {
        let locs = Locations::new([
            Point3D::new(0.0, 0.0, -60.0),
            Point3D::new(0.0, 0.0, -40.0),
            Point3D::new(0.0, 0.0, -65.0),
            Point3D::new(0.0, 0.0, -60.0),
        ]);
        assert_eq!(locs.min_z(), -65.0);
        assert_eq!(locs.max_z(), -40.0);
    }

    #[test]
    fn lerp_full_ratio_lands_on_target() {
        let mut a: Locations<2> = Locations::filled(Point3D::ZERO);
        let b = Locations::new([Point3D::new(10.0, 0.0, 0.0), Point3D::new(0.0, 4.0, 2.0)]);
        a.lerp_toward(&b, 1.0);
        assert_eq!(a, b);
    }
}

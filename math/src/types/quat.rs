use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

use super::{Vector3, EPS};
use crate::angle::degrees_to_radians;

#[cfg(test)]
mod test_quat {
    use super::{Quat, Vector3};

    fn get_quat() -> Quat {
        Quat::from_axis_degrees(Vector3::z(), 90.0)
    }

    #[test]
    fn identity_law() {
        let q = get_quat();
        let p = Quat::identity() * q;
        assert!(p.approx_equal(q));
        let p = q * Quat::identity();
        assert!(p.approx_equal(q));
    }

    #[test]
    fn rotate_vector() {
        let q = get_quat();
        assert!((q * Vector3::x()).approx_equal(Vector3::y()));
    }

    #[test]
    fn rotate_forward_about_x() {
        let q = Quat::from_axis_degrees(Vector3::x(), 90.0);
        assert!((q * Vector3::z()).approx_equal(-Vector3::y()));
    }

    #[test]
    fn mul_not_commutative() {
        let q1 = Quat::from_axis_degrees(Vector3::x(), 90.0);
        let q2 = Quat::from_axis_degrees(Vector3::y(), 90.0);
        assert!(!(q1 * q2).approx_equal(q2 * q1));
    }

    #[test]
    fn compose_rotations() {
        let q1 = Quat::from_axis_degrees(Vector3::z(), 45.0);
        let q2 = q1 * q1;
        assert!((q2 * Vector3::x()).approx_equal(Vector3::y()));
    }

    #[test]
    fn norm_unit_length() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0).norm();
        assert!((q.mag() - 1.0).abs() < super::EPS);
    }

    #[test]
    fn norm_zero_is_noop() {
        let q = Quat::new(0.0, 0.0, 0.0, 0.0).norm();
        assert!(q.is_valid());
        assert!(q.mag() == 0.0);
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Quat> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Mul<Vector3> for Quat {
    type Output = Vector3;
    /// Closed-form expansion of the sandwich product q * v * q⁻¹. The
    /// evaluation and summation order is fixed; the three terms must be
    /// added as scaled_q + scaled_v + scaled_cross.
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        let qv = Vector3::new(self.x, self.y, self.z);
        let q_dot_v = qv * rhs;
        let q_dot_q = qv * qv;
        (2.0 * q_dot_v) * qv + (self.w * self.w - q_dot_q) * rhs + (2.0 * self.w) * qv.cross(rhs)
    }
}

impl Quat {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// Builds a rotation of `degrees` about `axis` and normalizes the
    /// result, so the axis may be of arbitrary non-zero length.
    #[inline]
    pub fn from_axis_degrees(axis: Vector3, degrees: f32) -> Self {
        let rad = degrees_to_radians(degrees);
        let fac = (rad / 2.0).sin();
        Self {
            x: axis.x * fac,
            y: axis.y * fac,
            z: axis.z * fac,
            w: (rad / 2.0).cos(),
        }
        .norm()
    }

    #[inline]
    pub fn mag_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn mag(self) -> f32 {
        self.mag_squared().sqrt()
    }

    /// Normalizing a zero quaternion returns it unchanged, the same policy
    /// as `Vector3::norm`. The length is computed from the input.
    #[inline]
    pub fn norm(self) -> Self {
        let len = self.mag();
        if len == 0.0 {
            return self;
        }
        Self {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
            w: self.w / len,
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        (self.x - rhs.x).abs() < EPS
            && (self.y - rhs.y).abs() < EPS
            && (self.z - rhs.z).abs() < EPS
            && (self.w - rhs.w).abs() < EPS
    }
}

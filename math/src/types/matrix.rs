use bytemuck::{Pod, Zeroable};
use std::ops::Mul;

use super::{Quat, Vector3, Vector4};
use crate::angle::degrees_to_radians;

#[cfg(test)]
mod test_matrix_4 {
    use super::{Matrix4, Vector3, Vector4};

    fn get_matrix_4() -> Matrix4 {
        Matrix4 {
            i: Vector4::new(1.0, 2.0, 3.0, 4.0),
            j: Vector4::new(0.0, 5.0, 6.0, 7.0),
            k: Vector4::new(0.0, 0.0, 8.0, 9.0),
            l: Vector4::new(0.0, 0.0, 0.0, 10.0),
        }
    }

    fn get_matrix_4_transposed() -> Matrix4 {
        Matrix4 {
            i: Vector4::new(1.0, 0.0, 0.0, 0.0),
            j: Vector4::new(2.0, 5.0, 0.0, 0.0),
            k: Vector4::new(3.0, 6.0, 8.0, 0.0),
            l: Vector4::new(4.0, 7.0, 9.0, 10.0),
        }
    }

    #[test]
    fn mul() {
        let m = get_matrix_4();
        assert!(m.approx_equal(m * Matrix4::identity()));
        assert!(m.approx_equal(Matrix4::identity() * m));
    }

    #[test]
    fn transpose() {
        let m = get_matrix_4();
        let m_t = get_matrix_4_transposed();
        assert!(m.transpose().approx_equal(m_t))
    }

    #[test]
    fn inverse() {
        let m = get_matrix_4();
        let m_inv = m.inv().unwrap();
        assert!(Matrix4::identity().approx_equal(m * m_inv));
        assert!(Matrix4::identity().approx_equal(m_inv * m));
    }

    #[test]
    fn inverse_singular() {
        assert!(Matrix4::fill(0.0).inv().is_none());
        assert!(Matrix4::fill(1.0).inv().is_none());
    }

    #[test]
    fn scaling_pair_is_identity() {
        let m = Matrix4::scaling(Vector3::fill(2.0)) * Matrix4::scaling(Vector3::fill(0.5));
        assert!(m.approx_equal(Matrix4::identity()));
    }
}


/// Row-major 4x4 matrix; `i` through `l` are the rows. Vectors transform by
/// right-multiplication, `v' = v * M`, so the translation lives in row `l`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    /// Row-vector transform: `out[c] = Σ_r m[r][c] * v[r]`. Intentionally
    /// asymmetric to the matrix-chaining multiply below.
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k + rhs.w * self.l
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: rhs * self.i,
            j: rhs * self.j,
            k: rhs * self.k,
            l: rhs * self.l,
        }
    }
}

impl Matrix4 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn fill(value: f32) -> Self {
        Self {
            i: Vector4::fill(value),
            j: Vector4::fill(value),
            k: Vector4::fill(value),
            l: Vector4::fill(value),
        }
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector4 {
                x: self.i.x,
                y: self.j.x,
                z: self.k.x,
                w: self.l.x,
            },
            j: Vector4 {
                x: self.i.y,
                y: self.j.y,
                z: self.k.y,
                w: self.l.y,
            },
            k: Vector4 {
                x: self.i.z,
                y: self.j.z,
                z: self.k.z,
                w: self.l.z,
            },
            l: Vector4 {
                x: self.i.w,
                y: self.j.w,
                z: self.k.w,
                w: self.l.w,
            },
        }
    }

    #[inline]
    pub fn translation(v: Vector3) -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::point(v),
        }
    }

    #[inline]
    pub fn rotation_x(degrees: f32) -> Self {
        let rad = degrees_to_radians(degrees);
        let st = rad.sin();
        let ct = rad.cos();
        Self {
            i: Vector4::x(),
            j: Vector4::new(0.0, ct, st, 0.0),
            k: Vector4::new(0.0, -st, ct, 0.0),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn rotation_y(degrees: f32) -> Self {
        let rad = degrees_to_radians(degrees);
        let st = rad.sin();
        let ct = rad.cos();
        Self {
            i: Vector4::new(ct, 0.0, -st, 0.0),
            j: Vector4::y(),
            k: Vector4::new(st, 0.0, ct, 0.0),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn rotation_z(degrees: f32) -> Self {
        let rad = degrees_to_radians(degrees);
        let st = rad.sin();
        let ct = rad.cos();
        Self {
            i: Vector4::new(ct, st, 0.0, 0.0),
            j: Vector4::new(-st, ct, 0.0, 0.0),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }

    /// Rodrigues' rotation about `axis`, which may be of arbitrary non-zero
    /// length; it is normalized here.
    #[inline]
    pub fn rotation_axis(axis: Vector3, degrees: f32) -> Self {
        let rad = degrees_to_radians(degrees);
        let a = axis.norm();
        let (x, y, z) = (a.x, a.y, a.z);
        let c = rad.cos();
        let s = rad.sin();
        let nc = 1.0 - c;
        let (xy, yz, zx) = (x * y, y * z, z * x);
        let (xs, ys, zs) = (x * s, y * s, z * s);
        Self {
            i: Vector4::new(x * x * nc + c, xy * nc + zs, zx * nc - ys, 0.0),
            j: Vector4::new(xy * nc - zs, y * y * nc + c, yz * nc + xs, 0.0),
            k: Vector4::new(zx * nc + ys, yz * nc - xs, z * z * nc + c, 0.0),
            l: Vector4::w(),
        }
    }

    /// Quaternion to rotation matrix using the s = 2/|q|² form. A zero-norm
    /// quaternion sets s = 0 and yields the identity instead of dividing by
    /// zero.
    #[inline]
    pub fn rotation_quat(q: Quat) -> Self {
        let n = q.mag_squared();
        let s = if n == 0.0 { 0.0 } else { 2.0 / n };
        let (wx, wy, wz) = (s * q.w * q.x, s * q.w * q.y, s * q.w * q.z);
        let (xx, xy, xz) = (s * q.x * q.x, s * q.x * q.y, s * q.x * q.z);
        let (yy, yz, zz) = (s * q.y * q.y, s * q.y * q.z, s * q.z * q.z);
        Self {
            i: Vector4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            j: Vector4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            k: Vector4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn scaling(v: Vector3) -> Self {
        Self {
            i: Vector4::new(v.x, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, v.y, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, v.z, 0.0),
            l: Vector4::w(),
        }
    }

    /// Left-handed view matrix. The basis order is load-bearing: `right`
    /// comes from up × look, not look × up, or the handedness flips.
    #[inline]
    pub fn look_at_lh(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let look = (target - eye).norm();
        let right = up.cross(look).norm();
        let true_up = look.cross(right).norm();
        let neg_eye = -eye;
        Self {
            i: Vector4::new(right.x, true_up.x, look.x, 0.0),
            j: Vector4::new(right.y, true_up.y, look.y, 0.0),
            k: Vector4::new(right.z, true_up.z, look.z, 0.0),
            l: Vector4::new(neg_eye * right, neg_eye * true_up, neg_eye * look, 1.0),
        }
    }

    /// General cofactor-expansion inverse. Returns `None` when the
    /// determinant is exactly zero.
    pub fn inv(self) -> Option<Self> {
        let m: [f32; 16] = bytemuck::cast(self);
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14]
            + m[13] * m[6] * m[11]
            - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14]
            - m[12] * m[6] * m[11]
            + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13]
            + m[12] * m[5] * m[11]
            - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13]
            - m[12] * m[5] * m[10]
            + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14]
            - m[13] * m[2] * m[11]
            + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14]
            + m[12] * m[2] * m[11]
            - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13]
            - m[12] * m[1] * m[11]
            + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13]
            + m[12] * m[1] * m[10]
            - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14]
            + m[13] * m[2] * m[7]
            - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14]
            - m[12] * m[2] * m[7]
            + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13]
            + m[12] * m[1] * m[7]
            - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13]
            - m[12] * m[1] * m[6]
            + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10]
            - m[9] * m[2] * m[7]
            + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10]
            + m[8] * m[2] * m[7]
            - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9]
            - m[8] * m[1] * m[7]
            + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9]
            + m[8] * m[1] * m[6]
            - m[8] * m[2] * m[5];

        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        if det == 0.0 {
            return None;
        }
        let det = det.recip();
        for value in inv.iter_mut() {
            *value *= det;
        }

        Some(bytemuck::cast(inv))
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid() && self.l.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i)
            && self.j.approx_equal(rhs.j)
            && self.k.approx_equal(rhs.k)
            && self.l.approx_equal(rhs.l)
    }
}

//! Quaternions and versors for rigid rotation of mesh points.
//!
//! A [`Quaternion`] keeps its scalar part `s` apart from its vector part
//! `(x, y, z)`. Points are embedded as point-quaternions (`s = 0`) and rotated
//! with the sandwich product `q * p * q⁻¹`.

use core::ops::{Add, Mul};

use crate::error::SkirtError;
use crate::float::Float;
use crate::vec::Vec3;

/// Four-component quaternion: scalar part plus vector part.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion<F: Float> {
    s: F,
    v: Vec3<F>,
}

impl<F: Float> Quaternion<F> {
    /// Build from raw components.
    pub fn new(s: F, x: F, y: F, z: F) -> Self {
        Quaternion { s, v: Vec3::new(x, y, z) }
    }

    /// Embed a 3D point: scalar part 0, vector part = point.
    pub fn point(p: Vec3<F>) -> Self {
        Quaternion { s: F::zero(), v: p }
    }

    /// Versor for a rotation of `angle_deg` degrees about `axis`.
    ///
    /// The axis is normalized first. A zero-length or non-finite axis has no
    /// rotation and yields [`SkirtError::InvalidAxis`].
    pub fn versor(angle_deg: F, axis: Vec3<F>) -> Result<Self, SkirtError> {
        let unit = axis.try_normalize().ok_or(SkirtError::InvalidAxis)?;
        Ok(Self::from_unit_axis(angle_deg, unit))
    }

    /// Versor for a rotation of `angle_deg` degrees about an axis that is
    /// already unit length. The axis is not checked.
    pub fn from_unit_axis(angle_deg: F, unit_axis: Vec3<F>) -> Self {
        let half = angle_deg.to_radians() / F::two();
        Quaternion { s: half.cos(), v: unit_axis.scale(half.sin()) }
    }

    pub fn s(&self) -> F { self.s }
    pub fn x(&self) -> F { self.v.x }
    pub fn y(&self) -> F { self.v.y }
    pub fn z(&self) -> F { self.v.z }

    /// The vector part.
    pub fn vector(&self) -> Vec3<F> { self.v }

    /// Conjugate. Only a true inverse for unit quaternions, which every
    /// versor built here is.
    pub fn inverse(&self) -> Self {
        Quaternion { s: self.s, v: -self.v }
    }

    /// Rescales the vector part to unit length and leaves `s` untouched.
    ///
    /// This is not unit-quaternion normalization: the result of normalizing a
    /// quaternion with a nonzero scalar part is not unit length. A zero vector
    /// part is returned unchanged.
    pub fn normalize(self) -> Self {
        match self.v.try_normalize() {
            Some(v) => Quaternion { s: self.s, v },
            None => self,
        }
    }

    /// Rotate `p` by this versor with the sandwich product `q * p * q⁻¹`.
    pub fn rotate(&self, p: Vec3<F>) -> Vec3<F> {
        (*self * Quaternion::point(p) * self.inverse()).v
    }
}

impl<F: Float> Add for Quaternion<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Quaternion { s: self.s + rhs.s, v: self.v + rhs.v }
    }
}

/// Hamilton product.
impl<F: Float> Mul for Quaternion<F> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Quaternion {
            s: a.s * b.s - a.v.x * b.v.x - a.v.y * b.v.y - a.v.z * b.v.z,
            v: Vec3 {
                x: a.s * b.v.x + a.v.x * b.s + a.v.y * b.v.z - a.v.z * b.v.y,
                y: a.s * b.v.y - a.v.x * b.v.z + a.v.y * b.s + a.v.z * b.v.x,
                z: a.s * b.v.z + a.v.x * b.v.y - a.v.y * b.v.x + a.v.z * b.s,
            },
        }
    }
}

/// Spherical interpolation between two versors, `step` in `[0, 1]`.
///
/// Unverified utility, not used by the animation. The interior angle comes
/// from the vector parts alone, and the result carries a zero scalar part.
/// Parallel vector parts make the angle zero and the result non-finite.
pub fn slerp<F: Float>(q1: &Quaternion<F>, q2: &Quaternion<F>, step: F) -> Quaternion<F> {
    let theta = q1.v.dot(q2.v).acos();
    let sin_theta = theta.sin();
    let c1 = ((F::one() - step) * theta).sin() / sin_theta;
    let c2 = (step * theta).sin() / sin_theta;
    Quaternion::point(q1.v.scale(c1) + q2.v.scale(c2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3<f64>, b: Vec3<f64>, eps: f64) -> bool {
        (a - b).length() < eps
    }

    #[test]
    fn point_has_zero_scalar() {
        let p = Quaternion::point(Vec3::new(1.0f32, 2.0, 3.0));
        assert_eq!(p.s(), 0.0);
        assert_eq!((p.x(), p.y(), p.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn versor_is_unit_length() {
        let q = Quaternion::versor(73.0f64, Vec3::new(1.0, 2.0, -2.0)).unwrap();
        let n = q.s() * q.s() + q.vector().length_sq();
        assert!((n - 1.0).abs() < 1e-12);
    }

    #[test]
    fn versor_rejects_zero_axis() {
        let r = Quaternion::versor(10.0f32, Vec3::zero());
        assert_eq!(r, Err(SkirtError::InvalidAxis));
    }

    #[test]
    fn quarter_turn_about_z() {
        let q = Quaternion::versor(90.0f64, Vec3::unit_z()).unwrap();
        let r = q.rotate(Vec3::unit_x());
        assert!(close(r, Vec3::unit_y(), 1e-12), "got {:?}", r);
    }

    #[test]
    fn zero_angle_leaves_point_exact() {
        let q = Quaternion::from_unit_axis(0.0f32, Vec3::unit_x());
        let p = Vec3::new(0.6f32, -0.5, 0.25);
        assert_eq!(q.rotate(p), p);
    }

    #[test]
    fn inverse_negates_vector_part() {
        let q = Quaternion::new(0.5f32, 0.1, -0.2, 0.3);
        let inv = q.inverse();
        assert_eq!((inv.s(), inv.x(), inv.y(), inv.z()), (0.5, -0.1, 0.2, -0.3));
    }

    #[test]
    fn zero_angle_versor_is_product_identity() {
        let one = Quaternion::from_unit_axis(0.0f32, Vec3::unit_z());
        let q = Quaternion::new(1.0f32, 2.0, 3.0, 4.0);
        assert_eq!(one * q, q);
        assert_eq!(q * one, q);
    }

    #[test]
    fn add_is_componentwise() {
        let a = Quaternion::new(1.0f32, 2.0, 3.0, 4.0);
        let b = Quaternion::new(0.5f32, -2.0, 1.0, 0.0);
        assert_eq!(a + b, Quaternion::new(1.5, 0.0, 4.0, 4.0));
    }

    // normalize() only touches the vector part; the scalar keeps its value.
    #[test]
    fn normalize_keeps_scalar_part() {
        let q = Quaternion::new(2.0f32, 0.0, 3.0, 4.0).normalize();
        assert_eq!(q.s(), 2.0);
        assert!((q.vector().length() - 1.0).abs() < 1e-6);
        let norm = q.s() * q.s() + q.vector().length_sq();
        assert!(norm > 1.0, "not a unit quaternion: |q|^2 = {}", norm);
    }

    #[test]
    fn slerp_endpoints_follow_vector_parts() {
        let a = Quaternion::versor(60.0f64, Vec3::unit_x()).unwrap();
        let b = Quaternion::versor(60.0f64, Vec3::unit_y()).unwrap();
        let start = slerp(&a, &b, 0.0);
        let end = slerp(&a, &b, 1.0);
        assert!(close(start.vector(), a.vector(), 1e-12));
        assert!(close(end.vector(), b.vector(), 1e-12));
        assert_eq!(start.s(), 0.0);
    }
}

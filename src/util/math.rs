//! Vector types used for transforms and kinematics.
//!
//! Components are stored as `f64` and narrowed to `f32` only when written.
//! Rotation helpers go through glam's `DMat3`.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::{DMat3, DVec3};

use super::{check_i8, Result};

/// Euler rotation matrix in the engine's convention: yaw about Z, then roll
/// about X, then pitch about Y. Angles in radians.
pub fn euler_matrix(roll: f64, pitch: f64, yaw: f64) -> DMat3 {
    DMat3::from_rotation_y(pitch) * DMat3::from_rotation_x(roll) * DMat3::from_rotation_z(yaw)
}

/// Three named floating-point components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same value on every axis.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// Local up axis after rotating by the given radians.
    pub fn up(roll: f64, pitch: f64, yaw: f64) -> Self {
        (euler_matrix(roll, pitch, yaw) * DVec3::Y).into()
    }

    /// Local forward axis (+Z) after rotating by the given radians.
    pub fn forward(roll: f64, pitch: f64, yaw: f64) -> Self {
        (euler_matrix(roll, pitch, yaw) * DVec3::Z).into()
    }

    /// Local left axis (+X) after rotating by the given radians.
    pub fn left(roll: f64, pitch: f64, yaw: f64) -> Self {
        (euler_matrix(roll, pitch, yaw) * DVec3::X).into()
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(self) -> f64 {
        DVec3::from(self).length()
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).magnitude()
    }

    /// Degrees to radians, per component.
    pub fn to_radians(self) -> Self {
        Self::new(self.x.to_radians(), self.y.to_radians(), self.z.to_radians())
    }

    /// Radians to degrees, per component.
    pub fn to_degrees(self) -> Self {
        Self::new(self.x.to_degrees(), self.y.to_degrees(), self.z.to_degrees())
    }

    /// Sum of the three components.
    #[inline]
    pub fn component_sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Component-wise product.
    #[inline]
    pub fn scaled(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Unpack into positional values.
    #[inline]
    pub fn into_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Components narrowed to the precision they are written at.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }

    /// Approximate equality with an absolute tolerance.
    pub fn abs_diff_eq(self, other: Self, eps: f64) -> bool {
        DVec3::from(self).abs_diff_eq(DVec3::from(other), eps)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<DVec3> for Vector3 {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.into_tuple()
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Two signed 8-bit components (pattern scroll).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2I8 {
    pub x: i8,
    pub y: i8,
}

impl Vector2I8 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Build from wide integers, rejecting anything outside the Int8 range.
    pub fn try_new(x: impl Into<i128>, y: impl Into<i128>) -> Result<Self> {
        Ok(Self::new(check_i8("x", x)?, check_i8("y", y)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_arithmetic_is_by_value() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        let c = a + b;
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(c, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
    }

    #[test]
    fn test_unpack() {
        let (x, y, z) = Vector3::new(4.0, 5.0, 6.0).into();
        assert_eq!((x, y, z), (4.0, 5.0, 6.0));
        let arr: [f64; 3] = Vector3::ONE.into();
        assert_eq!(arr, [1.0; 3]);
    }

    #[test]
    fn test_angle_conversion() {
        let deg = Vector3::new(180.0, 90.0, 0.0);
        let rad = deg.to_radians();
        assert!(rad.abs_diff_eq(Vector3::new(PI, FRAC_PI_2, 0.0), EPS));
        assert!(rad.to_degrees().abs_diff_eq(deg, EPS));
    }

    #[test]
    fn test_direction_constructors() {
        assert!(Vector3::up(0.0, 0.0, 0.0).abs_diff_eq(Vector3::new(0.0, 1.0, 0.0), EPS));
        assert!(Vector3::forward(0.0, 0.0, 0.0).abs_diff_eq(Vector3::new(0.0, 0.0, 1.0), EPS));
        assert!(Vector3::left(0.0, 0.0, 0.0).abs_diff_eq(Vector3::new(1.0, 0.0, 0.0), EPS));

        // Rolling a quarter turn about X tips up onto +Z.
        assert!(Vector3::up(FRAC_PI_2, 0.0, 0.0).abs_diff_eq(Vector3::new(0.0, 0.0, 1.0), EPS));
        // Pitching a quarter turn about Y swings forward onto +X.
        assert!(Vector3::forward(0.0, FRAC_PI_2, 0.0).abs_diff_eq(Vector3::new(1.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn test_magnitude() {
        assert!((Vector3::new(3.0, 4.0, 0.0).magnitude() - 5.0).abs() < EPS);
        assert!((Vector3::ZERO.distance(Vector3::new(0.0, 0.0, 7.0)) - 7.0).abs() < EPS);
    }

    #[test]
    fn test_vector2i8_range() {
        assert_eq!(Vector2I8::try_new(-128, 127).unwrap(), Vector2I8::new(-128, 127));
        assert!(Vector2I8::try_new(0, 200).unwrap_err().is_range());
    }
}

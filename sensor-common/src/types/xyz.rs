use nalgebra::Vector3;

use std::fmt;
use std::ops::{Add, Mul};

pub const N_XYZ_COORDINATES: usize = 3;

/// Three-axis sensor value in device units.
#[derive(Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn from_vector(data: Vector3<f64>) -> Self {
        Self(data)
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }
}

impl fmt::Display for XYZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl From<XYZ> for Vec<f64> {
    fn from(value: XYZ) -> Self {
        value.inner().to_vec()
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Add for XYZ {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static GRAVITY: Lazy<XYZ> = Lazy::new(|| XYZ::new([0.0, 0.0, 9.8]));

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let xyz = XYZ::new(data);
        assert_eq!(xyz.inner(), data);
        assert_eq!((xyz.x(), xyz.y(), xyz.z()), (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add() {
        let result = GRAVITY.clone() + XYZ::new([1.0, -1.0, 0.2]);
        assert_eq!(result.x(), 1.0);
        assert_eq!(result.y(), -1.0);
        assert!((result.z() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_mul() {
        let xyz = XYZ::new([1.0, 2.0, 3.0]);
        let result = xyz * 2.0;
        assert_eq!(result.inner(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_try_from_vec() {
        let xyz = XYZ::try_from(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(xyz.inner(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_try_from_vec_invalid_length() {
        let result = XYZ::try_from(vec![1.0, 2.0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(GRAVITY.to_string(), "(0, 0, 9.8)");
    }
}

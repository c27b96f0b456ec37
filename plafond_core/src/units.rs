//! # Unit Types
//!
//! Lightweight newtype wrappers for the metric quantities the calculator
//! works in. Simple `f64` wrappers rather than a full units library: the
//! domain uses exactly two units (meters and square meters) and JSON
//! serialization stays clean (just numbers).
//!
//! ## Example
//!
//! ```rust
//! use plafond_core::units::{Meters, SquareMeters};
//!
//! let length = Meters(4.0);
//! let width = Meters(2.5);
//! let area: SquareMeters = length * width;
//! assert_eq!(area.value(), 10.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Linear length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMeters(pub f64);

/// Length times length is an area
impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(SquareMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_times_length_is_area() {
        let area = Meters(4.0) * Meters(2.5);
        assert_eq!(area, SquareMeters(10.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let area = SquareMeters(12.5);
        let json = serde_json::to_string(&area).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: SquareMeters = serde_json::from_str(&json).unwrap();
        assert_eq!(area, roundtrip);
    }
}

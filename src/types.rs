//! Strongly-typed numeric primitives for chart layout.
//!
//! Angles are kept as a zero-cost newtype so that layout code never mixes
//! up degrees with raw values or percentages.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Angle in degrees.
///
/// Chart sweeps use the dashboard convention: 0° is at 12 o'clock and
/// angles increase clockwise. The conversion to trigonometric angles
/// happens in one place (`geometry::polar_to_cartesian`), never here.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    /// One full revolution.
    pub const FULL: Angle = Angle(360.0);

    /// Get the raw value in degrees.
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// The sweep from `self` to `other`, in degrees.
    #[inline]
    pub fn sweep_to(self, other: Angle) -> f64 {
        other.0 - self.0
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round a value to one decimal place.
///
/// Used for display percentages only. Angle math always works with the
/// unrounded fraction; feeding rounded percentages back into angles would
/// accumulate error and visibly misalign slice boundaries.
#[inline]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_arithmetic() {
        let a = Angle(90.0);
        let b = Angle(45.0);

        assert_eq!(a + b, Angle(135.0));
        assert_eq!(a - b, Angle(45.0));
    }

    #[test]
    fn angle_add_assign() {
        let mut a = Angle::ZERO;
        a += Angle(120.0);
        a += Angle(240.0);
        assert_eq!(a, Angle::FULL);
    }

    #[test]
    fn angle_sweep() {
        assert_eq!(Angle(30.0).sweep_to(Angle(210.0)), 180.0);
        assert_eq!(Angle(90.0).sweep_to(Angle(90.0)), 0.0);
    }

    #[test]
    fn round_one_decimal() {
        assert_eq!(round_to_tenth(33.333333), 33.3);
        assert_eq!(round_to_tenth(66.666666), 66.7);
        assert_eq!(round_to_tenth(50.0), 50.0);
        assert_eq!(round_to_tenth(0.05), 0.1);
    }
}

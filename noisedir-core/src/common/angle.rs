use super::{deg, rad};

use derive_more::Debug;

/// Angle
///
/// Directions around a source are given by two angles: an elevation `theta` in (-π/2, π/2]
/// (0 is horizontal) and an azimuth `phi` in [0, 2π) (0 is front).
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f64,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π/2
    pub const FRAC_PI_2: Self = Self {
        radian: std::f64::consts::FRAC_PI_2,
    };

    /// An angle of π
    pub const PI: Self = Self {
        radian: std::f64::consts::PI,
    };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f64 {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub fn degree(self) -> f64 {
        self.radian.to_degrees()
    }
}

impl std::ops::Mul<deg> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radian
    }
}

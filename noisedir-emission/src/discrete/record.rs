use std::{cmp::Ordering, fmt};

use getset::CopyGetters;
use noisedir_core::common::Angle;

/// Attenuation of a source measured in one direction.
///
/// Two records are equal when their angles are bit-exactly equal; attenuation is not compared.
#[derive(Clone, Debug, CopyGetters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectivityRecord {
    #[getset(get_copy = "pub")]
    /// Elevation in \[rad\], in (-π/2, π/2]. 0 is horizontal, π/2 is the top.
    theta: f64,
    #[getset(get_copy = "pub")]
    /// Azimuth in \[rad\], in [0, 2π). 0 is the front.
    phi: f64,
    attenuation: Vec<f64>,
}

impl DirectivityRecord {
    /// Creates a new [`DirectivityRecord`] with angles in radian and one attenuation \[dB\] per band.
    #[must_use]
    pub fn new(theta: f64, phi: f64, attenuation: impl Into<Vec<f64>>) -> Self {
        Self {
            theta,
            phi,
            attenuation: attenuation.into(),
        }
    }

    /// Creates a new [`DirectivityRecord`] from [`Angle`]s.
    #[must_use]
    pub fn from_angles(theta: Angle, phi: Angle, attenuation: impl Into<Vec<f64>>) -> Self {
        Self::new(theta.radian(), phi.radian(), attenuation)
    }

    /// Attenuation in \[dB\], one value per frequency band.
    #[must_use]
    pub fn attenuation(&self) -> &[f64] {
        &self.attenuation
    }

    pub(crate) fn silent(theta: f64, phi: f64, bands: usize) -> Self {
        Self::new(theta, phi, vec![0.; bands])
    }

    /// Order by `theta`, then by `phi`.
    pub(crate) fn cmp_theta_phi(&self, theta: f64, phi: f64) -> Ordering {
        self.theta
            .total_cmp(&theta)
            .then_with(|| self.phi.total_cmp(&phi))
    }

    /// Order by `phi`, then by `theta`.
    pub(crate) fn cmp_phi_theta(&self, theta: f64, phi: f64) -> Ordering {
        self.phi
            .total_cmp(&phi)
            .then_with(|| self.theta.total_cmp(&theta))
    }
}

impl PartialEq for DirectivityRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_theta_phi(other.theta, other.phi).is_eq()
    }
}

impl Eq for DirectivityRecord {}

impl std::hash::Hash for DirectivityRecord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.theta.to_bits().hash(state);
        self.phi.to_bits().hash(state);
    }
}

impl fmt::Display for DirectivityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DirectivityRecord{{theta={:.2} ({:.1}°), phi={:.2} ({:.1}°), attenuation={:?}}}",
            self.theta,
            self.theta.to_degrees(),
            self.phi,
            self.phi.to_degrees(),
            self.attenuation
        )
    }
}

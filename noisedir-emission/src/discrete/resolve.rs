use std::borrow::Cow;

use itertools::izip;
use noisedir_core::acoustics::{angular_distance, db_to_w, w_to_db};

use super::{DirectivityRecord, DiscreteDirectivity, InterpolationMethod};

/// Index following `pos`, wrapping to the first element past the end.
const fn wrap_next(pos: usize, len: usize) -> usize {
    if pos >= len {
        0
    } else {
        pos
    }
}

/// Index preceding `pos`, wrapping to the last element before the start.
const fn wrap_prev(pos: usize, len: usize) -> usize {
    if pos == 0 {
        len - 1
    } else {
        pos - 1
    }
}

fn normalize(value: f64) -> f64 {
    if value.is_nan() {
        0.
    } else {
        value.clamp(0., 1.)
    }
}

impl DiscreteDirectivity {
    /// Retrieves the record in the direction (`theta`, `phi`) with the configured interpolation
    /// method.
    #[must_use]
    pub fn resolve(&self, theta: f64, phi: f64) -> Cow<'_, DirectivityRecord> {
        self.record(theta, phi, self.interpolation_method)
    }

    /// Retrieves the record in the direction (`theta`, `phi`).
    ///
    /// The four records around the direction are found from the neighbours of (`theta`, `phi`) in
    /// both orderings, wrapping around at their ends. If any of them does not exist, the direction
    /// is not covered by a grid cell and a record with zero attenuation is returned.
    ///
    /// # Arguments
    ///
    /// * `theta` - Elevation in \[rad\]
    /// * `phi` - Azimuth in \[rad\]
    /// * `method` - [`InterpolationMethod::Nearest`] borrows the closest record,
    ///   [`InterpolationMethod::Bilinear`] computes a new one.
    #[must_use]
    pub fn record(
        &self,
        theta: f64,
        phi: f64,
        method: InterpolationMethod,
    ) -> Cow<'_, DirectivityRecord> {
        match self.corners(theta, phi) {
            Some(corners) => match method {
                InterpolationMethod::Nearest => Cow::Borrowed(closest(theta, phi, corners)),
                InterpolationMethod::Bilinear => Cow::Owned(bilinear(theta, phi, corners)),
            },
            None => {
                tracing::trace!(
                    "No directivity cell around theta={}, phi={}, attenuation is zero.",
                    theta,
                    phi
                );
                Cow::Owned(DirectivityRecord::silent(
                    theta,
                    phi,
                    self.frequency_axis.len(),
                ))
            }
        }
    }

    /// Corners (theta1, phi1), (theta2, phi1), (theta2, phi2), (theta1, phi2) of the cell around
    /// (`theta`, `phi`).
    fn corners(&self, theta: f64, phi: f64) -> Option<[&DirectivityRecord; 4]> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        let (Ok(theta_pos) | Err(theta_pos)) = self.search_theta(theta, phi);
        let theta1 = self.theta_at(wrap_next(theta_pos, len)).theta();
        let theta2 = self.theta_at(wrap_prev(theta_pos, len)).theta();

        // An exact match is its own upper neighbour.
        let (Ok(phi_pos) | Err(phi_pos)) = self.search_phi(theta, phi);
        let phi1 = self.phi_at(wrap_next(phi_pos, len)).phi();
        let phi2 = self.phi_at(wrap_prev(phi_pos, len)).phi();

        let find = |theta, phi| {
            self.search_theta(theta, phi)
                .ok()
                .map(|pos| self.theta_at(pos))
        };
        Some([
            find(theta1, phi1)?,
            find(theta2, phi1)?,
            find(theta2, phi2)?,
            find(theta1, phi2)?,
        ])
    }
}

fn closest<'a>(
    theta: f64,
    phi: f64,
    corners: [&'a DirectivityRecord; 4],
) -> &'a DirectivityRecord {
    corners
        .into_iter()
        .fold((corners[0], f64::MAX), |(closest, min), r| {
            let dist = angular_distance(theta, phi, r.theta(), r.phi());
            if dist < min {
                (r, dist)
            } else {
                (closest, min)
            }
        })
        .0
}

fn bilinear(theta: f64, phi: f64, corners: [&DirectivityRecord; 4]) -> DirectivityRecord {
    let [c00, c10, c11, c01] = corners;
    let (theta0, phi0) = (c00.theta(), c00.phi());

    let x_length = angular_distance(c10.theta(), phi0, theta0, phi0);
    let y_length = angular_distance(theta0, c11.phi(), theta0, phi0);
    let x = normalize(angular_distance(theta0, phi, theta, phi) / x_length);
    let y = normalize(angular_distance(theta, phi0, theta, phi) / y_length);

    let attenuation = izip!(
        c00.attenuation(),
        c10.attenuation(),
        c11.attenuation(),
        c01.attenuation()
    )
    .map(|(&a00, &a10, &a11, &a01)| {
        w_to_db(
            db_to_w(a00) * (1. - x) * (1. - y)
                + db_to_w(a10) * x * (1. - y)
                + db_to_w(a01) * (1. - x) * y
                + db_to_w(a11) * x * y,
        )
    })
    .collect::<Vec<_>>();

    DirectivityRecord::new(theta, phi, attenuation)
}

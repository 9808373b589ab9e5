/// Directivity models.
pub mod directivity;

/// Converts a level in decibels to linear power.
#[inline]
#[must_use]
pub fn db_to_w(db: f64) -> f64 {
    10f64.powf(db / 10.)
}

/// Converts linear power to a level in decibels.
#[inline]
#[must_use]
pub fn w_to_db(w: f64) -> f64 {
    10. * w.log10()
}

/// Great-circle angle in radians between the directions `(theta_a, phi_a)` and `(theta_b, phi_b)`.
///
/// `phi` plays the role of the latitude: the distance is
/// `acos(sin φa·sin φb + cos φa·cos φb·cos(θa − θb))`.
/// Identical directions are exactly zero apart; otherwise the cosine is clamped to [-1, 1] so that
/// rounding never yields NaN.
#[inline]
#[must_use]
pub fn angular_distance(theta_a: f64, phi_a: f64, theta_b: f64, phi_b: f64) -> f64 {
    if theta_a == theta_b && phi_a == phi_b {
        return 0.;
    }
    (phi_a.sin() * phi_b.sin() + phi_a.cos() * phi_b.cos() * (theta_a - theta_b).cos())
        .clamp(-1., 1.)
        .acos()
}

mod omnidirectional;

pub use omnidirectional::Omnidirectional;

/// A trait representing the directivity of a sound source.
///
/// Angles are in radians: `theta` is the elevation (0 is horizontal, π/2 is the top)
/// and `phi` is the azimuth (0 is the front).
pub trait DirectionAttributes: Send + Sync {
    /// Returns the attenuation in \[dB\] at `frequency` \[Hz\] in the direction (`phi`, `theta`).
    #[must_use]
    fn attenuation(&self, frequency: f64, phi: f64, theta: f64) -> f64;

    /// Returns the attenuation in \[dB\] for each of `frequencies` in the direction (`phi`, `theta`).
    #[must_use]
    fn attenuation_array(&self, frequencies: &[f64], phi: f64, theta: f64) -> Vec<f64> {
        frequencies
            .iter()
            .map(|&frequency| self.attenuation(frequency, phi, theta))
            .collect()
    }
}

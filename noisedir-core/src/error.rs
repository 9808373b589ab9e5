use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
/// An error produced while building directivity data.
pub enum DirectivityError {
    /// The frequency axis has no band.
    #[error("Frequency axis must contain at least one band")]
    EmptyFrequencies,
    /// A band of the frequency axis is NaN or infinite.
    #[error("Frequency ({0}) must be finite")]
    NonFiniteFrequency(f64),
    /// Two neighbouring bands are not strictly ascending.
    #[error("Frequencies must be strictly ascending, but {1} follows {0}")]
    FrequenciesNotAscending(f64, f64),
    /// Attenuation vector does not have one value per band.
    #[error("Attenuation must have {expected} values (one per frequency), but has {actual}")]
    AttenuationLengthMismatch {
        /// Number of frequency bands.
        expected: usize,
        /// Length of the given attenuation vector.
        actual: usize,
    },
    /// Integer code does not name an interpolation method.
    #[error("Unknown interpolation method ({0}), expected 0 (nearest) or 1 (bilinear)")]
    UnknownInterpolationMethod(u8),
}

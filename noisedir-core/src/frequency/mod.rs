use std::collections::HashMap;

use crate::DirectivityError;

/// Ascending frequency bands of directivity data.
///
/// Each band is a column of the attenuation vectors. A requested frequency is mapped to its column
/// with an exact lookup, falling back to the nearest band.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyAxis {
    frequencies: Vec<f64>,
    mapping: HashMap<u64, usize>,
}

impl FrequencyAxis {
    /// Creates a new [`FrequencyAxis`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError`] if `frequencies` is empty, contains a non-finite value,
    /// or is not strictly ascending.
    pub fn new(frequencies: impl Into<Vec<f64>>) -> Result<Self, DirectivityError> {
        let frequencies = frequencies.into();
        if frequencies.is_empty() {
            return Err(DirectivityError::EmptyFrequencies);
        }
        if let Some(&f) = frequencies.iter().find(|f| !f.is_finite()) {
            return Err(DirectivityError::NonFiniteFrequency(f));
        }
        if let Some(w) = frequencies.windows(2).find(|w| w[0] >= w[1]) {
            return Err(DirectivityError::FrequenciesNotAscending(w[0], w[1]));
        }
        let mapping = frequencies
            .iter()
            .enumerate()
            .map(|(i, f)| (f.to_bits(), i))
            .collect();
        Ok(Self {
            frequencies,
            mapping,
        })
    }

    /// Returns the bands in \[Hz\].
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Returns the number of bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns `true` if the axis has no band. Always `false` for a constructed axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Returns the column of `frequency`.
    ///
    /// An unknown frequency resolves to the closer of the two bands around it; at equal distance
    /// the lower band wins. Frequencies outside the axis clamp to the first or last band.
    #[must_use]
    pub fn index_of(&self, frequency: f64) -> usize {
        if let Some(&idx) = self.mapping.get(&frequency.to_bits()) {
            return idx;
        }
        let last = self
            .frequencies
            .partition_point(|&f| f < frequency)
            .min(self.frequencies.len() - 1);
        let first = last.saturating_sub(1);
        let idx = if (self.frequencies[first] - frequency).abs()
            <= (self.frequencies[last] - frequency).abs()
        {
            first
        } else {
            last
        };
        tracing::trace!(
            "{} Hz is not a band, using {} Hz.",
            frequency,
            self.frequencies[idx]
        );
        idx
    }

    /// Returns the column of each of `frequencies`.
    #[must_use]
    pub fn indices_of(&self, frequencies: &[f64]) -> Vec<usize> {
        frequencies.iter().map(|&f| self.index_of(f)).collect()
    }
}

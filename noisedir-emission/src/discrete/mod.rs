mod batch;
mod interpolation;
mod record;
mod resolve;

pub use interpolation::{DirectivityOption, InterpolationMethod};
pub use record::DirectivityRecord;

use getset::{CopyGetters, Getters};
use noisedir_core::{
    acoustics::directivity::DirectionAttributes, frequency::FrequencyAxis, DirectivityError,
};

/// Attenuation directivity over a sphere, sampled at discrete directions.
///
/// Records are kept in two orderings of the same set: by `theta` then `phi`, and by `phi` then
/// `theta`. Attenuation between records is resolved by [`InterpolationMethod`].
///
/// The store is populated through `&mut self` and queried through `&self`, so once populated it can
/// be shared between any number of threads.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct DiscreteDirectivity {
    #[getset(get_copy = "pub")]
    /// Identifier of the direction pattern.
    direction_identifier: i32,
    #[getset(get = "pub")]
    /// Frequency bands of the attenuation columns.
    frequency_axis: FrequencyAxis,
    #[getset(get_copy = "pub")]
    /// Interpolation method used by [`DirectionAttributes`] queries.
    interpolation_method: InterpolationMethod,
    records: Vec<DirectivityRecord>,
    by_theta: Vec<usize>,
    by_phi: Vec<usize>,
}

impl DiscreteDirectivity {
    /// Creates a new [`DiscreteDirectivity`] with bilinear interpolation.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError`] if `frequencies` is not a valid [`FrequencyAxis`].
    pub fn new(
        direction_identifier: i32,
        frequencies: impl Into<Vec<f64>>,
    ) -> Result<Self, DirectivityError> {
        Self::with_option(direction_identifier, frequencies, DirectivityOption::default())
    }

    /// Creates a new [`DiscreteDirectivity`] with the given option.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError`] if `frequencies` is not a valid [`FrequencyAxis`].
    pub fn with_option(
        direction_identifier: i32,
        frequencies: impl Into<Vec<f64>>,
        option: DirectivityOption,
    ) -> Result<Self, DirectivityError> {
        let frequency_axis = FrequencyAxis::new(frequencies)?;
        tracing::debug!(
            "Directivity {} created with {} frequency bands.",
            direction_identifier,
            frequency_axis.len()
        );
        Ok(Self {
            direction_identifier,
            frequency_axis,
            interpolation_method: option.interpolation,
            records: Vec::new(),
            by_theta: Vec::new(),
            by_phi: Vec::new(),
        })
    }

    /// Sets the interpolation method used by [`DirectionAttributes`] queries.
    pub fn set_interpolation_method(&mut self, interpolation_method: InterpolationMethod) {
        self.interpolation_method = interpolation_method;
    }

    /// Returns the frequency bands in \[Hz\].
    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        self.frequency_axis.frequencies()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there is no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records ordered by `theta`, then by `phi`.
    pub fn records_theta(&self) -> impl ExactSizeIterator<Item = &DirectivityRecord> + '_ {
        self.by_theta.iter().map(|&id| &self.records[id])
    }

    /// Returns the records ordered by `phi`, then by `theta`.
    pub fn records_phi(&self) -> impl ExactSizeIterator<Item = &DirectivityRecord> + '_ {
        self.by_phi.iter().map(|&id| &self.records[id])
    }

    /// Adds an attenuation record.
    ///
    /// # Arguments
    ///
    /// * `theta` - Elevation in \[rad\], in (-π/2, π/2]. 0 is horizontal, π/2 is the top.
    /// * `phi` - Azimuth in \[rad\], in [0, 2π). 0 is the front.
    /// * `attenuation` - Attenuation in \[dB\], one value per frequency band.
    ///
    /// If a record already exists at exactly (`theta`, `phi`), it is kept and this call does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError::AttenuationLengthMismatch`] if `attenuation` does not have one
    /// value per frequency band.
    pub fn insert_record(
        &mut self,
        theta: f64,
        phi: f64,
        attenuation: impl Into<Vec<f64>>,
    ) -> Result<(), DirectivityError> {
        let record = DirectivityRecord::new(theta, phi, attenuation);
        self.check_length(&record)?;

        let theta_pos = match self.search_theta(theta, phi) {
            Ok(_) => {
                tracing::trace!(
                    "Directivity record at theta={}, phi={} already exists.",
                    theta,
                    phi
                );
                return Ok(());
            }
            Err(pos) => pos,
        };
        let (Ok(phi_pos) | Err(phi_pos)) = self.search_phi(theta, phi);

        let id = self.records.len();
        self.records.push(record);
        self.by_theta.insert(theta_pos, id);
        self.by_phi.insert(phi_pos, id);
        Ok(())
    }

    /// Adds attenuation records at once.
    ///
    /// This is much more efficient than calling [`insert_record`] repeatedly, but records are not
    /// checked for duplicates: the caller must guarantee that each (`theta`, `phi`) is unique.
    ///
    /// # Errors
    ///
    /// Returns [`DirectivityError::AttenuationLengthMismatch`] if any record does not have one
    /// attenuation per frequency band. Nothing is inserted in that case.
    ///
    /// [`insert_record`]: Self::insert_record
    pub fn insert_records(
        &mut self,
        records: impl IntoIterator<Item = DirectivityRecord>,
    ) -> Result<(), DirectivityError> {
        let records = records.into_iter().collect::<Vec<_>>();
        records.iter().try_for_each(|r| self.check_length(r))?;

        let start = self.records.len();
        self.records.extend(records);
        self.by_theta.extend(start..self.records.len());
        self.by_phi.extend(start..self.records.len());

        let records = &self.records;
        self.by_theta
            .sort_by(|&a, &b| records[a].cmp_theta_phi(records[b].theta(), records[b].phi()));
        self.by_phi
            .sort_by(|&a, &b| records[a].cmp_phi_theta(records[b].theta(), records[b].phi()));

        tracing::debug!(
            "Directivity {}: {} records added, {} in total.",
            self.direction_identifier,
            self.records.len() - start,
            self.records.len()
        );
        Ok(())
    }

    fn check_length(&self, record: &DirectivityRecord) -> Result<(), DirectivityError> {
        if record.attenuation().len() != self.frequency_axis.len() {
            return Err(DirectivityError::AttenuationLengthMismatch {
                expected: self.frequency_axis.len(),
                actual: record.attenuation().len(),
            });
        }
        Ok(())
    }

    pub(crate) fn search_theta(&self, theta: f64, phi: f64) -> Result<usize, usize> {
        self.by_theta
            .binary_search_by(|&id| self.records[id].cmp_theta_phi(theta, phi))
    }

    pub(crate) fn search_phi(&self, theta: f64, phi: f64) -> Result<usize, usize> {
        self.by_phi
            .binary_search_by(|&id| self.records[id].cmp_phi_theta(theta, phi))
    }

    pub(crate) fn theta_at(&self, pos: usize) -> &DirectivityRecord {
        &self.records[self.by_theta[pos]]
    }

    pub(crate) fn phi_at(&self, pos: usize) -> &DirectivityRecord {
        &self.records[self.by_phi[pos]]
    }
}

impl DirectionAttributes for DiscreteDirectivity {
    fn attenuation(&self, frequency: f64, phi: f64, theta: f64) -> f64 {
        let column = self.frequency_axis.index_of(frequency);
        self.resolve(theta, phi).attenuation()[column]
    }

    fn attenuation_array(&self, frequencies: &[f64], phi: f64, theta: f64) -> Vec<f64> {
        let record = self.resolve(theta, phi);
        frequencies
            .iter()
            .map(|&f| record.attenuation()[self.frequency_axis.index_of(f)])
            .collect()
    }
}

use getset::{CopyGetters, Getters, Setters};

/// Parameters selecting the emission spectrum of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectreParameters {
    #[getset(get = "pub", set = "pub")]
    /// Vehicle type.
    type_vehicle: String,
    #[getset(get = "pub", set = "pub")]
    /// Reference of the spectrum table.
    reference: String,
    #[getset(get_copy = "pub", set = "pub")]
    /// Running condition code.
    running_condition: i32,
    #[getset(get = "pub", set = "pub")]
    /// Source height label.
    source_height: String,
    #[getset(get_copy = "pub", set = "pub")]
    /// Spectrum version.
    spectre_ver: i32,
    #[getset(get_copy = "pub", set = "pub")]
    /// Frequency band index.
    freq_id: i32,
}

impl SpectreParameters {
    /// Creates a new [`SpectreParameters`].
    #[must_use]
    pub fn new(
        type_vehicle: impl Into<String>,
        reference: impl Into<String>,
        running_condition: i32,
        source_height: impl Into<String>,
        spectre_ver: i32,
        freq_id: i32,
    ) -> Self {
        Self {
            type_vehicle: type_vehicle.into(),
            reference: reference.into(),
            running_condition,
            source_height: source_height.into(),
            spectre_ver,
            freq_id,
        }
    }
}

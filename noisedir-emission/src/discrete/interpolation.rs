use noisedir_core::DirectivityError;

/// Method used to compute attenuation between measured directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Attenuation of the closest measured direction.
    Nearest,
    /// Bilinear interpolation of the four surrounding directions in the power domain.
    #[default]
    Bilinear,
}

impl TryFrom<u8> for InterpolationMethod {
    type Error = DirectivityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Bilinear),
            v => Err(DirectivityError::UnknownInterpolationMethod(v)),
        }
    }
}

/// Option of [`DiscreteDirectivity`].
///
/// [`DiscreteDirectivity`]: crate::DiscreteDirectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectivityOption {
    /// Interpolation method. The default is [`InterpolationMethod::Bilinear`].
    pub interpolation: InterpolationMethod,
}

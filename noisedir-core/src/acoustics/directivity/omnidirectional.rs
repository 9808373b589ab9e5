use super::*;

/// A source radiating equally in every direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Omnidirectional {}

impl DirectionAttributes for Omnidirectional {
    #[inline]
    fn attenuation(&self, _: f64, _: f64, _: f64) -> f64 {
        0.
    }

    #[inline]
    fn attenuation_array(&self, frequencies: &[f64], _: f64, _: f64) -> Vec<f64> {
        vec![0.; frequencies.len()]
    }
}

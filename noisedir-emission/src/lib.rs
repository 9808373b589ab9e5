#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! Emission side of noise sources: measured directivity and spectral parameters.

/// Directivity sampled at discrete directions.
pub mod discrete;
mod spectre;

pub use discrete::{DirectivityOption, DirectivityRecord, DiscreteDirectivity, InterpolationMethod};
pub use spectre::SpectreParameters;

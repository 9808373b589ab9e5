//! Commonly used types.

pub use noisedir_core::{
    acoustics::{
        angular_distance, db_to_w,
        directivity::{DirectionAttributes, Omnidirectional},
        w_to_db,
    },
    common::{deg, rad, Angle, PI},
    frequency::FrequencyAxis,
    DirectivityError,
};
pub use noisedir_emission::{
    DirectivityOption, DirectivityRecord, DiscreteDirectivity, InterpolationMethod,
    SpectreParameters,
};
pub use noisedir_propagation::{
    PropagationProcessOut, PropagationResultPtRecord, PropagationResultTriRecord, ResultSink,
};

mod angle;

pub use std::f64::consts::PI;

pub use angle::*;

/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! Sound source directivity for noise propagation.
//!
//! A [`DiscreteDirectivity`] stores attenuation measured at discrete directions around a source
//! and resolves the attenuation in any direction by nearest neighbour or bilinear interpolation.
//!
//! ```
//! use noisedir::prelude::*;
//!
//! # fn main() -> Result<(), DirectivityError> {
//! let mut directivity = DiscreteDirectivity::new(1, [100., 200., 400.])?;
//! for theta in [0., 90.] {
//!     for phi in [0., 90.] {
//!         directivity.insert_record((theta * deg).radian(), (phi * deg).radian(), [10.; 3])?;
//!     }
//! }
//! let attenuation = directivity.attenuation(200., (45. * deg).radian(), (45. * deg).radian());
//! assert!((attenuation - 10.).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! [`DiscreteDirectivity`]: crate::emission::DiscreteDirectivity

pub mod prelude;

pub use noisedir_core as base;
pub use noisedir_emission as emission;
pub use noisedir_propagation as propagation;

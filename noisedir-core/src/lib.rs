#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for sound source directivity.

/// Utilities for acoustics.
pub mod acoustics;
/// Common constants and units.
pub mod common;
/// Error types.
pub mod error;
/// Frequency axis of directivity data.
pub mod frequency;

pub use error::DirectivityError;

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

//! Collection of results computed by noise propagation workers.

mod process_out;
mod record;
mod sink;

pub use process_out::PropagationProcessOut;
pub use record::{PropagationResultPtRecord, PropagationResultTriRecord};
pub use sink::ResultSink;

//! Pipeline environment.
//!
//! Reads everything the resolver needs from the CI process environment:
//!
//! - [`detection`] - Whether we run inside CI or as a local test
//! - [`inputs`] - Branch names and event, from flags or variables

pub mod detection;
pub mod inputs;

pub use detection::{CiDetector, RunMode};
pub use inputs::PipelineInputs;

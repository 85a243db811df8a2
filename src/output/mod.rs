//! Pipeline output files.
//!
//! Decisions are exported as `key=value` lines appended to the files named
//! by `GITHUB_OUTPUT` and `GITHUB_ENV`, or to local test files outside CI.

pub mod target;
pub mod writer;

pub use target::{OutputFile, LOCAL_FILE_HEADER};
pub use writer::OutputWriter;

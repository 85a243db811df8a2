//! Terminal output.
//!
//! - [`output`] - Output verbosity and the mode-aware writer
//! - [`theme`] - Colors and message formatting
//! - [`report`] - Human-readable rendering of a resolution

pub mod output;
pub mod report;
pub mod theme;

pub use output::{Output, OutputMode};
pub use report::Report;
pub use theme::{should_use_colors, Theme};

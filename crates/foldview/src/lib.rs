//! foldview
//!
//! - pipeline from a user-supplied sequence to a predicted, rendered structure.
//! - HTML report with composition statistics, the 3-D view and a download link.
//! - CLI to handle the above.
//!
pub mod content;
pub mod pipeline;
pub mod report;

pub use pipeline::{Pipeline, PredictionReport};

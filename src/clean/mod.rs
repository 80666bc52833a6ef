/// Cleaning stage: raw job-listing columns → feature-ready columns.
///
/// Architecture:
/// ```text
///   parsers ──┐
///             ├──▶ transforms ──▶ encode ──▶ pipeline ──▶ cleaned Table
///   groups ───┘    (one per raw column)      (fixed order, then retire)
///   metros ───┘
/// ```

pub mod columns;
pub mod encode;
pub mod groups;
pub mod metros;
pub mod parsers;
pub mod pipeline;
pub mod transforms;

pub use pipeline::{preprocess, Pipeline, Step};

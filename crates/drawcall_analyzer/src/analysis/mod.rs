//! Draw-call batching analysis
//!
//! ```text
//! scene graph → collect → elements (render order) → assign → batches (draw order)
//! ```
//!
//! The collector and assigner are pure functions; [`DrawCallAnalyzer`] wraps
//! them in a session that keeps the latest result for display.

mod analyzer;
mod assigner;
mod batch;
mod collector;
mod compatibility;
mod element;
mod overlap;

#[cfg(test)]
pub(crate) mod tests;

pub use analyzer::{AnalysisReport, DrawCallAnalyzer};
pub use assigner::assign;
pub use batch::Batch;
pub use collector::collect;
pub use compatibility::{compatible, BatchKey};
pub use element::DrawableElement;
pub use overlap::overlaps;

//! Debug visualization of analysis results
//!
//! - [`overlay`]: outline and label shapes colored per batch
//! - [`summary`]: draw-call count and per-batch listing

pub mod overlay;
pub mod summary;

pub use overlay::{build_overlay, palette_color, OverlayShape};
pub use summary::{BatchSummary, Summary};

//! # Draw Call Analyzer
//!
//! Static analysis of how a retained-mode UI renderer would batch a scene's
//! drawable elements into draw calls.
//!
//! ## Features
//!
//! - **Element Collection**: Render-order traversal that skips hidden elements and nested canvases
//! - **Batch Assignment**: Material/texture grouping with occlusion-driven breaks
//! - **Mask Isolation**: Masks are reported as the batch breaks they force
//! - **Visualization**: Per-batch overlay shapes and a draw-call summary
//! - **Scene Files**: Scenes and settings loaded from RON or TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drawcall_analyzer::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scene = UiScene::load_from_file("scenes/main_menu.ron")?;
//!     let root = scene.find_by_name("Canvas");
//!
//!     let mut analyzer = DrawCallAnalyzer::new();
//!     let report = analyzer.analyze(&scene, root);
//!
//!     let summary = Summary::new(report, scene.materials(), scene.textures(), &SummaryConfig::default());
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod resources;
pub mod scene;
pub mod analysis;
pub mod debug;

/// Common imports for analyzer users
pub mod prelude {
    pub use crate::{
        analysis::{AnalysisReport, Batch, BatchKey, DrawCallAnalyzer, DrawableElement},
        config::{AnalyzerConfig, Config, ConfigError, OverlayConfig, SummaryConfig},
        debug::{build_overlay, palette_color, OverlayShape, Summary},
        resources::{MaterialId, TextureId},
        scene::{NodeId, SceneDescription, SceneError, SceneNode, SceneView, UiScene},
    };
}

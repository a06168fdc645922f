//! UI scene graph
//!
//! Provides the hierarchical scene the analyzer walks, the read-only
//! [`SceneView`] capability trait the element collector is written against,
//! and the serializable [`SceneDescription`] used to load scenes from disk.

mod description;
mod node;
mod scene_graph;
mod view;

pub use description::{
    GraphicDescription, MaskDescription, NodeDescription, RectDescription, SceneDescription,
};
pub use node::{MaskComponent, NodeFlags, RectTransform, Renderable, SceneNode};
pub use scene_graph::{NodeId, UiScene};
pub use view::{RenderableInfo, SceneView};

use crate::config::ConfigError;

/// Scene construction errors
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// A graphic references a material that is not declared
    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    /// A graphic references a texture that is not declared
    #[error("Unknown texture: {0}")]
    UnknownTexture(String),

    /// The same material name is declared twice
    #[error("Duplicate material: {0}")]
    DuplicateMaterial(String),

    /// The same texture name is declared twice
    #[error("Duplicate texture: {0}")]
    DuplicateTexture(String),

    /// A node handle does not belong to the scene
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Scene file could not be loaded
    #[error("Scene file error: {0}")]
    Config(#[from] ConfigError),
}

impl UiScene {
    /// Load a scene description file (`.ron` or `.toml`) and build it
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SceneError> {
        use crate::config::Config;

        let path = path.as_ref();
        log::info!("Loading scene from {}", path.display());
        let description = SceneDescription::load_from_file(path)?;
        description.build()
    }
}

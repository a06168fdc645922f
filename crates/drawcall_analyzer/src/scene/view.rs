//! Read-only capability view over a scene graph
//!
//! The element collector only needs a handful of queries, so any host scene
//! representation can be analyzed by implementing [`SceneView`].

use crate::foundation::math::Vec3;
use crate::resources::{MaterialId, TextureId};

/// What the collector needs to know about a node's renderable component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderableInfo {
    /// Resolved material identity (`None` is a valid, comparable value)
    pub material: Option<MaterialId>,
    /// Resolved texture identity (`None` is a valid, comparable value)
    pub texture: Option<TextureId>,
    /// Color alpha
    pub alpha: f32,
    /// Component enabled and node active in hierarchy
    pub active_and_enabled: bool,
    /// Node carries an active, enabled masking component
    pub masking: bool,
}

/// Capability queries over a hierarchical scene
pub trait SceneView {
    /// Node handle, stable for the duration of one analysis pass
    type Node: Copy + Eq + std::fmt::Debug;

    /// Children in stored sibling order
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Whether the node defines an independent rendering root
    fn is_rendering_root(&self, node: Self::Node) -> bool;

    /// Renderable component of the node, if it has one
    fn renderable(&self, node: Self::Node) -> Option<RenderableInfo>;

    /// World-space corners: bottom-left, top-left, top-right, bottom-right
    fn world_corners(&self, node: Self::Node) -> [Vec3; 4];

    /// Accumulated world scale
    fn world_scale(&self, node: Self::Node) -> Vec3;

    /// Display name of the node
    fn node_name(&self, node: Self::Node) -> &str;
}

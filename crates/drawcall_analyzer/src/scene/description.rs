//! Serializable scene descriptions
//!
//! A [`SceneDescription`] is the on-disk form of a [`UiScene`]: named
//! materials and textures plus a nested node tree. Resource names must be
//! unique within one description; each name becomes one identity.

use super::node::{MaskComponent, RectTransform, Renderable, SceneNode};
use super::scene_graph::{NodeId, UiScene};
use super::SceneError;
use crate::config::Config;
use crate::foundation::math::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Whole scene on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Material names
    pub materials: Vec<String>,
    /// Texture names
    pub textures: Vec<String>,
    /// Top-level nodes
    pub nodes: Vec<NodeDescription>,
}

impl Config for SceneDescription {}

/// One node and its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDescription {
    /// Node name
    pub name: String,
    /// Own active switch
    pub active: bool,
    /// Independent rendering root (nested canvas)
    pub canvas: bool,
    /// Transform relative to the parent
    pub rect: RectDescription,
    /// Renderable component
    pub graphic: Option<GraphicDescription>,
    /// Mask component
    pub mask: Option<MaskDescription>,
    /// Children in sibling order
    pub children: Vec<NodeDescription>,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            active: true,
            canvas: false,
            rect: RectDescription::default(),
            graphic: None,
            mask: None,
            children: Vec::new(),
        }
    }
}

/// Rect transform on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectDescription {
    /// Pivot position in parent space
    pub position: [f32; 2],
    /// Width and height
    pub size: [f32; 2],
    /// Normalized pivot
    pub pivot: [f32; 2],
    /// Z rotation in degrees
    pub rotation: f32,
    /// Local scale
    pub scale: [f32; 3],
}

impl Default for RectDescription {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            size: [100.0, 100.0],
            pivot: [0.5, 0.5],
            rotation: 0.0,
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl From<&RectDescription> for RectTransform {
    fn from(desc: &RectDescription) -> Self {
        Self {
            position: Vec2::from(desc.position),
            size: Vec2::from(desc.size),
            pivot: Vec2::from(desc.pivot),
            rotation: desc.rotation,
            scale: Vec3::from(desc.scale),
        }
    }
}

/// Renderable component on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicDescription {
    /// Material name, `None` for no material
    pub material: Option<String>,
    /// Texture name, `None` for no texture
    pub texture: Option<String>,
    /// RGBA color
    pub color: [f32; 4],
    /// Component enabled switch
    pub enabled: bool,
}

impl Default for GraphicDescription {
    fn default() -> Self {
        Self {
            material: None,
            texture: None,
            color: [1.0, 1.0, 1.0, 1.0],
            enabled: true,
        }
    }
}

/// Mask component on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskDescription {
    /// Component enabled switch
    pub enabled: bool,
}

impl Default for MaskDescription {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SceneDescription {
    /// Resolve names and build the scene graph
    pub fn build(&self) -> Result<UiScene, SceneError> {
        let mut scene = UiScene::new();

        let mut seen = HashSet::new();
        let mut materials = HashMap::new();
        for name in &self.materials {
            if !seen.insert(name.as_str()) {
                return Err(SceneError::DuplicateMaterial(name.clone()));
            }
            materials.insert(name.as_str(), scene.materials_mut().register(name.as_str()));
        }

        seen.clear();
        let mut textures = HashMap::new();
        for name in &self.textures {
            if !seen.insert(name.as_str()) {
                return Err(SceneError::DuplicateTexture(name.clone()));
            }
            textures.insert(name.as_str(), scene.textures_mut().register(name.as_str()));
        }

        let resolver = Resolver { materials, textures };
        for desc in &self.nodes {
            let root = scene.add_root(resolver.node(desc)?);
            resolver.add_children(&mut scene, root, &desc.children)?;
        }

        log::debug!(
            "Built scene: {} nodes, {} materials, {} textures",
            scene.node_count(),
            scene.materials().len(),
            scene.textures().len()
        );
        Ok(scene)
    }
}

struct Resolver<'a> {
    materials: HashMap<&'a str, crate::resources::MaterialId>,
    textures: HashMap<&'a str, crate::resources::TextureId>,
}

impl Resolver<'_> {
    fn node(&self, desc: &NodeDescription) -> Result<SceneNode, SceneError> {
        let mut node = SceneNode::new(desc.name.as_str())
            .with_rect(RectTransform::from(&desc.rect))
            .with_active(desc.active);
        if desc.canvas {
            node = node.as_rendering_root();
        }
        if let Some(graphic) = &desc.graphic {
            node = node.with_renderable(self.renderable(graphic)?);
        }
        if let Some(mask) = &desc.mask {
            node = node.with_mask(MaskComponent { enabled: mask.enabled });
        }
        Ok(node)
    }

    fn renderable(&self, graphic: &GraphicDescription) -> Result<Renderable, SceneError> {
        let material = match &graphic.material {
            Some(name) => Some(
                *self
                    .materials
                    .get(name.as_str())
                    .ok_or_else(|| SceneError::UnknownMaterial(name.clone()))?,
            ),
            None => None,
        };
        let texture = match &graphic.texture {
            Some(name) => Some(
                *self
                    .textures
                    .get(name.as_str())
                    .ok_or_else(|| SceneError::UnknownTexture(name.clone()))?,
            ),
            None => None,
        };
        Ok(Renderable::new(material, texture)
            .with_color(Vec4::from(graphic.color))
            .with_enabled(graphic.enabled))
    }

    fn add_children(
        &self,
        scene: &mut UiScene,
        parent: NodeId,
        children: &[NodeDescription],
    ) -> Result<(), SceneError> {
        for desc in children {
            let id = scene.add_child(parent, self.node(desc)?)?;
            self.add_children(scene, id, &desc.children)?;
        }
        Ok(())
    }
}

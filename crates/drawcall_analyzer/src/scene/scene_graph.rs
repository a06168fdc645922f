//! UI scene graph
//!
//! Arena-backed hierarchy of [`SceneNode`]s. Sibling order is insertion order
//! and is the order the renderer composites in.

use super::node::SceneNode;
use super::view::{RenderableInfo, SceneView};
use super::SceneError;
use crate::foundation::math::{Mat4, Vec3};
use crate::resources::{MaterialRegistry, TextureRegistry};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle of a node in a [`UiScene`]
    pub struct NodeId;
}

#[derive(Debug, Clone)]
struct NodeEntry {
    node: SceneNode,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// UI scene: node hierarchy plus the material and texture registries it uses
#[derive(Debug, Clone, Default)]
pub struct UiScene {
    nodes: SlotMap<NodeId, NodeEntry>,
    roots: Vec<NodeId>,
    materials: MaterialRegistry,
    textures: TextureRegistry,
}

impl UiScene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Material registry
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Mutable material registry
    pub fn materials_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.materials
    }

    /// Texture registry
    pub fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// Mutable texture registry
    pub fn textures_mut(&mut self) -> &mut TextureRegistry {
        &mut self.textures
    }

    /// Add a top-level node
    pub fn add_root(&mut self, node: SceneNode) -> NodeId {
        let id = self.nodes.insert(NodeEntry {
            node,
            parent: None,
            children: Vec::new(),
        });
        self.roots.push(id);
        id
    }

    /// Append a node as the last child of `parent`
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::UnknownNode(format!("{parent:?}")));
        }
        let id = self.nodes.insert(NodeEntry {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children.push(id);
        }
        Ok(id)
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Node by handle
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id).map(|entry| &entry.node)
    }

    /// Mutable node by handle
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id).map(|entry| &mut entry.node)
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|entry| entry.parent)
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// First node named `name` in depth-first pre-order over all roots
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let entry = &self.nodes[id];
            if entry.node.name == name {
                return Some(id);
            }
            stack.extend(entry.children.iter().rev().copied());
        }
        None
    }

    /// Whether the node and every ancestor are active
    pub fn is_active_in_hierarchy(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            match self.nodes.get(node_id) {
                Some(entry) if entry.node.is_active_self() => current = entry.parent,
                _ => return false,
            }
        }
        true
    }

    /// Local-to-world matrix of a node
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::identity();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(entry) = self.nodes.get(node_id) else { break };
            matrix = entry.node.rect.local_matrix() * matrix;
            current = entry.parent;
        }
        matrix
    }
}

impl SceneView for UiScene {
    type Node = NodeId;

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map_or(&[] as &[NodeId], |entry| entry.children.as_slice())
    }

    fn is_rendering_root(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(SceneNode::is_rendering_root)
    }

    fn renderable(&self, node: NodeId) -> Option<RenderableInfo> {
        let scene_node = self.node(node)?;
        let renderable = scene_node.renderable.as_ref()?;
        let active = self.is_active_in_hierarchy(node);
        Some(RenderableInfo {
            material: renderable.material,
            texture: renderable.texture,
            alpha: renderable.alpha(),
            active_and_enabled: active && renderable.enabled,
            masking: active && scene_node.mask.is_some_and(|mask| mask.enabled),
        })
    }

    fn world_corners(&self, node: NodeId) -> [Vec3; 4] {
        let Some(scene_node) = self.node(node) else {
            return [Vec3::zeros(); 4];
        };
        let matrix = self.world_matrix(node);
        scene_node
            .rect
            .local_corners()
            .map(|corner| matrix.transform_point(&corner).coords)
    }

    fn world_scale(&self, node: NodeId) -> Vec3 {
        let mut scale = Vec3::new(1.0, 1.0, 1.0);
        let mut current = Some(node);
        while let Some(node_id) = current {
            let Some(entry) = self.nodes.get(node_id) else { break };
            scale.component_mul_assign(&entry.node.rect.scale);
            current = entry.parent;
        }
        scale
    }

    fn node_name(&self, node: NodeId) -> &str {
        self.node(node).map_or("", |n| n.name.as_str())
    }
}

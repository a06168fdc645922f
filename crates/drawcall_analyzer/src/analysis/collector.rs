//! Element collector
//!
//! Walks a scene depth-first in pre-order (node before children, siblings in
//! stored order) and gathers every visible drawable element. This is the
//! order the renderer composites in, so the batch assigner depends on it.

use super::element::DrawableElement;
use crate::scene::SceneView;

/// Collect the visible drawable elements under `root`, in render order
///
/// Children that start their own rendering root (nested canvases) are
/// skipped together with their whole subtree. An absent root yields an
/// empty list.
pub fn collect<S: SceneView>(scene: &S, root: Option<S::Node>) -> Vec<DrawableElement<S::Node>> {
    let mut elements = Vec::new();
    if let Some(root) = root {
        collect_recursive(scene, root, &mut elements);
    }
    elements
}

fn collect_recursive<S: SceneView>(
    scene: &S,
    node: S::Node,
    elements: &mut Vec<DrawableElement<S::Node>>,
) {
    if let Some(element) = drawable(scene, node) {
        elements.push(element);
    }

    for &child in scene.children(node) {
        if scene.is_rendering_root(child) {
            log::trace!("Skipping nested rendering root '{}'", scene.node_name(child));
            continue;
        }
        collect_recursive(scene, child, elements);
    }
}

fn drawable<S: SceneView>(scene: &S, node: S::Node) -> Option<DrawableElement<S::Node>> {
    let info = scene.renderable(node)?;
    if !info.active_and_enabled || !(info.alpha > 0.0) {
        return None;
    }

    let world_scale = scene.world_scale(node);
    if world_scale.iter().any(|&axis| axis == 0.0) {
        return None;
    }

    Some(DrawableElement {
        node,
        name: scene.node_name(node).to_owned(),
        material: info.material,
        texture: info.texture,
        alpha: info.alpha,
        world_scale,
        corners: scene.world_corners(node),
        masking: info.masking,
        active_and_enabled: info.active_and_enabled,
    })
}

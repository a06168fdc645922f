//! Drawable elements collected for one analysis pass

use crate::foundation::math::{Rect, Vec3};
use crate::resources::{MaterialId, TextureId};

/// One visible renderable UI element, in render order
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableElement<N> {
    /// Scene node the element was collected from
    pub node: N,
    /// Node name, for reports
    pub name: String,
    /// Resolved material identity
    pub material: Option<MaterialId>,
    /// Resolved texture identity
    pub texture: Option<TextureId>,
    /// Color alpha
    pub alpha: f32,
    /// Accumulated world scale
    pub world_scale: Vec3,
    /// World corners: bottom-left, top-left, top-right, bottom-right
    pub corners: [Vec3; 4],
    /// Carries an active masking component
    pub masking: bool,
    /// Component enabled and node active in hierarchy
    pub active_and_enabled: bool,
}

impl<N> DrawableElement<N> {
    /// Screen-space bounds of the (possibly rotated) quad
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(&self.corners)
    }

    /// Center used for overlay labels (midpoint of the bottom-left/top-right diagonal)
    pub fn label_anchor(&self) -> Vec3 {
        (self.corners[0] + self.corners[2]) * 0.5
    }
}

//! Scene node and its components

use crate::foundation::math::{Mat4, Point3, Vec2, Vec3, Vec4};
use crate::resources::{MaterialId, TextureId};
use bitflags::bitflags;

bitflags! {
    /// Per-node state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is active itself (its own switch, ignoring ancestors)
        const ACTIVE = 1 << 0;
        /// Node starts an independent rendering root (a nested canvas)
        const RENDERING_ROOT = 1 << 1;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::ACTIVE
    }
}

/// Rectangle transform of a UI node, relative to its parent
#[derive(Debug, Clone, PartialEq)]
pub struct RectTransform {
    /// Pivot position in parent space
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Normalized pivot inside the rect ((0, 0) = bottom-left)
    pub pivot: Vec2,
    /// Rotation around Z in degrees
    pub rotation: f32,
    /// Local scale
    pub scale: Vec3,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            size: Vec2::new(100.0, 100.0),
            pivot: Vec2::new(0.5, 0.5),
            rotation: 0.0,
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl RectTransform {
    /// Rect of the given size with its pivot placed at `position`
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            ..Default::default()
        }
    }

    /// Rect covering `min..min + size`, pivot at bottom-left
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            position: min,
            size,
            pivot: Vec2::zeros(),
            ..Default::default()
        }
    }

    /// Set rotation in degrees
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set local scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-parent matrix: translation * rotation(Z) * scale
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::new_translation(&Vec3::new(self.position.x, self.position.y, 0.0))
            * Mat4::from_euler_angles(0.0, 0.0, self.rotation.to_radians())
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Corners in local space: bottom-left, top-left, top-right, bottom-right
    pub fn local_corners(&self) -> [Point3; 4] {
        let x0 = -self.pivot.x * self.size.x;
        let y0 = -self.pivot.y * self.size.y;
        let x1 = x0 + self.size.x;
        let y1 = y0 + self.size.y;
        [
            Point3::new(x0, y0, 0.0),
            Point3::new(x0, y1, 0.0),
            Point3::new(x1, y1, 0.0),
            Point3::new(x1, y0, 0.0),
        ]
    }
}

/// Renderable component: contributes geometry with a material and texture
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    /// Resolved material, `None` when the element has no material
    pub material: Option<MaterialId>,
    /// Resolved main texture, `None` when the element has no texture
    pub texture: Option<TextureId>,
    /// Vertex color (RGBA)
    pub color: Vec4,
    /// Component enabled switch
    pub enabled: bool,
}

impl Renderable {
    /// Opaque white renderable
    pub fn new(material: Option<MaterialId>, texture: Option<TextureId>) -> Self {
        Self {
            material,
            texture,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            enabled: true,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Set the alpha channel only
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.w = alpha;
        self
    }

    /// Set the enabled switch
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Alpha channel of the color
    pub fn alpha(&self) -> f32 {
        self.color.w
    }
}

/// Masking component (clip/stencil region)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskComponent {
    /// Component enabled switch
    pub enabled: bool,
}

impl Default for MaskComponent {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// A node of the UI scene graph
#[derive(Debug, Clone, Default)]
pub struct SceneNode {
    /// Node name, used for reports
    pub name: String,
    /// State flags
    pub flags: NodeFlags,
    /// Transform relative to the parent
    pub rect: RectTransform,
    /// Renderable component, if any
    pub renderable: Option<Renderable>,
    /// Mask component, if any
    pub mask: Option<MaskComponent>,
}

impl SceneNode {
    /// Create an active, empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the rect transform
    pub fn with_rect(mut self, rect: RectTransform) -> Self {
        self.rect = rect;
        self
    }

    /// Attach a renderable component
    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    /// Attach a mask component
    pub fn with_mask(mut self, mask: MaskComponent) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set the node's own active switch
    pub fn with_active(mut self, active: bool) -> Self {
        self.flags.set(NodeFlags::ACTIVE, active);
        self
    }

    /// Mark the node as an independent rendering root
    pub fn as_rendering_root(mut self) -> Self {
        self.flags.insert(NodeFlags::RENDERING_ROOT);
        self
    }

    /// Whether the node's own active switch is on
    pub fn is_active_self(&self) -> bool {
        self.flags.contains(NodeFlags::ACTIVE)
    }

    /// Whether the node starts an independent rendering root
    pub fn is_rendering_root(&self) -> bool {
        self.flags.contains(NodeFlags::RENDERING_ROOT)
    }
}

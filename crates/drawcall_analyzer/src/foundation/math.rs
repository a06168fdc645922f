//! Math utilities and types
//!
//! Provides the 2D/3D math types used for UI element geometry.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix4,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (also used for RGBA colors)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Axis-aligned rectangle in the XY plane
///
/// Used to approximate an arbitrarily rotated UI quad by its screen-space
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (left, bottom)
    pub min: Vec2,
    /// Maximum corner (right, top)
    pub max: Vec2,
}

impl Rect {
    /// Create a new rect from min and max points
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounding rect of four quad corners, ignoring Z
    pub fn from_corners(corners: &[Vec3; 4]) -> Self {
        let min = corners.iter().fold(Vec3::repeat(f32::INFINITY), |acc, c| acc.inf(c));
        let max = corners.iter().fold(Vec3::repeat(f32::NEG_INFINITY), |acc, c| acc.sup(c));
        Self::new(min.xy(), max.xy())
    }

    /// Check if this rect overlaps another with nonzero area
    ///
    /// Edges that merely touch do not count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.max.x > self.min.x && other.min.x < self.max.x &&
        other.max.y > self.min.y && other.min.y < self.max.y
    }
}

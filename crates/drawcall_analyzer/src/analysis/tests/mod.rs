//! Shared helpers for analysis tests

use super::DrawableElement;
use crate::foundation::math::Vec3;
use crate::resources::{MaterialId, TextureId};

mod scenarios;

/// Axis-aligned element covering `[x, y, width, height]`
pub(crate) fn element(
    name: &'static str,
    material: Option<MaterialId>,
    texture: Option<TextureId>,
    [x, y, width, height]: [f32; 4],
) -> DrawableElement<&'static str> {
    DrawableElement {
        node: name,
        name: name.to_owned(),
        material,
        texture,
        alpha: 1.0,
        world_scale: Vec3::new(1.0, 1.0, 1.0),
        corners: [
            Vec3::new(x, y, 0.0),
            Vec3::new(x, y + height, 0.0),
            Vec3::new(x + width, y + height, 0.0),
            Vec3::new(x + width, y, 0.0),
        ],
        masking: false,
        active_and_enabled: true,
    }
}

/// Same element with an active mask
pub(crate) fn masked(mut element: DrawableElement<&'static str>) -> DrawableElement<&'static str> {
    element.masking = true;
    element
}

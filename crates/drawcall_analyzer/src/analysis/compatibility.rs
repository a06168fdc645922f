//! Compatibility oracle
//!
//! Two elements can share a draw call only when they resolve to the very same
//! material and texture. Comparison is by identity, never by value.

use super::element::DrawableElement;
use crate::resources::{MaterialId, TextureId};

/// Material/texture pair a batch is keyed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchKey {
    /// Representative material
    pub material: Option<MaterialId>,
    /// Representative texture
    pub texture: Option<TextureId>,
}

impl BatchKey {
    /// Key of an element
    pub fn of<N>(element: &DrawableElement<N>) -> Self {
        Self {
            material: element.material,
            texture: element.texture,
        }
    }
}

/// Whether `element` can be drawn in the same call as `representative`
pub fn compatible<N>(representative: &BatchKey, element: &DrawableElement<N>) -> bool {
    representative.material == element.material && representative.texture == element.texture
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::element;
    use crate::resources::{MaterialRegistry, TextureRegistry};

    #[test]
    fn test_same_material_and_texture() {
        let mut materials = MaterialRegistry::new();
        let mut textures = TextureRegistry::new();
        let m = materials.register("UI-Default");
        let t = textures.register("atlas");

        let a = element("a", Some(m), Some(t), [0.0, 0.0, 10.0, 10.0]);
        let b = element("b", Some(m), Some(t), [50.0, 0.0, 10.0, 10.0]);
        assert!(compatible(&BatchKey::of(&a), &b));
    }

    #[test]
    fn test_identity_not_name() {
        let mut materials = MaterialRegistry::new();
        let m1 = materials.register("UI-Default");
        let m2 = materials.register("UI-Default");

        let a = element("a", Some(m1), None, [0.0, 0.0, 10.0, 10.0]);
        let b = element("b", Some(m2), None, [0.0, 0.0, 10.0, 10.0]);
        assert!(!compatible(&BatchKey::of(&a), &b));
    }

    #[test]
    fn test_texture_mismatch() {
        let mut materials = MaterialRegistry::new();
        let mut textures = TextureRegistry::new();
        let m = materials.register("UI-Default");
        let t = textures.register("atlas");

        let a = element("a", Some(m), Some(t), [0.0, 0.0, 10.0, 10.0]);
        let b = element("b", Some(m), None, [0.0, 0.0, 10.0, 10.0]);
        assert!(!compatible(&BatchKey::of(&a), &b));
        assert!(!compatible(&BatchKey::of(&b), &a));
    }

    #[test]
    fn test_missing_resources_are_compatible() {
        let a = element("a", None, None, [0.0, 0.0, 10.0, 10.0]);
        let b = element("b", None, None, [20.0, 0.0, 10.0, 10.0]);
        assert!(compatible(&BatchKey::of(&a), &b));
    }
}

//! Render resource registries
//!
//! Materials and textures are only tracked by identity and display name.
//! Identity is the registry key: two entries that share a name are still
//! distinct resources and never batch together.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identity of a resolved (render-ready) material
    pub struct MaterialId;

    /// Identity of a resolved texture
    pub struct TextureId;
}

/// Display name used for a missing material or texture
pub const NONE_NAME: &str = "None";

/// Named resource storage keyed by identity
#[derive(Debug, Clone)]
pub struct Registry<K: slotmap::Key> {
    names: SlotMap<K, String>,
}

impl<K: slotmap::Key> Registry<K> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { names: SlotMap::with_key() }
    }

    /// Register a resource and return its fresh identity
    pub fn register(&mut self, name: impl Into<String>) -> K {
        self.names.insert(name.into())
    }

    /// Name of a resource, if registered
    pub fn name(&self, id: K) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Display name of an optional resource; missing resources read as `None`
    pub fn display_name(&self, id: Option<K>) -> &str {
        id.and_then(|id| self.name(id)).unwrap_or(NONE_NAME)
    }

    /// First resource registered under `name`
    pub fn find(&self, name: &str) -> Option<K> {
        self.names
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(id, _)| id)
    }

    /// Number of registered resources
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: slotmap::Key> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Material registry
pub type MaterialRegistry = Registry<MaterialId>;

/// Texture registry
pub type TextureRegistry = Registry<TextureId>;

//! Batch of elements sharing one draw call

use super::compatibility::BatchKey;

/// A group of elements drawn with one draw call
///
/// Members are indices into the collected element list the batch was
/// assigned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Representative material/texture
    pub key: BatchKey,
    /// Member element indices, in discovery order
    pub members: Vec<usize>,
    /// Index of the element that seeded this batch
    pub first_element_index: usize,
    /// Synthetic single-member batch marking a mask's forced break
    pub isolation: bool,
}

impl Batch {
    /// Content batch seeded by the element at `index`
    pub fn new(key: BatchKey, index: usize) -> Self {
        Self {
            key,
            members: vec![index],
            first_element_index: index,
            isolation: false,
        }
    }

    /// Isolation batch for the masking element at `index`
    pub fn isolation(key: BatchKey, index: usize) -> Self {
        Self {
            isolation: true,
            ..Self::new(key, index)
        }
    }

    /// Add an element to this batch
    pub fn add_member(&mut self, index: usize) {
        self.members.push(index);
    }

    /// Number of member elements
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

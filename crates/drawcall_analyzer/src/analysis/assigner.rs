//! Batch assigner
//!
//! Reconstructs the renderer's batching decisions in one left-to-right pass
//! over the collected elements:
//!
//! 1. An element joins the oldest batch with the same material and texture,
//!    unless an element with a different material/texture that was
//!    discovered since that batch started overlaps it. Joining would then
//!    reorder it relative to that occluder, so the next batch is tried.
//! 2. If no batch accepts it, the element seeds a new batch.
//! 3. An element with an active mask additionally appends a single-member
//!    isolation batch, marking the stencil state change.
//!
//! Batches are never merged, removed or reordered once created.

use super::batch::Batch;
use super::compatibility::{compatible, BatchKey};
use super::element::DrawableElement;
use super::overlap::overlaps;

/// Partition `elements` (in render order) into ordered batches
pub fn assign<N: PartialEq>(elements: &[DrawableElement<N>]) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();

    for (index, element) in elements.iter().enumerate() {
        let target = batches
            .iter()
            .position(|batch| accepts(batch, elements, index));

        match target {
            Some(batch_index) => {
                log::trace!("'{}' joins batch {}", element.name, batch_index);
                batches[batch_index].add_member(index);
            }
            None => {
                log::trace!("'{}' starts batch {}", element.name, batches.len());
                batches.push(Batch::new(BatchKey::of(element), index));
            }
        }

        if element.masking && element.active_and_enabled {
            log::trace!("'{}' masks: isolation batch {}", element.name, batches.len());
            batches.push(Batch::isolation(BatchKey::of(element), index));
        }
    }

    batches
}

fn accepts<N: PartialEq>(batch: &Batch, elements: &[DrawableElement<N>], index: usize) -> bool {
    let element = &elements[index];
    if batch.isolation || !compatible(&batch.key, element) {
        return false;
    }

    let occluder = elements[batch.first_element_index..index]
        .iter()
        .find(|&other| !compatible(&batch.key, other) && overlaps(element, other));

    if let Some(other) = occluder {
        log::trace!("'{}' occluded by '{}'", element.name, other.name);
        return false;
    }
    true
}

//! Overlap oracle
//!
//! Elements are approximated by the axis-aligned bounds of their world
//! corners. Rotated or skewed quads therefore report overlap slightly more
//! often than their true shapes would.

use super::element::DrawableElement;

/// Whether the screen-space bounds of `a` and `b` intersect with nonzero area
///
/// An element never overlaps itself.
pub fn overlaps<N: PartialEq>(a: &DrawableElement<N>, b: &DrawableElement<N>) -> bool {
    if a.node == b.node {
        return false;
    }
    a.bounds().overlaps(&b.bounds())
}

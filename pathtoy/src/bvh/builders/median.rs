//! Median-split builder: sorts by the longest axis of the node's bounding box
//! and cuts the range in half.

use super::sort;
use crate::{Axis, BoundingBox, BvhOptions, Triangle};

pub(super) fn split(
    triangles: &mut [Triangle],
    bounds: BoundingBox,
    _: &BvhOptions,
) -> usize {
    let axis = Axis::longest(bounds.extent());

    sort(triangles, axis);

    // Left side gets the extra triangle when the count is odd
    (triangles.len() - 1) / 2 + 1
}

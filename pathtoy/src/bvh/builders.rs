pub mod median;
pub mod sah;

use std::ops::Range;

use crate::{
    Axis, BoundingBox, BvhNode, BvhNodeId, BvhNodes, BvhOptions, BvhStrategy,
    Triangle, TrianglesRef,
};

/// Reorders the given triangles and returns how many of them (counting from
/// the front) should go into the left child.
///
/// The returned value must lie within `1..triangles.len()`.
type Splitter = fn(&mut [Triangle], BoundingBox, &BvhOptions) -> usize;

/// Builds a tree over `triangles[range]`, appending its nodes into `nodes` and
/// returning the id of its root.
///
/// Triangles within `range` get reordered so that each leaf refers to a
/// contiguous slice of them; triangles outside of `range` are left intact.
/// Empty ranges yield [`BvhNodeId::NONE`] without appending anything.
pub fn run(
    nodes: &mut BvhNodes,
    triangles: &mut [Triangle],
    range: Range<usize>,
    options: &BvhOptions,
) -> BvhNodeId {
    let split: Splitter = match options.strategy() {
        BvhStrategy::Sah => sah::split,
        BvhStrategy::Median => median::split,
    };

    build(nodes, triangles, range, options, split)
}

/// Depth-first, top-down build.
///
/// Each node gets appended before any of its children, and the whole left
/// subtree before the right one, so the node array ends up in pre-order with
/// the root first.
fn build(
    nodes: &mut BvhNodes,
    triangles: &mut [Triangle],
    range: Range<usize>,
    options: &BvhOptions,
    split: Splitter,
) -> BvhNodeId {
    if range.is_empty() {
        return BvhNodeId::NONE;
    }

    let mut root_id = BvhNodeId::NONE;
    let mut stack = vec![Job {
        range,
        parent: None,
    }];

    while let Some(Job { range, parent }) = stack.pop() {
        let bounds = bounds(&triangles[range.clone()]);

        let id = if range.len() <= options.leaf_threshold() {
            nodes.add(BvhNode::Leaf {
                bounds,
                triangles_ref: TrianglesRef::new(range),
            })
        } else {
            let left_len = split(&mut triangles[range.clone()], bounds, options);

            debug_assert!(left_len > 0 && left_len < range.len());

            let pivot = range.start + left_len;

            let id = nodes.add(BvhNode::Internal {
                bounds,
                left_id: BvhNodeId::NONE,
                right_id: BvhNodeId::NONE,
            });

            stack.push(Job {
                range: pivot..range.end,
                parent: Some((id, Side::Right)),
            });

            stack.push(Job {
                range: range.start..pivot,
                parent: Some((id, Side::Left)),
            });

            id
        };

        if let Some((parent_id, side)) = parent {
            let BvhNode::Internal {
                left_id, right_id, ..
            } = &mut nodes[parent_id]
            else {
                unreachable!();
            };

            match side {
                Side::Left => *left_id = id,
                Side::Right => *right_id = id,
            }
        } else {
            root_id = id;
        }
    }

    root_id
}

fn bounds(triangles: &[Triangle]) -> BoundingBox {
    triangles.iter().map(Triangle::bounds).collect()
}

/// Stable-sorts triangles by their centroids along `axis`.
fn sort(triangles: &mut [Triangle], axis: Axis) {
    triangles.sort_by(|a, b| axis.compare(a.center(), b.center()));
}

struct Job {
    range: Range<usize>,
    parent: Option<(BvhNodeId, Side)>,
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{random_triangles, row_of_triangles};
    use crate::MaterialId;

    #[test]
    fn empty_range() {
        let mut nodes = BvhNodes::default();
        let mut triangles = row_of_triangles(4);

        let root_id =
            run(&mut nodes, &mut triangles, 2..2, &BvhOptions::default());

        assert_eq!(BvhNodeId::NONE, root_id);
        assert!(nodes.is_empty());
    }

    #[test]
    fn nodes_are_in_preorder() {
        let mut nodes = BvhNodes::default();
        let mut triangles = row_of_triangles(16);
        let options = BvhOptions::default().with_leaf_threshold(1);

        let root_id = run(&mut nodes, &mut triangles, 0..16, &options);

        assert_eq!(BvhNodeId::root(), root_id);
        assert_eq!(31, nodes.len());

        let mut expected_id = 0;
        let mut stack = vec![root_id];

        while let Some(id) = stack.pop() {
            assert_eq!(expected_id, id.get());

            expected_id += 1;

            if let Some([left_id, right_id]) = nodes[id].children() {
                stack.push(right_id);
                stack.push(left_id);
            }
        }
    }

    #[test]
    fn sub_range() {
        let mut nodes = BvhNodes::default();
        let mut triangles = random_triangles(1234, 32);
        let original = triangles.clone();
        let options = BvhOptions::default().with_leaf_threshold(2);

        run(&mut nodes, &mut triangles, 8..24, &options);

        assert_eq!(original[..8], triangles[..8]);
        assert_eq!(original[24..], triangles[24..]);

        for (_, node) in nodes.iter() {
            if let Some(triangles_ref) = node.triangles_ref() {
                assert!(triangles_ref.start() >= 8);
                assert!(triangles_ref.end() <= 24);
            }
        }
    }

    #[test]
    fn sort_is_stable_for_equal_centroids() {
        let mut triangles = row_of_triangles(3);

        triangles.extend(row_of_triangles(3).into_iter().map(|triangle| {
            Triangle::new(triangle.positions(), MaterialId::new(1))
        }));

        let expected = [0, 3, 1, 4, 2, 5].map(|idx| triangles[idx]);

        sort(&mut triangles, Axis::X);

        assert_eq!(expected.as_slice(), triangles.as_slice());
    }
}

use std::ops::Range;

use thiserror::Error;

use super::{BvhNode, BvhNodeId, BvhNodes, BvhOptions};
use crate::Triangle;

/// Structural problem found by [`super::Bvh::validate()`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BvhError {
    /// Non-empty range was built, but the tree has no root
    #[error("tree has no root, but {0} triangles were supposed to be built")]
    MissingRoot(usize),

    /// Internal node refers to a child that doesn't exist
    #[error("node {parent:?} refers to a non-existent child {child:?}")]
    DanglingChild { parent: BvhNodeId, child: BvhNodeId },

    /// Node is reachable through more than one path
    #[error("node {0:?} is reachable more than once")]
    NodeVisitedTwice(BvhNodeId),

    /// Some nodes are not reachable from the root at all
    #[error("{0} nodes are not reachable from the root")]
    UnreachableNodes(usize),

    #[error("leaf {0:?} has no triangles")]
    EmptyLeaf(BvhNodeId),

    #[error("leaf {id:?} has {len} triangles (threshold: {threshold})")]
    OversizedLeaf {
        id: BvhNodeId,
        len: usize,
        threshold: usize,
    },

    #[error("bounds of node {parent:?} do not contain its child {child:?}")]
    UncontainedChild { parent: BvhNodeId, child: BvhNodeId },

    #[error("bounds of leaf {id:?} do not contain triangle {triangle}")]
    UncontainedTriangle { id: BvhNodeId, triangle: usize },

    /// Leaves (in traversal order) don't tile the built range exactly
    #[error(
        "leaf {id:?} starts at triangle {actual}, but {expected} was expected"
    )]
    BrokenPartition {
        id: Option<BvhNodeId>,
        expected: usize,
        actual: usize,
    },
}

pub(super) fn run(
    nodes: &BvhNodes,
    root: Option<BvhNodeId>,
    triangles: &[Triangle],
    range: Range<usize>,
    options: &BvhOptions,
) -> Result<(), BvhError> {
    let Some(root) = root else {
        if range.is_empty() && nodes.is_empty() {
            return Ok(());
        }

        return Err(BvhError::MissingRoot(range.len()));
    };

    if nodes.get(root).is_none() {
        return Err(BvhError::MissingRoot(range.len()));
    }

    let mut visited = vec![false; nodes.len()];
    let mut next_triangle = range.start;
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let seen = &mut visited[id.get() as usize];

        if *seen {
            return Err(BvhError::NodeVisitedTwice(id));
        }

        *seen = true;

        match nodes[id] {
            BvhNode::Internal {
                bounds,
                left_id,
                right_id,
            } => {
                // Right goes first, so that leaves get visited left-to-right
                for child in [right_id, left_id] {
                    let child_node = match nodes.get(child) {
                        Some(node) if child != BvhNodeId::NONE => node,
                        _ => {
                            return Err(BvhError::DanglingChild {
                                parent: id,
                                child,
                            });
                        }
                    };

                    if !bounds.contains(&child_node.bounds()) {
                        return Err(BvhError::UncontainedChild {
                            parent: id,
                            child,
                        });
                    }

                    stack.push(child);
                }
            }

            BvhNode::Leaf {
                bounds,
                triangles_ref,
            } => {
                let leaf_range = triangles_ref.as_range();

                if leaf_range.is_empty() {
                    return Err(BvhError::EmptyLeaf(id));
                }

                if leaf_range.len() > options.leaf_threshold() {
                    return Err(BvhError::OversizedLeaf {
                        id,
                        len: leaf_range.len(),
                        threshold: options.leaf_threshold(),
                    });
                }

                if leaf_range.start != next_triangle
                    || leaf_range.end > range.end
                {
                    return Err(BvhError::BrokenPartition {
                        id: Some(id),
                        expected: next_triangle,
                        actual: leaf_range.start,
                    });
                }

                for idx in leaf_range.clone() {
                    if !bounds.contains(&triangles[idx].bounds()) {
                        return Err(BvhError::UncontainedTriangle {
                            id,
                            triangle: idx,
                        });
                    }
                }

                next_triangle = leaf_range.end;
            }
        }
    }

    if next_triangle != range.end {
        return Err(BvhError::BrokenPartition {
            id: None,
            expected: range.end,
            actual: next_triangle,
        });
    }

    let unreachable = visited.iter().filter(|seen| !**seen).count();

    if unreachable > 0 {
        return Err(BvhError::UnreachableNodes(unreachable));
    }

    Ok(())
}

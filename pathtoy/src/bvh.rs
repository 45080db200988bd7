mod builders;
mod node;
mod nodes;
mod options;
mod printer;
mod serializer;
mod validator;

use std::hash::{Hash, Hasher};
use std::ops::Range;

use fxhash::FxHasher;
use glam::Vec3;

pub use self::node::*;
pub use self::nodes::*;
pub use self::options::*;
pub use self::printer::*;
pub use self::serializer::*;
pub use self::validator::*;
use crate::{utils, Triangle};

/// Bounding volume hierarchy over a triangle array.
///
/// Building reorders the triangles so that every leaf refers to a contiguous
/// slice of them; the tree is meaningful only together with the array it was
/// built over.
#[derive(Clone, Debug, Default)]
pub struct Bvh {
    root: Option<BvhNodeId>,
    nodes: BvhNodes,
    range: Range<usize>,
    options: BvhOptions,
}

impl Bvh {
    pub fn build(triangles: &mut [Triangle], options: BvhOptions) -> Self {
        let len = triangles.len();

        Self::build_range(triangles, 0..len, options)
    }

    /// Builds a tree over `triangles[range]`, leaving the rest of the array
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    pub fn build_range(
        triangles: &mut [Triangle],
        range: Range<usize>,
        options: BvhOptions,
    ) -> Self {
        assert!(range.start <= range.end && range.end <= triangles.len());

        log::debug!(
            "Building BVH; triangles={}, leaf_threshold={}, strategy={:?}, \
             parallel={}",
            range.len(),
            options.leaf_threshold(),
            options.strategy(),
            options.parallel(),
        );

        let mut nodes = BvhNodes::default();

        let root = utils::measure("bvh", || {
            builders::run(&mut nodes, triangles, range.clone(), &options)
        });

        let root = if nodes.is_empty() { None } else { Some(root) };

        log::debug!("BVH built; nodes={}", nodes.len());

        Self {
            root,
            nodes,
            range,
            options,
        }
    }

    /// Returns id of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<BvhNodeId> {
        self.root
    }

    pub fn root_node(&self) -> Option<BvhNode> {
        self.root.map(|id| self.nodes[id])
    }

    pub fn nodes(&self) -> &BvhNodes {
        &self.nodes
    }

    pub fn options(&self) -> &BvhOptions {
        &self.options
    }

    /// Returns the range of triangles this tree was built over.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns leaves in the depth-first, left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = (BvhNodeId, &BvhNode)> + '_ {
        let mut stack: Vec<_> = self.root.into_iter().collect();

        std::iter::from_fn(move || {
            while let Some(id) = stack.pop() {
                let node = &self.nodes[id];

                if let Some([left_id, right_id]) = node.children() {
                    stack.push(right_id);
                    stack.push(left_id);
                } else {
                    return Some((id, node));
                }
            }

            None
        })
    }

    /// Returns a hash of the tree's layout (topology, bounds and triangle
    /// ranges); two builds over the same input yield the same fingerprint.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();

        self.root.hash(&mut hasher);

        for (_, node) in self.nodes.iter() {
            let bounds = node.bounds();

            for value in bounds.min().to_array() {
                value.to_bits().hash(&mut hasher);
            }

            for value in bounds.max().to_array() {
                value.to_bits().hash(&mut hasher);
            }

            node.children().hash(&mut hasher);
            node.triangles_ref().hash(&mut hasher);
        }

        hasher.finish()
    }

    /// Checks the tree's structural invariants against the (already
    /// reordered) triangles it was built over.
    pub fn validate(&self, triangles: &[Triangle]) -> Result<(), BvhError> {
        if self.range.end > triangles.len() {
            return Err(BvhError::BrokenPartition {
                id: None,
                expected: self.range.end,
                actual: triangles.len(),
            });
        }

        validator::run(
            &self.nodes,
            self.root,
            triangles,
            self.range.clone(),
            &self.options,
        )
    }

    /// Flattens the tree into the buffer consumed by [`crate::gpu::BvhView`].
    pub fn serialize(&self) -> Vec<Vec3> {
        let mut out = Vec::new();

        utils::measure("bvh-serialize", || {
            BvhSerializer::process(&self.nodes, &mut out);
        });

        out
    }
}

use std::ops::Range;

use crate::BoundingBox;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BvhNode {
    Internal {
        bounds: BoundingBox,
        left_id: BvhNodeId,
        right_id: BvhNodeId,
    },

    Leaf {
        bounds: BoundingBox,
        triangles_ref: TrianglesRef,
    },
}

impl BvhNode {
    pub fn bounds(&self) -> BoundingBox {
        match self {
            BvhNode::Internal { bounds, .. } => *bounds,
            BvhNode::Leaf { bounds, .. } => *bounds,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    /// Returns the ids of this node's children, if it's an internal node.
    pub fn children(&self) -> Option<[BvhNodeId; 2]> {
        if let BvhNode::Internal {
            left_id, right_id, ..
        } = self
        {
            Some([*left_id, *right_id])
        } else {
            None
        }
    }

    /// Returns the triangles assigned to this node, if it's a leaf.
    pub fn triangles_ref(&self) -> Option<TrianglesRef> {
        if let BvhNode::Leaf { triangles_ref, .. } = self {
            Some(*triangles_ref)
        } else {
            None
        }
    }
}

impl Default for BvhNode {
    fn default() -> Self {
        BvhNode::Leaf {
            bounds: Default::default(),
            triangles_ref: Default::default(),
        }
    }
}

/// Index into [`super::BvhNodes`].
///
/// Nodes refer to each other through ids rather than references, since the
/// node array reallocates as it grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BvhNodeId(u32);

impl BvhNodeId {
    /// Marker returned for empty builds and stored as "no child".
    ///
    /// It shares its value with the root, which is fine since the root is
    /// never anybody's child - but it must not be dereferenced when returned
    /// from an empty build.
    pub const NONE: Self = Self(0);

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn root() -> Self {
        Self::new(0)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// Contiguous range of the (reordered) triangle array assigned to a leaf.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TrianglesRef {
    start: u32,
    len: u32,
}

impl TrianglesRef {
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start as u32,
            len: range.len() as u32,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_range(&self) -> Range<usize> {
        (self.start as usize)..(self.end() as usize)
    }
}

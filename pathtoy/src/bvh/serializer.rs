use glam::{vec3, Vec3};

use super::{BvhNode, BvhNodes};
use crate::gpu;

/// Flattens the node array into the layout expected by
/// [`crate::gpu::BvhView`].
///
/// Each node becomes four records, in node-array order:
///
/// ```text
/// 0: (left_id, right_id, 0)
/// 1: (triangle count, first triangle, 0)
/// 2: bounds.min
/// 3: bounds.max
/// ```
///
/// Integers are converted numerically (not bit-cast), so they are exact only
/// below 2^24.
pub struct BvhSerializer;

impl BvhSerializer {
    pub fn process(nodes: &BvhNodes, out: &mut Vec<Vec3>) {
        out.reserve(nodes.len() * gpu::BVH_NODE_STRIDE);

        for (_, node) in nodes.iter() {
            let (children, triangles) = match node {
                BvhNode::Internal {
                    left_id, right_id, ..
                } => (
                    vec3(left_id.get() as f32, right_id.get() as f32, 0.0),
                    Vec3::ZERO,
                ),

                BvhNode::Leaf { triangles_ref, .. } => (
                    Vec3::ZERO,
                    vec3(
                        triangles_ref.len() as f32,
                        triangles_ref.start() as f32,
                        0.0,
                    ),
                ),
            };

            let bounds = node.bounds();

            out.push(children);
            out.push(triangles);
            out.push(bounds.min());
            out.push(bounds.max());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundingBox, BvhNodeId, TrianglesRef};

    #[test]
    fn three_nodes() {
        let mut nodes = BvhNodes::default();

        nodes.add(BvhNode::Internal {
            bounds: BoundingBox::new(vec3(0.0, 0.0, 0.0), vec3(9.0, 1.0, 0.0)),
            left_id: BvhNodeId::new(1),
            right_id: BvhNodeId::new(2),
        });

        nodes.add(BvhNode::Leaf {
            bounds: BoundingBox::new(vec3(0.0, 0.0, 0.0), vec3(4.0, 1.0, 0.0)),
            triangles_ref: TrianglesRef::new(0..4),
        });

        nodes.add(BvhNode::Leaf {
            bounds: BoundingBox::new(vec3(4.0, 0.0, 0.0), vec3(9.0, 1.0, 0.0)),
            triangles_ref: TrianglesRef::new(4..9),
        });

        let mut out = Vec::new();

        BvhSerializer::process(&nodes, &mut out);

        assert_eq!(
            vec![
                // root
                vec3(1.0, 2.0, 0.0),
                vec3(0.0, 0.0, 0.0),
                vec3(0.0, 0.0, 0.0),
                vec3(9.0, 1.0, 0.0),
                // left
                vec3(0.0, 0.0, 0.0),
                vec3(4.0, 0.0, 0.0),
                vec3(0.0, 0.0, 0.0),
                vec3(4.0, 1.0, 0.0),
                // right
                vec3(0.0, 0.0, 0.0),
                vec3(5.0, 4.0, 0.0),
                vec3(4.0, 0.0, 0.0),
                vec3(9.0, 1.0, 0.0),
            ],
            out
        );

        let view = gpu::BvhView::new(&out);

        assert_eq!(3, view.len());
        assert_eq!(
            vec![4, 5, 6, 7, 8],
            view.get(2).triangles().collect::<Vec<_>>()
        );
    }

    #[test]
    fn empty() {
        let mut out = Vec::new();

        BvhSerializer::process(&BvhNodes::default(), &mut out);

        assert!(out.is_empty());
    }
}

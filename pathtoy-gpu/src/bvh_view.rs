use glam::Vec3;

use crate::BVH_NODE_STRIDE;

/// Read-only view over a flat BVH buffer.
///
/// Each node occupies four records:
///
/// ```text
/// [0] = (left, right, 0)
/// [1] = (n, index, 0)
/// [2] = aabb min
/// [3] = aabb max
/// ```
///
/// Integer fields are stored as numerically-converted floats, so they are
/// exact up to `2^24`.
#[derive(Clone, Copy, Debug)]
pub struct BvhView<'a> {
    buffer: &'a [Vec3],
}

impl<'a> BvhView<'a> {
    pub fn new(buffer: &'a [Vec3]) -> Self {
        assert!(buffer.len() % BVH_NODE_STRIDE == 0);

        Self { buffer }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.buffer.len() / BVH_NODE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn get(&self, id: u32) -> BvhNodeView {
        let ptr = (id as usize) * BVH_NODE_STRIDE;
        let [d0, d1, d2, d3] = [
            self.buffer[ptr],
            self.buffer[ptr + 1],
            self.buffer[ptr + 2],
            self.buffer[ptr + 3],
        ];

        BvhNodeView {
            left: d0.x as u32,
            right: d0.y as u32,
            n: d1.x as u32,
            index: d1.y as u32,
            min: d2,
            max: d3,
        }
    }
}

/// Decoded BVH node, as seen by the shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BvhNodeView {
    pub left: u32,
    pub right: u32,
    pub n: u32,
    pub index: u32,
    pub min: Vec3,
    pub max: Vec3,
}

impl BvhNodeView {
    pub fn is_leaf(&self) -> bool {
        self.n > 0
    }

    pub fn triangles(&self) -> impl Iterator<Item = u32> {
        self.index..(self.index + self.n)
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn get() {
        let buffer = [
            vec3(1.0, 2.0, 0.0),
            vec3(0.0, 0.0, 0.0),
            vec3(-1.0, -2.0, -3.0),
            vec3(1.0, 2.0, 3.0),
            // ---
            vec3(0.0, 0.0, 0.0),
            vec3(3.0, 7.0, 0.0),
            vec3(-1.0, -2.0, -3.0),
            vec3(0.0, 0.0, 0.0),
        ];

        let target = BvhView::new(&buffer);

        assert_eq!(2, target.len());

        let node = target.get(0);

        assert!(!node.is_leaf());
        assert_eq!(1, node.left);
        assert_eq!(2, node.right);
        assert_eq!(vec3(-1.0, -2.0, -3.0), node.min);
        assert_eq!(vec3(1.0, 2.0, 3.0), node.max);

        let node = target.get(1);

        assert!(node.is_leaf());
        assert_eq!(vec![7, 8, 9], node.triangles().collect::<Vec<_>>());
    }

    #[test]
    #[should_panic]
    fn misaligned_buffer() {
        BvhView::new(&[Vec3::ZERO; 5]);
    }
}

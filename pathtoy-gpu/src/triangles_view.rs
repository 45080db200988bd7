use glam::Vec3;

use crate::{Triangle, TRIANGLE_STRIDE};

/// Read-only view over a flat triangle buffer; see [`Triangle`] for the
/// record layout.
#[derive(Clone, Copy, Debug)]
pub struct TrianglesView<'a> {
    buffer: &'a [Vec3],
}

impl<'a> TrianglesView<'a> {
    pub fn new(buffer: &'a [Vec3]) -> Self {
        assert!(buffer.len() % TRIANGLE_STRIDE == 0);

        Self { buffer }
    }

    /// Returns the number of triangles.
    pub fn len(&self) -> usize {
        self.buffer.len() / TRIANGLE_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn get(&self, id: u32) -> Triangle {
        let ptr = (id as usize) * TRIANGLE_STRIDE;

        *bytemuck::from_bytes(bytemuck::cast_slice(
            &self.buffer[ptr..ptr + TRIANGLE_STRIDE],
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.len()).map(|id| self.get(id as u32))
    }
}

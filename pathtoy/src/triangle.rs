use glam::Vec3;

use crate::{gpu, BoundingBox, Material, MaterialId};

/// Triangle the BVH gets built from.
///
/// The centroid is computed once, upon construction; triangles are moved
/// around (sorted) during the build, so they are identified by their position
/// in the array rather than by any handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    positions: [Vec3; 3],
    normals: [Vec3; 3],
    center: Vec3,
    material_id: MaterialId,
}

impl Triangle {
    /// Creates a flat-shaded triangle, i.e. one where all vertex normals are
    /// equal to the face normal.
    pub fn new(
        positions: [impl Into<Vec3>; 3],
        material_id: MaterialId,
    ) -> Self {
        let positions = positions.map(Into::into);
        let normal = Self::face_normal(positions);

        Self {
            positions,
            normals: [normal; 3],
            center: positions.into_iter().sum::<Vec3>() / 3.0,
            material_id,
        }
    }

    pub fn with_normals(mut self, normals: [impl Into<Vec3>; 3]) -> Self {
        self.normals = normals.map(Into::into);
        self
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.positions
    }

    pub fn normals(&self) -> [Vec3; 3] {
        self.normals
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn material_id(&self) -> MaterialId {
        self.material_id
    }

    pub fn bounds(&self) -> BoundingBox {
        self.positions.into_iter().collect()
    }

    /// Returns the normalized geometric normal (counter-clockwise winding),
    /// or zero for degenerate triangles.
    pub fn face_normal(positions: [Vec3; 3]) -> Vec3 {
        let [p0, p1, p2] = positions;

        (p1 - p0).cross(p2 - p0).normalize_or_zero()
    }

    pub(crate) fn serialize(&self, material: &Material) -> gpu::Triangle {
        let [p0, p1, p2] = self.positions;
        let [n0, n1, n2] = self.normals;
        let [m0, m1, m2, m3, m4, m5] = material.serialize();

        gpu::Triangle {
            d0: p0,
            d1: p1,
            d2: p2,
            d3: n0,
            d4: n1,
            d5: n2,
            d6: m0,
            d7: m1,
            d8: m2,
            d9: m3,
            d10: m4,
            d11: m5,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    fn target() -> Triangle {
        Triangle::new(
            [vec3(0.0, 0.0, 0.0), vec3(3.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0)],
            MaterialId::new(7),
        )
    }

    #[test]
    fn new() {
        let target = target();

        assert_eq!(vec3(1.0, 1.0, 0.0), target.center());
        assert_eq!([Vec3::Z; 3], target.normals());
        assert_eq!(MaterialId::new(7), target.material_id());
        assert_eq!(Vec3::ZERO, target.bounds().min());
        assert_eq!(vec3(3.0, 3.0, 0.0), target.bounds().max());
    }

    #[test]
    fn with_normals() {
        let target = target().with_normals([Vec3::X, Vec3::Y, Vec3::Z]);

        assert_eq!([Vec3::X, Vec3::Y, Vec3::Z], target.normals());
        assert_eq!(vec3(1.0, 1.0, 0.0), target.center());
    }

    #[test]
    fn face_normal() {
        let normal = Triangle::face_normal([
            vec3(0.0, 0.0, 0.0),
            vec3(0.0, 0.0, 2.0),
            vec3(2.0, 0.0, 0.0),
        ]);

        assert_relative_eq!(1.0, normal.y);

        // Degenerate triangles don't have a meaningful normal
        let normal = Triangle::face_normal([Vec3::ONE; 3]);

        assert_eq!(Vec3::ZERO, normal);
    }

    #[test]
    fn serialize() {
        let material = Material::default().with_emissive(vec3(1.0, 2.0, 3.0));
        let target = target().serialize(&material);

        assert_eq!(
            [Vec3::ZERO, vec3(3.0, 0.0, 0.0), vec3(0.0, 3.0, 0.0)],
            target.positions()
        );
        assert_eq!([Vec3::Z; 3], target.normals());
        assert_eq!(vec3(1.0, 2.0, 3.0), target.emissive());
        assert_eq!(Vec3::ONE, target.base_color());
        assert_eq!(1.5, target.ior());
    }
}

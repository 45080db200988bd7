use glam::{vec3, Affine3A, Mat4, Vec3};

use crate::{BoundingBox, MaterialId, Triangle};

/// Triangle soup, expressed in the mesh's local space.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    triangles: Vec<MeshTriangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<MeshTriangle>) -> Self {
        Self { triangles }
    }

    /// Creates a mesh out of a flat list of vertices, where each consecutive
    /// three form a triangle; trailing vertices that don't form a complete
    /// triangle are ignored.
    pub fn from_positions(positions: impl IntoIterator<Item = Vec3>) -> Self {
        let positions: Vec<_> = positions.into_iter().collect();

        let triangles = positions
            .chunks_exact(3)
            .map(|vertices| {
                MeshTriangle::default().with_positions([
                    vertices[0],
                    vertices[1],
                    vertices[2],
                ])
            })
            .collect();

        Self { triangles }
    }

    /// Creates a 2x2 quad lying on the XZ plane, centered at the origin and
    /// facing +Y.
    pub fn quad() -> Self {
        let a = vec3(-1.0, 0.0, -1.0);
        let b = vec3(1.0, 0.0, -1.0);
        let c = vec3(1.0, 0.0, 1.0);
        let d = vec3(-1.0, 0.0, 1.0);

        Self::from_positions([a, c, b, a, d, c])
    }

    pub fn triangles(&self) -> &[MeshTriangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn bounds(&self) -> BoundingBox {
        self.triangles
            .iter()
            .flat_map(|triangle| triangle.positions())
            .collect()
    }

    /// Transforms this mesh into world space, yielding triangles ready to be
    /// fed into the BVH builder.
    pub(crate) fn build(
        &self,
        xform: Affine3A,
        material_id: MaterialId,
    ) -> impl Iterator<Item = Triangle> + '_ {
        // Transforming normals requires inversing and transposing the matrix
        // in order to get correct results under non-uniform scaling
        let xform_inv_trans = Mat4::from(xform.inverse()).transpose();

        self.triangles.iter().map(move |triangle| {
            triangle.build(xform, xform_inv_trans, material_id)
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshTriangle {
    positions: [Vec3; 3],
    normals: Option<[Vec3; 3]>,
}

impl MeshTriangle {
    pub fn with_positions(mut self, positions: [impl Into<Vec3>; 3]) -> Self {
        self.positions = positions.map(Into::into);
        self
    }

    pub fn with_normals(mut self, normals: [impl Into<Vec3>; 3]) -> Self {
        self.normals = Some(normals.map(Into::into));
        self
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.positions
    }

    pub fn normals(&self) -> Option<[Vec3; 3]> {
        self.normals
    }

    fn build(
        &self,
        xform: Affine3A,
        xform_inv_trans: Mat4,
        material_id: MaterialId,
    ) -> Triangle {
        let positions = self
            .positions
            .map(|vertex| xform.transform_point3(vertex));

        let triangle = Triangle::new(positions, material_id);

        if let Some(normals) = self.normals {
            triangle.with_normals(normals.map(|normal| {
                xform_inv_trans.transform_vector3(normal).normalize_or_zero()
            }))
        } else {
            triangle
        }
    }
}

use glam::Affine3A;

use crate::{MaterialId, Mesh, Triangle};

/// Mesh placed in the world with a material attached.
#[derive(Clone, Debug)]
pub struct Instance {
    mesh: Mesh,
    material_id: MaterialId,
    xform: Affine3A,
}

impl Instance {
    pub fn new(mesh: Mesh, material_id: MaterialId, xform: Affine3A) -> Self {
        Self {
            mesh,
            material_id,
            xform,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn material_id(&self) -> MaterialId {
        self.material_id
    }

    pub fn xform(&self) -> Affine3A {
        self.xform
    }

    pub(crate) fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.mesh.build(self.xform, self.material_id)
    }
}

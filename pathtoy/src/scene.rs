use glam::Vec3;
use thiserror::Error;

use crate::{
    gpu, utils, Bvh, BvhError, BvhNodeId, BvhOptions, Instance, Material,
    MaterialId, Materials, Triangle,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown material: {0:?}")]
    UnknownMaterial(MaterialId),

    #[error("built an invalid BVH: {0}")]
    InvalidBvh(#[from] BvhError),
}

/// Materials and mesh instances that get compiled into the flat buffers
/// consumed by the path tracer.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    materials: Materials,
    instances: Vec<Instance>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.add(material)
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// Adds a mesh instance; its material must've been already added.
    pub fn add_instance(
        &mut self,
        instance: Instance,
    ) -> Result<(), SceneError> {
        if !self.materials.has(instance.material_id()) {
            return Err(SceneError::UnknownMaterial(instance.material_id()));
        }

        self.instances.push(instance);

        Ok(())
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Returns world-space triangles of all instances, in insertion order.
    pub fn triangles(&self) -> Vec<Triangle> {
        self.instances
            .iter()
            .flat_map(|instance| instance.triangles())
            .collect()
    }

    pub fn build(
        &self,
        options: BvhOptions,
    ) -> Result<SceneBuffers, SceneError> {
        let mut triangles = self.triangles();
        let bvh = Bvh::build(&mut triangles, options);

        if cfg!(debug_assertions) {
            bvh.validate(&triangles)?;
        }

        let triangle_attribs = utils::measure("triangles-serialize", || {
            serialize_triangles(&triangles, &self.materials)
        })?;

        let bvh_nodes = bvh.serialize();

        log::info!(
            "Scene built; instances={}, materials={}, triangles={}, nodes={}",
            self.instances.len(),
            self.materials.len(),
            triangles.len(),
            bvh.nodes().len(),
        );

        Ok(SceneBuffers {
            triangles,
            bvh,
            triangle_attribs,
            bvh_nodes,
        })
    }
}

/// Flattens triangles (together with their materials) into the buffer
/// consumed by [`gpu::TrianglesView`] - twelve records per triangle.
pub fn serialize_triangles(
    triangles: &[Triangle],
    materials: &Materials,
) -> Result<Vec<Vec3>, SceneError> {
    let mut out = Vec::with_capacity(triangles.len() * gpu::TRIANGLE_STRIDE);

    for triangle in triangles {
        let material = materials
            .get(triangle.material_id())
            .ok_or(SceneError::UnknownMaterial(triangle.material_id()))?;

        let triangle = triangle.serialize(material);

        out.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(
            &triangle,
        )));
    }

    Ok(out)
}

/// Output of [`Scene::build()`].
#[derive(Clone, Debug)]
pub struct SceneBuffers {
    triangles: Vec<Triangle>,
    bvh: Bvh,
    triangle_attribs: Vec<Vec3>,
    bvh_nodes: Vec<Vec3>,
}

impl SceneBuffers {
    /// Returns triangles in the order the tree refers to them.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn bvh(&self) -> &Bvh {
        &self.bvh
    }

    pub fn triangle_attribs(&self) -> &[Vec3] {
        &self.triangle_attribs
    }

    pub fn bvh_nodes(&self) -> &[Vec3] {
        &self.bvh_nodes
    }

    pub fn root(&self) -> Option<BvhNodeId> {
        self.bvh.root()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_attribs.len() / gpu::TRIANGLE_STRIDE
    }

    pub fn triangles_view(&self) -> gpu::TrianglesView<'_> {
        gpu::TrianglesView::new(&self.triangle_attribs)
    }

    pub fn bvh_view(&self) -> gpu::BvhView<'_> {
        gpu::BvhView::new(&self.bvh_nodes)
    }
}

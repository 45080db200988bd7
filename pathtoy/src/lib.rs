//! CPU side of pathtoy: turns meshes and materials into a BVH and the flat
//! buffers the path-tracing shaders read.
//!
//! ```
//! use pathtoy::{BvhOptions, Instance, Material, Mesh, Scene};
//! use glam::Affine3A;
//!
//! let mut scene = Scene::new();
//! let material_id = scene.add_material(Material::default());
//!
//! scene
//!     .add_instance(Instance::new(Mesh::quad(), material_id, Affine3A::IDENTITY))
//!     .unwrap();
//!
//! let buffers = scene.build(BvhOptions::default()).unwrap();
//!
//! assert_eq!(2, buffers.triangle_count());
//! assert_eq!(pathtoy::gpu::BVH_NODE_STRIDE, buffers.bvh_nodes().len());
//! ```

mod bvh;
mod instance;
mod material;
mod materials;
mod mesh;
mod scene;
mod triangle;
mod utils;

#[cfg(test)]
mod test_utils;

pub use pathtoy_gpu as gpu;

pub use self::bvh::*;
pub use self::instance::*;
pub use self::material::*;
pub use self::materials::*;
pub use self::mesh::*;
pub use self::scene::*;
pub use self::triangle::*;
pub use self::utils::*;

//! Flat buffer layout shared by pathtoy's BVH builder and the path-tracing
//! shaders, together with a CPU rendition of the shader-side traversal.
//!
//! Both buffers are plain arrays of `Vec3`:
//!
//! - the BVH buffer holds [`BVH_NODE_STRIDE`] records per node, in node-array
//!   order (see [`BvhView`]),
//! - the triangle buffer holds [`TRIANGLE_STRIDE`] records per triangle, in
//!   the order the builder left the triangles in (see [`TrianglesView`]).

mod bvh_view;
mod hit;
mod ray;
mod triangle;
mod triangles_view;

pub use self::bvh_view::*;
pub use self::hit::*;
pub use self::ray::*;
pub use self::triangle::*;
pub use self::triangles_view::*;

/// Number of `Vec3` records occupied by a single BVH node.
pub const BVH_NODE_STRIDE: usize = 4;

/// Number of `Vec3` records occupied by a single triangle.
///
/// Shaders compute the triangle count as `buffer.len() / TRIANGLE_STRIDE`, so
/// changing the record count or order breaks them silently.
pub const TRIANGLE_STRIDE: usize = 12;

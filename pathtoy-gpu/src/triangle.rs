use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::{Hit, Ray};

/// Triangle as laid out in the GPU buffer - twelve `Vec3` records:
///
/// ```text
/// [0..3]  = positions
/// [3..6]  = normals
/// [6]     = emissive
/// [7]     = base color
/// [8]     = (subsurface, metallic, specular)
/// [9]     = (specular tint, roughness, anisotropic)
/// [10]    = (sheen, sheen tint, clearcoat)
/// [11]    = (clearcoat gloss, ior, transmission)
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Triangle {
    pub d0: Vec3,
    pub d1: Vec3,
    pub d2: Vec3,
    pub d3: Vec3,
    pub d4: Vec3,
    pub d5: Vec3,
    pub d6: Vec3,
    pub d7: Vec3,
    pub d8: Vec3,
    pub d9: Vec3,
    pub d10: Vec3,
    pub d11: Vec3,
}

impl Triangle {
    pub fn position0(&self) -> Vec3 {
        self.d0
    }

    pub fn position1(&self) -> Vec3 {
        self.d1
    }

    pub fn position2(&self) -> Vec3 {
        self.d2
    }

    pub fn normal0(&self) -> Vec3 {
        self.d3
    }

    pub fn normal1(&self) -> Vec3 {
        self.d4
    }

    pub fn normal2(&self) -> Vec3 {
        self.d5
    }

    pub fn positions(&self) -> [Vec3; 3] {
        [self.position0(), self.position1(), self.position2()]
    }

    pub fn normals(&self) -> [Vec3; 3] {
        [self.normal0(), self.normal1(), self.normal2()]
    }

    pub fn emissive(&self) -> Vec3 {
        self.d6
    }

    pub fn base_color(&self) -> Vec3 {
        self.d7
    }

    pub fn subsurface(&self) -> f32 {
        self.d8.x
    }

    pub fn metallic(&self) -> f32 {
        self.d8.y
    }

    pub fn specular(&self) -> f32 {
        self.d8.z
    }

    pub fn specular_tint(&self) -> f32 {
        self.d9.x
    }

    pub fn roughness(&self) -> f32 {
        self.d9.y
    }

    pub fn anisotropic(&self) -> f32 {
        self.d9.z
    }

    pub fn sheen(&self) -> f32 {
        self.d10.x
    }

    pub fn sheen_tint(&self) -> f32 {
        self.d10.y
    }

    pub fn clearcoat(&self) -> f32 {
        self.d10.z
    }

    pub fn clearcoat_gloss(&self) -> f32 {
        self.d11.x
    }

    pub fn ior(&self) -> f32 {
        self.d11.y
    }

    pub fn transmission(&self) -> f32 {
        self.d11.z
    }

    pub fn center(&self) -> Vec3 {
        self.positions().into_iter().sum::<Vec3>() / 3.0
    }

    /// Checks whether `ray` hits this triangle closer than `hit.distance` and,
    /// if so, updates `hit`.
    ///
    /// Uses Möller-Trumbore.
    pub fn hit(&self, ray: Ray, hit: &mut Hit) -> bool {
        let v0v1 = self.position1() - self.position0();
        let v0v2 = self.position2() - self.position0();

        // ---

        let pvec = ray.direction().cross(v0v2);
        let det = v0v1.dot(pvec);

        if det.abs() < f32::EPSILON {
            return false;
        }

        // ---

        let inv_det = 1.0 / det;
        let tvec = ray.origin() - self.position0();
        let u = tvec.dot(pvec) * inv_det;
        let qvec = tvec.cross(v0v1);
        let v = ray.direction().dot(qvec) * inv_det;
        let distance = v0v2.dot(qvec) * inv_det;

        if (u < 0.0)
            | (u > 1.0)
            | (v < 0.0)
            | (u + v > 1.0)
            | (distance <= 0.0)
            | (distance >= hit.distance)
        {
            return false;
        }

        let normal = u * self.normal1()
            + v * self.normal2()
            + (1.0 - u - v) * self.normal0();

        hit.distance = distance;
        hit.point = ray.at(distance - Hit::DISTANCE_OFFSET);
        hit.normal = normal.normalize_or_zero();

        true
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    fn target() -> Triangle {
        Triangle {
            d0: vec3(-1.0, -1.0, 0.0),
            d1: vec3(1.0, -1.0, 0.0),
            d2: vec3(0.0, 1.0, 0.0),
            d3: Vec3::Z,
            d4: Vec3::Z,
            d5: Vec3::Z,
            ..Default::default()
        }
    }

    #[test]
    fn stride() {
        assert_eq!(
            crate::TRIANGLE_STRIDE * std::mem::size_of::<Vec3>(),
            std::mem::size_of::<Triangle>()
        );
    }

    #[test]
    fn hit() {
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
        let mut hit = Hit::none();

        assert!(target().hit(ray, &mut hit));
        assert_relative_eq!(5.0, hit.distance);
        assert_eq!(Vec3::Z, hit.normal);
    }

    #[test]
    fn hit_farther_than_current_best() {
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        let mut hit = Hit {
            distance: 4.0,
            ..Hit::none()
        };

        assert!(!target().hit(ray, &mut hit));
        assert_eq!(4.0, hit.distance);
    }

    #[test]
    fn miss() {
        let mut hit = Hit::none();

        // Passes next to the triangle
        let ray = Ray::new(vec3(2.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));

        assert!(!target().hit(ray, &mut hit));

        // Points away from the triangle
        let ray = Ray::new(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 1.0));

        assert!(!target().hit(ray, &mut hit));

        // Parallel to the triangle
        let ray = Ray::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 0.0));

        assert!(!target().hit(ray, &mut hit));
        assert!(hit.is_none());
    }
}

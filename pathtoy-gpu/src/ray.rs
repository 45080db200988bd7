use core::mem;

use glam::Vec3;

use crate::{BvhView, Hit, TrianglesView};

#[derive(Copy, Clone, Debug, Default)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    inv_direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: 1.0 / direction,
        }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Traces this ray and returns its nearest hit, together with the number
    /// of visited nodes.
    pub fn trace_nearest(
        self,
        triangles: TrianglesView,
        bvh: BvhView,
    ) -> (Hit, u32) {
        let mut hit = Hit::none();

        let traversed_nodes =
            self.trace(triangles, bvh, TracingMode::Nearest, &mut hit);

        (hit, traversed_nodes)
    }

    /// Traces this ray and returns whether it hits anything up to the given
    /// distance.
    pub fn trace_any(
        self,
        triangles: TrianglesView,
        bvh: BvhView,
        max_distance: f32,
    ) -> bool {
        let mut hit = Hit {
            distance: max_distance,
            ..Hit::none()
        };

        self.trace(triangles, bvh, TracingMode::Any, &mut hit);

        hit.distance < max_distance
    }

    fn trace(
        self,
        triangles: TrianglesView,
        bvh: BvhView,
        mode: TracingMode,
        hit: &mut Hit,
    ) -> u32 {
        if bvh.is_empty() {
            return 0;
        }

        let root = bvh.get(0);

        if self.distance_to_node(root.min, root.max) >= hit.distance {
            return 1;
        }

        let mut traversed_nodes = 0;

        // Id of the currently processed node; the root always lives at zero
        let mut node_id = 0;

        // Nodes yet-to-be-visited
        let mut stack = Vec::with_capacity(32);

        loop {
            traversed_nodes += 1;

            let node = bvh.get(node_id);

            if node.is_leaf() {
                let mut got_hit = false;

                for triangle_id in node.triangles() {
                    if triangles.get(triangle_id).hit(self, hit) {
                        hit.triangle_id = triangle_id;
                        got_hit = true;
                    }
                }

                if got_hit && mode == TracingMode::Any {
                    break;
                }
            } else {
                let left = bvh.get(node.left);
                let right = bvh.get(node.right);

                let mut near_id = node.left;
                let mut far_id = node.right;

                let mut near_distance =
                    self.distance_to_node(left.min, left.max);

                let mut far_distance =
                    self.distance_to_node(right.min, right.max);

                if far_distance < near_distance {
                    mem::swap(&mut near_id, &mut far_id);
                    mem::swap(&mut near_distance, &mut far_distance);
                }

                // Visit the closer child first - it's more likely to contain
                // the nearest triangle, after which the farther child can be
                // culled by distance.
                if far_distance < hit.distance {
                    stack.push(far_id);
                }

                if near_distance < hit.distance {
                    node_id = near_id;
                    continue;
                }
            }

            // Either we've just tested a leaf or both children got culled -
            // pop the next candidate; the nodes pushed earlier might have
            // become farther than our current best in the meantime, so check
            // them once again.
            let mut next = None;

            while let Some(candidate_id) = stack.pop() {
                let candidate = bvh.get(candidate_id);

                if self.distance_to_node(candidate.min, candidate.max)
                    < hit.distance
                {
                    next = Some(candidate_id);
                    break;
                }
            }

            if let Some(next) = next {
                node_id = next;
            } else {
                break;
            }
        }

        traversed_nodes
    }

    /// Returns distance to the given AABB (zero when inside), or `f32::MAX`
    /// on a miss.
    fn distance_to_node(self, aabb_min: Vec3, aabb_max: Vec3) -> f32 {
        let hit_min = (aabb_min - self.origin) * self.inv_direction;
        let hit_max = (aabb_max - self.origin) * self.inv_direction;

        let tmin = hit_min.min(hit_max).max_element().max(0.0);
        let tmax = hit_min.max(hit_max).min_element();

        if tmax >= tmin {
            tmin
        } else {
            f32::MAX
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TracingMode {
    Nearest,
    Any,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;
    use crate::Triangle;

    fn triangle(z: f32) -> Triangle {
        Triangle {
            d0: vec3(-1.0, -1.0, z),
            d1: vec3(1.0, -1.0, z),
            d2: vec3(0.0, 1.0, z),
            d3: Vec3::Z,
            d4: Vec3::Z,
            d5: Vec3::Z,
            ..Default::default()
        }
    }

    /// Hand-made tree: root with two leaves, one triangle each.
    fn scene() -> (Vec<Vec3>, Vec<Vec3>) {
        let triangles: Vec<Vec3> = [triangle(0.0), triangle(-2.0)]
            .iter()
            .flat_map(|triangle| {
                bytemuck::cast_slice::<_, Vec3>(std::slice::from_ref(triangle))
                    .to_vec()
            })
            .collect();

        let bvh = vec![
            vec3(1.0, 2.0, 0.0),
            vec3(0.0, 0.0, 0.0),
            vec3(-1.0, -1.0, -2.0),
            vec3(1.0, 1.0, 0.0),
            // ---
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(-1.0, -1.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            // ---
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(-1.0, -1.0, -2.0),
            vec3(1.0, 1.0, -2.0),
        ];

        (triangles, bvh)
    }

    #[test]
    fn trace_nearest() {
        let (triangles, bvh) = scene();
        let triangles = TrianglesView::new(&triangles);
        let bvh = BvhView::new(&bvh);

        let ray = Ray::new(vec3(0.1, 0.1, 5.0), vec3(0.0, 0.0, -1.0));
        let (hit, _) = ray.trace_nearest(triangles, bvh);

        assert!(hit.is_some());
        assert_eq!(0, hit.triangle_id);
        assert_relative_eq!(5.0, hit.distance);

        let ray = Ray::new(vec3(0.1, 0.1, -5.0), vec3(0.0, 0.0, 1.0));
        let (hit, _) = ray.trace_nearest(triangles, bvh);

        assert!(hit.is_some());
        assert_eq!(1, hit.triangle_id);
        assert_relative_eq!(3.0, hit.distance);

        let ray = Ray::new(vec3(5.1, 0.1, 5.0), vec3(0.0, 0.0, -1.0));
        let (hit, traversed_nodes) = ray.trace_nearest(triangles, bvh);

        assert!(hit.is_none());
        assert_eq!(1, traversed_nodes);
    }

    #[test]
    fn trace_any() {
        let (triangles, bvh) = scene();
        let triangles = TrianglesView::new(&triangles);
        let bvh = BvhView::new(&bvh);

        let ray = Ray::new(vec3(0.1, 0.1, 5.0), vec3(0.0, 0.0, -1.0));

        assert!(ray.trace_any(triangles, bvh, 10.0));
        assert!(!ray.trace_any(triangles, bvh, 4.0));
    }

    #[test]
    fn trace_empty() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let (hit, traversed_nodes) =
            ray.trace_nearest(TrianglesView::new(&[]), BvhView::new(&[]));

        assert!(hit.is_none());
        assert_eq!(0, traversed_nodes);
    }
}

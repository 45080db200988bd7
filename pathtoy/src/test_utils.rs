use glam::{vec3, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{MaterialId, Triangle};

/// Returns `count` unit right triangles lying next to each other on the X
/// axis, i.e. the i-th one spans `(i, 0, 0)..(i + 1, 1, 0)`.
pub fn row_of_triangles(count: usize) -> Vec<Triangle> {
    (0..count)
        .map(|i| {
            let i = i as f32;

            Triangle::new(
                [
                    vec3(i, 0.0, 0.0),
                    vec3(i + 1.0, 0.0, 0.0),
                    vec3(i, 1.0, 0.0),
                ],
                MaterialId::new(0),
            )
        })
        .collect()
}

/// Returns `count` small triangles scattered around a 100x100x100 cube.
pub fn random_triangles(seed: u64, count: usize) -> Vec<Triangle> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let origin = random_vec3(&mut rng) * 100.0;

            let positions = [
                origin,
                origin + random_vec3(&mut rng),
                origin + random_vec3(&mut rng),
            ];

            Triangle::new(positions, MaterialId::new(0))
        })
        .collect()
}

fn random_vec3(rng: &mut impl Rng) -> Vec3 {
    vec3(rng.gen(), rng.gen(), rng.gen())
}

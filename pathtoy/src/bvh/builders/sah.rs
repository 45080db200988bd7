//! Full SAH builder: for every axis, sorts the triangles by their centroids
//! and evaluates every possible split position, picking the one with the
//! lowest surface area heuristic cost.
//!
//! Thanks to:
//! https://jacco.ompf2.com/2022/04/13/how-to-build-a-bvh-part-1-basics/.

use std::{panic, thread};

use super::sort;
use crate::{Axis, BoundingBox, BvhOptions, Triangle};

/// Minimum number of triangles a node must contain for its axes to be
/// evaluated on separate threads; smaller nodes aren't worth spawning threads
/// for.
const PARALLEL_THRESHOLD: usize = 4096;

pub(super) fn split(
    triangles: &mut [Triangle],
    _: BoundingBox,
    options: &BvhOptions,
) -> usize {
    let plane = find_splitting_plane(triangles, options.parallel());

    log::trace!(
        "Splitting {} triangles; axis={:?}, left={}, cost={}",
        triangles.len(),
        plane.axis,
        plane.left_len,
        plane.cost,
    );

    sort(triangles, plane.axis);

    plane.left_len
}

fn find_splitting_plane(
    triangles: &mut [Triangle],
    parallel: bool,
) -> SplittingPlane {
    let mut best = SplittingPlane::fallback(triangles.len());

    if parallel && triangles.len() >= PARALLEL_THRESHOLD {
        let triangles = &*triangles;

        // Each axis works on its own copy; sorting is independent of the
        // input's order (see `Axis::compare()`), so this yields the same
        // result as the sequential variant below.
        let planes = thread::scope(|s| {
            let handles = Axis::ALL.map(|axis| {
                s.spawn(move || {
                    let mut triangles = triangles.to_vec();

                    sort(&mut triangles, axis);
                    evaluate(&triangles, axis)
                })
            });

            handles.map(|handle| match handle.join() {
                Ok(plane) => plane,
                Err(err) => panic::resume_unwind(err),
            })
        });

        for plane in planes {
            best.consider(plane);
        }
    } else {
        for axis in Axis::all() {
            sort(triangles, axis);
            best.consider(evaluate(triangles, axis));
        }
    }

    best
}

/// Evaluates all split positions of `triangles`, which must be already sorted
/// along `axis`.
fn evaluate(triangles: &[Triangle], axis: Axis) -> SplittingPlane {
    let len = triangles.len();

    // left_bounds[i] = bounds of triangles[..=i]
    let mut left_bounds = Vec::with_capacity(len);
    let mut bounds = BoundingBox::default();

    for triangle in triangles {
        bounds += triangle.bounds();
        left_bounds.push(bounds);
    }

    // right_bounds[i] = bounds of triangles[i..]
    let mut right_bounds = vec![BoundingBox::default(); len];
    let mut bounds = BoundingBox::default();

    for (idx, triangle) in triangles.iter().enumerate().rev() {
        bounds += triangle.bounds();
        right_bounds[idx] = bounds;
    }

    let mut best = SplittingPlane {
        axis,
        left_len: 1,
        cost: f32::INFINITY,
    };

    for idx in 0..(len - 1) {
        let left_len = idx + 1;
        let right_len = len - left_len;

        let cost = left_bounds[idx].surface_area() * (left_len as f32)
            + right_bounds[idx + 1].surface_area() * (right_len as f32);

        best.consider(SplittingPlane {
            axis,
            left_len,
            cost,
        });
    }

    best
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SplittingPlane {
    axis: Axis,
    left_len: usize,
    cost: f32,
}

impl SplittingPlane {
    /// Plane used when none of the candidates has a finite cost (e.g. because
    /// the extents overflow): a median split along X.
    fn fallback(len: usize) -> Self {
        Self {
            axis: Axis::X,
            left_len: (len - 1) / 2 + 1,
            cost: f32::INFINITY,
        }
    }

    /// Replaces `self` with `other` if it's strictly cheaper, so that on ties
    /// the first candidate wins.
    fn consider(&mut self, other: Self) {
        if other.cost < self.cost {
            *self = other;
        }
    }
}

use std::cmp::Ordering;
use std::ops::{Index, IndexMut};

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    /// Returns the axis along which `extent` is the longest.
    ///
    /// When extents are equal, the later axis wins (Z over Y over X).
    pub fn longest(extent: Vec3) -> Self {
        if extent.z >= extent.x && extent.z >= extent.y {
            Self::Z
        } else if extent.y >= extent.x && extent.y >= extent.z {
            Self::Y
        } else {
            Self::X
        }
    }

    /// Orders `a` and `b` by this axis first, falling back to the remaining
    /// axes (in cyclic order) when the coordinates are equal.
    ///
    /// Falling back makes sorting by an axis independent of the slice's prior
    /// order, with the sole exception of exactly equal points.
    pub fn compare(self, a: Vec3, b: Vec3) -> Ordering {
        let [a0, a1, a2] = self.rotate(a);
        let [b0, b1, b2] = self.rotate(b);

        a0.total_cmp(&b0)
            .then_with(|| a1.total_cmp(&b1))
            .then_with(|| a2.total_cmp(&b2))
    }

    fn rotate(self, p: Vec3) -> [f32; 3] {
        match self {
            Axis::X => [p.x, p.y, p.z],
            Axis::Y => [p.y, p.z, p.x],
            Axis::Z => [p.z, p.x, p.y],
        }
    }
}

impl Index<Axis> for Vec3 {
    type Output = f32;

    fn index(&self, index: Axis) -> &Self::Output {
        match index {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
        match index {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

use std::ops::{Add, AddAssign};

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// The default box is empty (`min = +inf`, `max = -inf`), so growing it by
/// any point yields a box enclosing exactly that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Vec3 {
        self.min
    }

    pub fn max(&self) -> Vec3 {
        self.max
    }

    pub fn extent(&self) -> Vec3 {
        self.max() - self.min()
    }

    pub fn center(&self) -> Vec3 {
        self.min() + self.extent() / 2.0
    }

    pub fn half_area(&self) -> f32 {
        if !self.is_set() {
            return f32::INFINITY;
        }

        let extent = self.extent();

        extent.x * extent.y + extent.y * extent.z + extent.z * extent.x
    }

    pub fn surface_area(&self) -> f32 {
        2.0 * self.half_area()
    }

    pub fn is_set(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Returns whether `other` lies entirely within this box; an empty
    /// `other` is contained in anything.
    pub fn contains(&self, other: &Self) -> bool {
        !other.is_set()
            || (self.min.cmple(other.min).all()
                && other.max.cmple(self.max).all())
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(Vec3::INFINITY, Vec3::NEG_INFINITY)
    }
}

impl Add<Vec3> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Vec3) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Vec3> for BoundingBox {
    fn add_assign(&mut self, rhs: Vec3) {
        self.min = self.min.min(rhs);
        self.max = self.max.max(rhs);
    }
}

impl FromIterator<Vec3> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

impl Add<Self> for BoundingBox {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl AddAssign<Self> for BoundingBox {
    fn add_assign(&mut self, rhs: Self) {
        self.min = self.min.min(rhs.min);
        self.max = self.max.max(rhs.max);
    }
}

impl FromIterator<Self> for BoundingBox {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Self>,
    {
        let mut this = Self::default();

        for item in iter {
            this += item;
        }

        this
    }
}

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub triangle_id: u32,
}

impl Hit {
    /// How far to move a hit point away from its surface to avoid
    /// self-intersection when casting secondary rays
    pub const DISTANCE_OFFSET: f32 = 0.001;

    pub fn none() -> Self {
        Self {
            distance: f32::MAX,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            triangle_id: u32::MAX,
        }
    }

    pub fn is_some(&self) -> bool {
        self.distance < f32::MAX
    }

    pub fn is_none(&self) -> bool {
        !self.is_some()
    }
}

impl Default for Hit {
    fn default() -> Self {
        Self::none()
    }
}

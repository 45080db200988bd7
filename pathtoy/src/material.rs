use glam::{vec3, Vec3};

/// Disney-style material, as consumed by the path-tracing shaders.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    emissive: Vec3,
    base_color: Vec3,
    subsurface: f32,
    metallic: f32,
    specular: f32,
    specular_tint: f32,
    roughness: f32,
    anisotropic: f32,
    sheen: f32,
    sheen_tint: f32,
    clearcoat: f32,
    clearcoat_gloss: f32,
    ior: f32,
    transmission: f32,
}

impl Material {
    pub fn with_emissive(mut self, emissive: impl Into<Vec3>) -> Self {
        self.emissive = emissive.into();
        self
    }

    pub fn with_base_color(mut self, base_color: impl Into<Vec3>) -> Self {
        self.base_color = base_color.into();
        self
    }

    pub fn with_subsurface(mut self, subsurface: f32) -> Self {
        self.subsurface = subsurface;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_specular(mut self, specular: f32) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_specular_tint(mut self, specular_tint: f32) -> Self {
        self.specular_tint = specular_tint;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub fn with_anisotropic(mut self, anisotropic: f32) -> Self {
        self.anisotropic = anisotropic;
        self
    }

    pub fn with_sheen(mut self, sheen: f32) -> Self {
        self.sheen = sheen;
        self
    }

    pub fn with_sheen_tint(mut self, sheen_tint: f32) -> Self {
        self.sheen_tint = sheen_tint;
        self
    }

    pub fn with_clearcoat(mut self, clearcoat: f32) -> Self {
        self.clearcoat = clearcoat;
        self
    }

    pub fn with_clearcoat_gloss(mut self, clearcoat_gloss: f32) -> Self {
        self.clearcoat_gloss = clearcoat_gloss;
        self
    }

    pub fn with_ior(mut self, ior: f32) -> Self {
        self.ior = ior;
        self
    }

    pub fn with_transmission(mut self, transmission: f32) -> Self {
        self.transmission = transmission;
        self
    }

    pub fn emissive(&self) -> Vec3 {
        self.emissive
    }

    pub fn base_color(&self) -> Vec3 {
        self.base_color
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive.cmpgt(Vec3::ZERO).any()
    }

    /// Returns the six records this material occupies within each of its
    /// triangles' attributes.
    pub(crate) fn serialize(&self) -> [Vec3; 6] {
        [
            self.emissive,
            self.base_color,
            vec3(self.subsurface, self.metallic, self.specular),
            vec3(self.specular_tint, self.roughness, self.anisotropic),
            vec3(self.sheen, self.sheen_tint, self.clearcoat),
            vec3(self.clearcoat_gloss, self.ior, self.transmission),
        ]
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emissive: Vec3::ZERO,
            base_color: Vec3::ONE,
            subsurface: 0.0,
            metallic: 0.0,
            specular: 0.0,
            specular_tint: 0.0,
            roughness: 0.0,
            anisotropic: 0.0,
            sheen: 0.0,
            sheen_tint: 0.0,
            clearcoat: 0.0,
            clearcoat_gloss: 0.0,
            ior: 1.5,
            transmission: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(u32);

impl MaterialId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

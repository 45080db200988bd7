use std::ops::Index;

use crate::{Material, MaterialId};

/// Material table owned by the scene; triangles refer to its entries through
/// [`MaterialId`].
#[derive(Clone, Debug, Default)]
pub struct Materials {
    materials: Vec<Material>,
}

impl Materials {
    pub fn add(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);

        MaterialId::new((self.materials.len() - 1) as u32)
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.get() as usize)
    }

    pub fn has(&self, id: MaterialId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MaterialId, &Material)> + '_ {
        self.materials
            .iter()
            .enumerate()
            .map(|(id, material)| (MaterialId::new(id as u32), material))
    }
}

impl Index<MaterialId> for Materials {
    type Output = Material;

    fn index(&self, id: MaterialId) -> &Self::Output {
        &self.materials[id.get() as usize]
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn smoke() {
        let mut target = Materials::default();

        assert!(target.is_empty());

        let red = target.add(Material::default().with_base_color(Vec3::X));
        let green = target.add(Material::default().with_base_color(Vec3::Y));

        assert_eq!(MaterialId::new(0), red);
        assert_eq!(MaterialId::new(1), green);
        assert_eq!(2, target.len());
        assert!(target.has(green));
        assert!(!target.has(MaterialId::new(2)));
        assert_eq!(Vec3::Y, target[green].base_color());

        assert_eq!(
            vec![red, green],
            target.iter().map(|(id, _)| id).collect::<Vec<_>>()
        );
    }
}

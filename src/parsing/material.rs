use serde::{Deserialize, Serialize};

use crate::{material::Material, math::Color};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialData {
    pub color: [u8; 3],
    #[serde(default)]
    pub metalness: f32,
}

impl From<MaterialData> for Material {
    fn from(data: MaterialData) -> Self {
        Material::new(Color::from(data.color), data.metalness)
    }
}

impl Default for MaterialData {
    fn default() -> Self {
        let Material { color, metalness } = Material::default();
        MaterialData {
            color: [color.r, color.g, color.b],
            metalness,
        }
    }
}

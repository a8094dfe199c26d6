use crate::math::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// base reflected color
    pub color: Color,
    /// not read by the shading model yet
    pub metalness: f32,
}

impl Material {
    pub const fn new(color: Color, metalness: f32) -> Material {
        Material { color, metalness }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(Color::rgb(0x40, 0x10, 0x10), 0.0)
    }
}

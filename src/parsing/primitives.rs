use serde::{Deserialize, Serialize};

use super::material::MaterialData;
use crate::{
    error::Error,
    geometry::{PrimitiveEnum, Sphere},
    math::Point3,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        #[serde(default)]
        material: MaterialData,
    },
}

impl PrimitiveData {
    pub fn transform(self) -> Result<PrimitiveEnum, Error> {
        match self {
            Self::Sphere {
                origin,
                radius,
                material,
            } => {
                if !radius.is_finite() || radius < 0.0 {
                    return Err(Error::InvalidPrimitive(format!(
                        "sphere at {:?} has radius {}",
                        origin, radius
                    )));
                }
                Ok(PrimitiveEnum::Sphere(Sphere::new(
                    radius,
                    Point3::from(origin),
                    material.into(),
                )))
            }
        }
    }
}

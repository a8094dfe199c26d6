use serde::{Deserialize, Serialize};

use crate::material::Material;
use crate::math::{Point3, Ray, Vec3};

mod sphere;

pub use sphere::Sphere;

/// A ray/shape hit. Only ever constructed for actual hits, misses are `None`.
#[derive(Copy, Clone, Debug)]
pub struct Intersection {
    pub time: f32,
    pub point: Point3,
    /// unit length, pointing out of the shape
    pub normal: Vec3,
    pub material: Material,
}

impl Intersection {
    pub fn new(time: f32, point: Point3, normal: Vec3, material: Material) -> Self {
        Intersection {
            time,
            point,
            normal,
            material,
        }
    }
}

/// How the selected ray parameter is turned into a hit point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HitRule {
    /// hit point is `origin + direction * t`, on the surface
    #[default]
    Corrected,
    /// reproduces the legacy viewer, which used `t / 2`
    Halved,
}

impl HitRule {
    #[inline(always)]
    pub fn apply(self, time: f32) -> f32 {
        match self {
            HitRule::Corrected => time,
            HitRule::Halved => time / 2.0,
        }
    }
}

pub trait Intersectable {
    fn intersect(&self, r: Ray, rule: HitRule) -> Option<Intersection>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
}

impl PrimitiveEnum {
    pub fn as_sphere_mut(&mut self) -> Option<&mut Sphere> {
        match self {
            PrimitiveEnum::Sphere(sphere) => Some(sphere),
        }
    }
}

impl Intersectable for PrimitiveEnum {
    fn intersect(&self, r: Ray, rule: HitRule) -> Option<Intersection> {
        match self {
            PrimitiveEnum::Sphere(sphere) => sphere.intersect(r, rule),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> Self {
        PrimitiveEnum::Sphere(sphere)
    }
}

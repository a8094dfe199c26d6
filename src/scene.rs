use ordered_float::OrderedFloat;

use crate::camera::OrthographicCamera;
use crate::geometry::{HitRule, Intersectable, Intersection, PrimitiveEnum, Sphere};
use crate::material::Material;
use crate::math::{Color, Point3, Ray, Vec3};

pub const SUBJECT_POSITION_RANGE: (f32, f32) = (-10.0, 10.0);
pub const SUBJECT_RADIUS_RANGE: (f32, f32) = (0.0, 10.0);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLamp {
    pub color: Color,
    pub intensity: f32,
    pub position: Point3,
}

impl PointLamp {
    pub fn new(color: Color, intensity: f32, position: Point3) -> PointLamp {
        PointLamp {
            color,
            intensity,
            position,
        }
    }

    /// Clamped lambertian term at `point`, scaled by the lamp intensity. Never negative.
    pub fn irradiance(&self, point: Point3, normal: Vec3) -> f32 {
        let to_light = (self.position - point).normalized();
        (normal * to_light).max(0.0) * self.intensity.max(0.0)
    }

    pub fn contribution(&self, point: Point3, normal: Vec3) -> Color {
        self.color * self.irradiance(point, normal)
    }
}

/// Vertical gradient behind the scene, `low` at uv.z = -1 and `high` at uv.z = 1.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Background {
    pub low: Color,
    pub high: Color,
}

impl Background {
    pub fn at(&self, uv: Vec3) -> Color {
        self.low.lerp(self.high, (uv.z() + 1.0) / 2.0).opaque()
    }
}

impl Default for Background {
    fn default() -> Self {
        Background {
            low: Color::rgb(0x1a, 0x1a, 0x2e),
            high: Color::rgb(0x80, 0xb3, 0xff),
        }
    }
}

/// Live-editable parameters of the subject sphere, handed over by the host each frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereParams {
    pub center: Point3,
    pub radius: f32,
}

impl SphereParams {
    pub fn clamped(self) -> SphereParams {
        let (lo, hi) = SUBJECT_POSITION_RANGE;
        let clamp = |v: f32| if v.is_nan() { 0.0 } else { v.clamp(lo, hi) };
        let (rlo, rhi) = SUBJECT_RADIUS_RANGE;
        SphereParams {
            center: Point3::new(
                clamp(self.center.x()),
                clamp(self.center.y()),
                clamp(self.center.z()),
            ),
            radius: if self.radius.is_nan() {
                rlo
            } else {
                self.radius.clamp(rlo, rhi)
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub camera: OrthographicCamera,
    pub lamp: PointLamp,
    pub background: Background,
    pub hit_rule: HitRule,
    pub primitives: Vec<PrimitiveEnum>,
}

impl Scene {
    /// The sphere the host edits live: the first one in the primitive list.
    pub fn subject(&self) -> Option<SphereParams> {
        self.primitives.iter().find_map(|p| match p {
            PrimitiveEnum::Sphere(s) => Some(SphereParams {
                center: s.origin,
                radius: s.radius,
            }),
        })
    }

    pub fn apply(&mut self, params: SphereParams) {
        let params = params.clamped();
        if let Some(sphere) = self.primitives.iter_mut().find_map(|p| p.as_sphere_mut()) {
            sphere.origin = params.center;
            sphere.radius = params.radius;
        }
    }

    /// Closest hit over every primitive.
    pub fn nearest_hit(&self, ray: Ray) -> Option<Intersection> {
        self.primitives
            .iter()
            .filter_map(|prim| prim.intersect(ray, self.hit_rule))
            .min_by_key(|isect| OrderedFloat(isect.time))
    }
}

impl Default for Scene {
    fn default() -> Self {
        let camera = OrthographicCamera {
            origin: Point3::new(0.0, -5.0, 1.0),
            direction: Vec3::y_axis(),
            side: Vec3::x_axis(),
            up: Vec3::z_axis(),
            width: 16.0,
        };
        Scene {
            camera,
            lamp: PointLamp::new(
                Color::rgb(0xc0, 0xc0, 0xa0),
                1.0,
                Point3::new(-4.0, -8.0, 8.0),
            ),
            background: Background::default(),
            hit_rule: HitRule::default(),
            primitives: vec![Sphere::new(
                2.0,
                Point3::new(2.0, 0.0, 1.0),
                Material::default(),
            )
            .into()],
        }
    }
}

use crate::geometry::{HitRule, Intersectable, Intersection};
use crate::material::Material;
use crate::math::{Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub material: Material,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, material: Material) -> Sphere {
        Sphere {
            radius,
            origin,
            material,
        }
    }

    /// a sphere with non-positive or non-finite radius never gets hit
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0 && self.radius.is_finite() && self.origin.is_finite())
    }
}

impl Intersectable for Sphere {
    fn intersect(&self, r: Ray, rule: HitRule) -> Option<Intersection> {
        if self.is_degenerate() {
            return None;
        }
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        if !(a > 0.0) || !a.is_finite() {
            // zero length or garbage direction
            return None;
        }
        let b = 2.0 * (r.direction * oc);
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if !(discriminant >= 0.0) {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let tp = (-b + discriminant_sqrt) / (2.0 * a);
        let tn = (-b - discriminant_sqrt) / (2.0 * a);
        if tp < 0.0 && tn < 0.0 {
            // entirely behind the ray
            return None;
        }
        // nearest root in front of the origin; an origin inside the sphere clamps to 0
        let time = rule.apply(tp.min(tn).max(0.0));
        let point = r.point_at_parameter(time);
        // a point at the center has no radial direction; the ray exits along its direction
        let normal = (point - self.origin)
            .try_normalized()
            .unwrap_or_else(|| r.direction.normalized());
        Some(Intersection::new(time, point, normal, self.material))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn unit_sphere_at(origin: Point3, radius: f32) -> Sphere {
        Sphere::new(radius, origin, Material::default())
    }

    fn random_unit_vector() -> Vec3 {
        loop {
            let v = Vec3::new(
                rand::random::<f32>() * 2.0 - 1.0,
                rand::random::<f32>() * 2.0 - 1.0,
                rand::random::<f32>() * 2.0 - 1.0,
            );
            if let Some(n) = v.try_normalized() {
                return n;
            }
        }
    }

    #[test]
    fn test_sphere_ray_intersection() {
        let sphere = unit_sphere_at(Point3::new(2.0, 2.0, 2.0), 2.0);
        let test_ray = Ray::new(Point3::origin(), Vec3::new(1.0, 1.0, 1.0).normalized());

        let isect = sphere
            .intersect(test_ray, HitRule::Corrected)
            .expect("ray aimed at the center must hit");
        let expected_time = 12.0f32.sqrt() - 2.0;
        assert!((isect.time - expected_time).abs() < 1e-5, "{:?}", isect);
        assert!(((isect.point - sphere.origin).norm() - 2.0).abs() < 1e-5);
        // entry point normal opposes the ray
        assert!((isect.normal * test_ray.direction + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, -10.0, 1.5), Vec3::y_axis());
        assert!(sphere.intersect(ray, HitRule::Corrected).is_none());
    }

    #[test]
    fn test_random_misses() {
        let sphere = unit_sphere_at(Point3::new(0.5, -1.0, 2.0), 1.5);
        for _ in 0..1000 {
            let direction = random_unit_vector();
            // offset the ray line sideways so it passes further than the radius from the center
            let side = direction.cross(random_unit_vector()).normalized();
            if side.norm() < 0.5 {
                continue;
            }
            let distance = sphere.radius + 0.01 + rand::random::<f32>() * 5.0;
            let along = rand::random::<f32>() * 20.0 - 10.0;
            let origin = sphere.origin + side * distance + direction * along;
            let ray = Ray::new(origin, direction);
            assert!(
                sphere.intersect(ray, HitRule::Corrected).is_none(),
                "{:?}",
                ray
            );
        }
    }

    #[test]
    fn test_random_hits_are_on_surface_with_unit_normal() {
        let sphere = unit_sphere_at(Point3::new(-1.0, 3.0, 0.5), 2.5);
        for _ in 0..1000 {
            let direction = random_unit_vector();
            let origin = sphere.origin - direction * 10.0
                + direction.cross(random_unit_vector()) * rand::random::<f32>();
            let ray = Ray::new(origin, direction);
            if let Some(isect) = sphere.intersect(ray, HitRule::Corrected) {
                assert!((isect.normal.norm() - 1.0).abs() < 1e-4, "{:?}", isect);
                assert!(
                    ((isect.point - sphere.origin).norm() - sphere.radius).abs() < 1e-3,
                    "{:?}",
                    isect
                );
                // approaching from outside, so the normal faces back at the ray
                assert!(isect.normal * direction <= 1e-4);
            }
        }
    }

    #[test]
    fn test_through_center_normals() {
        let sphere = unit_sphere_at(Point3::origin(), 2.0);
        let direction = Vec3::new(0.3, 1.0, -0.2).normalized();

        let entry = sphere
            .intersect(
                Ray::new(Point3::origin() - direction * 10.0, direction),
                HitRule::Corrected,
            )
            .unwrap();
        assert!((entry.normal * direction + 1.0).abs() < 1e-5);
        assert!((entry.time - 8.0).abs() < 1e-4);

        // from inside, t clamps to zero and the normal points along the ray
        let exit = sphere
            .intersect(
                Ray::new(Point3::origin() + direction * 1.5, direction),
                HitRule::Corrected,
            )
            .unwrap();
        assert_eq!(exit.time, 0.0);
        assert!((exit.normal * direction - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_tangent() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(1.0, -5.0, 0.0), Vec3::y_axis());
        let isect = sphere.intersect(ray, HitRule::Corrected).unwrap();
        assert!((isect.time - 5.0).abs() < 1e-5);
        assert!((isect.normal - Vec3::x_axis()).norm() < 1e-5);
    }

    #[test]
    fn test_origin_inside() {
        let sphere = unit_sphere_at(Point3::origin(), 3.0);
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::y_axis());
        let isect = sphere.intersect(ray, HitRule::Corrected).unwrap();
        assert_eq!(isect.time, 0.0);
        assert_eq!(isect.point, ray.origin);
        assert!((isect.normal - Vec3::y_axis()).norm() < 1e-6);
    }

    #[test]
    fn test_origin_at_center() {
        let center = Point3::new(2.0, -5.0, 1.0);
        let sphere = unit_sphere_at(center, 2.0);
        for rule in [HitRule::Corrected, HitRule::Halved] {
            let isect = sphere.intersect(Ray::new(center, Vec3::y_axis()), rule).unwrap();
            assert_eq!(isect.time, 0.0);
            assert!((isect.normal.norm() - 1.0).abs() < 1e-6, "{:?}", isect);
            assert!((isect.normal - Vec3::y_axis()).norm() < 1e-6);
        }
        let slanted = Vec3::new(0.0, 3.0, 4.0);
        let isect = sphere
            .intersect(Ray::new(center, slanted), HitRule::Corrected)
            .unwrap();
        assert!((isect.normal - Vec3::new(0.0, 0.6, 0.8)).norm() < 1e-6);
    }

    #[test]
    fn test_pointing_away() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), Vec3::y_axis());
        assert!(sphere.intersect(ray, HitRule::Corrected).is_none());
    }

    #[test]
    fn test_zero_direction() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let outside = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::zero());
        let inside = Ray::new(Point3::origin(), Vec3::zero());
        assert!(sphere.intersect(outside, HitRule::Corrected).is_none());
        assert!(sphere.intersect(inside, HitRule::Corrected).is_none());
    }

    #[test]
    fn test_degenerate_radius() {
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::y_axis());
        for radius in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let sphere = unit_sphere_at(Point3::origin(), radius);
            assert!(sphere.is_degenerate());
            assert!(sphere.intersect(ray, HitRule::Corrected).is_none());
        }
    }

    #[test]
    fn test_non_unit_direction() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 4.0, 0.0));
        let isect = sphere.intersect(ray, HitRule::Corrected).unwrap();
        assert!((isect.time - 1.0).abs() < 1e-5);
        assert!((isect.point - Point3::new(0.0, -1.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_halved_rule() {
        let sphere = unit_sphere_at(Point3::origin(), 1.0);
        let ray = Ray::new(Point3::new(0.0, -5.0, 0.0), Vec3::y_axis());
        let corrected = sphere.intersect(ray, HitRule::Corrected).unwrap();
        let halved = sphere.intersect(ray, HitRule::Halved).unwrap();
        assert!((corrected.time - 4.0).abs() < 1e-5);
        assert!((halved.time - 2.0).abs() < 1e-5);
        assert!((halved.point - Point3::new(0.0, -3.0, 0.0)).norm() < 1e-5);
        assert!((halved.normal.norm() - 1.0).abs() < 1e-5);
    }
}

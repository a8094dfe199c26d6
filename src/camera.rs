use crate::error::Error;
use crate::math::{Point3, Ray, Vec3};

/// Camera with parallel rays. Only the ray origin varies across the image plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthographicCamera {
    pub origin: Point3,
    pub direction: Vec3,
    pub side: Vec3,
    pub up: Vec3,
    pub width: f32,
}

impl OrthographicCamera {
    pub fn new(origin: Point3, facing: Vec3, width: f32) -> Result<OrthographicCamera, Error> {
        let direction = facing
            .try_normalized()
            .ok_or(Error::DegenerateCamera(facing.as_array()))?;
        // world z is up unless we're looking straight along it
        let mut side = direction.cross(Vec3::z_axis());
        if side.norm_squared() < 1e-12 {
            side = Vec3::x_axis();
        }
        let side = side.normalized();
        let up = side.cross(direction).normalized();
        Ok(OrthographicCamera {
            origin,
            direction,
            side,
            up,
            width,
        })
    }

    /// Half extents of the image plane for a viewport, as (side, 0, up).
    ///
    /// a zero height viewport has an aspect ratio of 0, which collapses the vertical extent
    pub fn size_for(&self, width: usize, height: usize) -> Vec3 {
        let aspect_ratio = if height != 0 {
            width as f32 / height as f32
        } else {
            0.0
        };
        let vertical = if aspect_ratio > 0.0 {
            self.width / aspect_ratio
        } else {
            0.0
        };
        Vec3::new(self.width, 0.0, vertical)
    }

    /// `uv` is in [-1, 1] on x and z, as produced by `pixel_to_uv`.
    pub fn get_ray(&self, uv: Vec3, size: Vec3) -> Ray {
        let offset = size.hadamard(uv);
        let origin = self.origin + self.side * offset.x() + self.up * offset.z();
        Ray::new(origin, self.direction)
    }
}

use nalgebra::Vector3;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Copy, Clone, PartialEq)]
pub struct Point3(pub Vector3<f32>);
#[derive(Copy, Clone, PartialEq)]
pub struct Vec3(pub Vector3<f32>);

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3(Vector3::new(x, y, z))
    }
    pub fn origin() -> Point3 {
        Point3(Vector3::zeros())
    }
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Point3 {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.0.z
    }
    pub fn as_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Point3::origin()
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, other: Vec3) -> Point3 {
        Point3(self.0 + other.0)
    }
}

impl AddAssign<Vec3> for Point3 {
    fn add_assign(&mut self, other: Vec3) {
        self.0 += other.0
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, other: Vec3) -> Point3 {
        Point3(self.0 - other.0)
    }
}

impl SubAssign<Vec3> for Point3 {
    fn sub_assign(&mut self, other: Vec3) {
        self.0 -= other.0
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, other: Point3) -> Vec3 {
        Vec3(self.0 - other.0)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(other: [f32; 3]) -> Point3 {
        Point3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Point3 {
        Point3(v.0)
    }
}

impl fmt::Debug for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vec3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3(Vector3::new(x, y, z))
    }
    pub fn zero() -> Vec3 {
        Vec3(Vector3::zeros())
    }
    pub fn x_axis() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
    pub fn y_axis() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }
    pub fn z_axis() -> Vec3 {
        Vec3::new(0.0, 0.0, 1.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|e| e.is_finite())
    }
}

impl Vec3 {
    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0.x
    }
    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0.y
    }
    #[inline(always)]
    pub fn z(&self) -> f32 {
        self.0.z
    }
    pub fn as_array(&self) -> [f32; 3] {
        [self.x(), self.y(), self.z()]
    }
    pub fn cross(&self, other: Vec3) -> Self {
        Vec3(self.0.cross(&other.0))
    }

    /// component-wise product, used to scale a uv coordinate into camera extents
    pub fn hadamard(&self, other: Vec3) -> Self {
        Vec3(self.0.component_mul(&other.0))
    }

    pub fn norm_squared(&self) -> f32 {
        self.0.norm_squared()
    }

    pub fn norm(&self) -> f32 {
        self.0.norm()
    }

    /// `None` when the vector has zero (or non-finite) length.
    pub fn try_normalized(&self) -> Option<Self> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Some(Vec3(self.0 / norm))
        } else {
            None
        }
    }

    /// Unit vector in the same direction. A zero vector normalizes to the zero vector.
    pub fn normalized(&self) -> Self {
        self.try_normalized().unwrap_or_else(Vec3::zero)
    }
}

impl Default for Vec3 {
    fn default() -> Self {
        Vec3::zero()
    }
}

// dot product
impl Mul for Vec3 {
    type Output = f32;
    fn mul(self, other: Vec3) -> f32 {
        self.0.dot(&other.0)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        Vec3(self.0 * other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        Vec3(other.0 * self)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    fn div(self, other: f32) -> Vec3 {
        Vec3(self.0 / other)
    }
}

// don't implement adding or subtracting floats from Vec3

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3(self.0 + other.0)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3(-self.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        self + (-other)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3(p.0)
    }
}

use std::ops::{Add, AddAssign, Div, Mul, Sub};

/// 8 bit per channel color, stored in R, G, B, A order.
///
/// Every operator saturates each channel to [0, 255] instead of wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::new(r, g, b, 0xFF)
    }
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Color = Color::new(0x00, 0x00, 0x00, 0x00);
}

impl Color {
    pub fn opaque(mut self) -> Self {
        self.a = 0xFF;
        self
    }

    #[inline(always)]
    fn map2(self, other: Color, f: impl Fn(u8, u8) -> u8) -> Color {
        Color::new(
            f(self.r, other.r),
            f(self.g, other.g),
            f(self.b, other.b),
            f(self.a, other.a),
        )
    }

    /// linear interpolation, `t` is clamped to [0, 1]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.map2(other, |a, b| {
            // float to int casts saturate
            (a as f32 + (b as f32 - a as f32) * t).round() as u8
        })
    }

    pub fn as_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// packed as 0x00RRGGBB, the layout minifb expects
    pub fn to_0rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, other: Color) -> Color {
        self.map2(other, u8::saturating_add)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Color) {
        *self = *self + other;
    }
}

impl Sub for Color {
    type Output = Color;
    fn sub(self, other: Color) -> Color {
        self.map2(other, u8::saturating_sub)
    }
}

impl Mul for Color {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        self.map2(other, u8::saturating_mul)
    }
}

// dividing by a zero channel saturates, except 0 / 0 which stays 0
impl Div for Color {
    type Output = Color;
    fn div(self, other: Color) -> Color {
        self.map2(other, |a, b| match (a, b) {
            (0, 0) => 0,
            (_, 0) => u8::MAX,
            (a, b) => a / b,
        })
    }
}

impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, other: f32) -> Color {
        // NaN casts to 0, negative results clamp to 0, large results clamp to 255
        let scale = |c: u8| (c as f32 * other).round() as u8;
        Color::new(scale(self.r), scale(self.g), scale(self.b), scale(self.a))
    }
}

impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, other: Color) -> Color {
        other * self
    }
}

impl From<[u8; 4]> for Color {
    fn from(other: [u8; 4]) -> Color {
        Color::new(other[0], other[1], other[2], other[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(other: [u8; 3]) -> Color {
        Color::rgb(other[0], other[1], other[2])
    }
}

impl From<Color> for [u8; 4] {
    fn from(c: Color) -> [u8; 4] {
        c.as_array()
    }
}

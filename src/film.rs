use std::path::Path;

use crate::error::Error;
use crate::math::Color;

/// Row-major 2D buffer of pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn empty() -> Film<T> {
        Film {
            buffer: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn at(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }

    pub fn write_at(&mut self, x: usize, y: usize, value: T) {
        debug_assert!(x < self.width && y < self.height);
        self.buffer[y * self.width + x] = value;
    }
}

impl Film<Color> {
    /// Bytes in R, G, B, A order, 4 per pixel.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.buffer.iter().flat_map(|c| c.as_array()).collect()
    }

    /// 0x00RRGGBB words for minifb.
    pub fn to_0rgb(&self) -> Vec<u32> {
        self.buffer.iter().map(Color::to_0rgb).collect()
    }

    pub fn write_png(&self, path: &Path) -> Result<(), Error> {
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.to_rgba8())
            .ok_or_else(|| {
                Error::Image(image::ImageError::Parameter(
                    image::error::ParameterError::from_kind(
                        image::error::ParameterErrorKind::DimensionMismatch,
                    ),
                ))
            })?;
        img.save(path)?;
        Ok(())
    }
}

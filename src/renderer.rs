use std::time::Instant;

use rayon::prelude::*;

use crate::camera::OrthographicCamera;
use crate::film::Film;
use crate::math::{pixel_to_uv, Color, Vec3};
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub const fn new(width: usize, height: usize) -> Viewport {
        Viewport { width, height }
    }
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderStats {
    pub elapsed_ms: f64,
    pub pixels: usize,
    /// true when the frame cache was rebuilt for this pass
    pub reallocated: bool,
}

/// Framebuffer plus the camera extents derived from its size.
/// Rebuilt only when the requested viewport differs from the current allocation.
struct FrameCache {
    viewport: Viewport,
    camera_size: Vec3,
    film: Film<Color>,
}

pub struct Renderer {
    cache: Option<FrameCache>,
    last_render_ms: f64,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

impl Renderer {
    pub fn new() -> Renderer {
        Renderer {
            cache: None,
            last_render_ms: 0.0,
        }
    }

    pub fn last_render_ms(&self) -> f64 {
        self.last_render_ms
    }

    /// The most recently rendered frame. Empty before the first pass.
    pub fn film(&self) -> Option<&Film<Color>> {
        self.cache.as_ref().map(|cache| &cache.film)
    }

    // returns whether a reallocation happened
    fn prepare(&mut self, viewport: Viewport, camera: &OrthographicCamera) -> bool {
        let camera_size = camera.size_for(viewport.width, viewport.height);
        if let Some(cache) = self.cache.as_mut().filter(|c| c.viewport == viewport) {
            // camera width may still change between frames
            cache.camera_size = camera_size;
            return false;
        }
        tracing::debug!(
            "reallocating frame cache for {}x{}",
            viewport.width,
            viewport.height
        );
        let film = if viewport.is_empty() {
            Film::empty()
        } else {
            Film::new(viewport.width, viewport.height, Color::BLACK)
        };
        self.cache = Some(FrameCache {
            viewport,
            camera_size,
            film,
        });
        true
    }

    /// Shades every pixel of `viewport` against an immutable snapshot of `scene`.
    pub fn render(&mut self, viewport: Viewport, scene: &Scene) -> RenderStats {
        let now = Instant::now();
        let reallocated = self.prepare(viewport, &scene.camera);
        let pixels = match &mut self.cache {
            Some(cache) => {
                let (w, h) = cache.film.dimensions();
                let camera_size = cache.camera_size;
                cache.film.buffer.par_iter_mut().enumerate().for_each(|(i, pixel)| {
                    let x = i % w;
                    let y = i / w;
                    *pixel = shade(x, y, w, h, camera_size, scene);
                });
                cache.film.buffer.len()
            }
            None => 0,
        };
        let elapsed_ms = now.elapsed().as_secs_f64() * 1000.0;
        self.last_render_ms = elapsed_ms;
        tracing::trace!("rendered {} pixels in {:.3}ms", pixels, elapsed_ms);
        RenderStats {
            elapsed_ms,
            pixels,
            reallocated,
        }
    }
}

/// Final color of pixel (x, y). Depends only on its own ray and the scene.
pub fn shade(x: usize, y: usize, w: usize, h: usize, camera_size: Vec3, scene: &Scene) -> Color {
    let uv = pixel_to_uv(x, y, w, h);
    let ray = scene.camera.get_ray(uv, camera_size);

    match scene.nearest_hit(ray) {
        Some(isect) => {
            let lamp = scene.lamp.contribution(isect.point, isect.normal);
            (isect.material.color + lamp).opaque()
        }
        None => scene.background.at(uv),
    }
}

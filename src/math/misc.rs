use super::Vec3;

/// Maps a pixel to normalized device coordinates in [-1, 1] on the x and z axes.
///
/// the image plane lies in xz, so the y component is always zero.
/// a zero sized viewport maps everything to the center.
pub fn pixel_to_uv(x: usize, y: usize, width: usize, height: usize) -> Vec3 {
    let u = if width == 0 {
        0.0
    } else {
        (x as f32 / width as f32 - 0.5) * 2.0
    };
    let v = if height == 0 {
        0.0
    } else {
        (y as f32 / height as f32 - 0.5) * 2.0
    };
    Vec3::new(u, 0.0, v)
}

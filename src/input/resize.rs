// Grayscale resampling for classifier inputs.
//
// Wraps the image crate's generic resampler over a single-channel f32
// buffer, so interpolated values survive as fractions instead of being
// rounded back to u8.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};

/// Bilinear-resamples one grayscale image.
///
/// `pixels` is a row-major buffer of `src_width * src_height` samples in
/// [0.0, 1.0]. The resampler clamps f32 samples to that range, so raw u8
/// intensities must be scaled down before resizing. Returns a row-major
/// buffer of `dst_width * dst_height` samples.
///
/// # Panics
/// Panics if `pixels.len() != src_width * src_height`.
pub fn resize_bilinear(
    pixels: Vec<f32>,
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
) -> Vec<f32> {
    let buf: ImageBuffer<Luma<f32>, Vec<f32>> =
        ImageBuffer::from_raw(src_width, src_height, pixels)
            .expect("pixel buffer length must equal src_width * src_height");
    imageops::resize(&buf, dst_width, dst_height, FilterType::Triangle).into_raw()
}

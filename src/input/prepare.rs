// The image preparer: one sample in, one batch-of-one tensor out.

use ndarray::{Array2, Array4, Axis};

use crate::dataset::mnist::SplitData;
use crate::input::resize::resize_bilinear;
use crate::input::spec::InputSpec;

/// Error returned when a sample index lies outside the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sample index {} is out of range for a split of {} samples",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Prepares the sample at `index` as a classifier input tensor of shape
/// `(1, 32, 32, 1)`, returning it together with the sample's label.
///
/// With `normalize` set, every tensor value lies in [0.0, 1.0]; otherwise
/// values keep the raw [0, 255] intensity range (still `f32`; the resize
/// produces fractional interpolated values either way).
pub fn prepare_input(
    split: &SplitData,
    index: usize,
    normalize: bool,
) -> Result<(Array4<f32>, u8), IndexOutOfRange> {
    prepare_with(split, index, &InputSpec::with_normalize(normalize))
}

/// Like [`prepare_input`], but with the target resolution and normalization
/// taken from an explicit [`InputSpec`]. Output shape is
/// `(1, spec.height, spec.width, 1)`.
pub fn prepare_with(
    split: &SplitData,
    index: usize,
    spec: &InputSpec,
) -> Result<(Array4<f32>, u8), IndexOutOfRange> {
    if index >= split.len() {
        return Err(IndexOutOfRange { index, len: split.len() });
    }
    let label = split.label(index);
    let (rows, cols) = split.dims();

    // Stage 1: u8 intensities → f32 in [0, 1]. The resampler clamps f32
    // samples to [0.0, 1.0], so scaling happens before the resize.
    let unit: Vec<f32> = split
        .image(index)
        .iter()
        .map(|&p| f32::from(p) / 255.0)
        .collect();

    // Stage 2: bilinear resize to the target resolution.
    let mut pixels = resize_bilinear(unit, cols as u32, rows as u32, spec.width, spec.height);

    // Stage 3: raw intensity range requested, so undo the pre-resize scaling.
    // Bilinear interpolation is linear, so this matches resizing the raw
    // values directly.
    if !spec.normalize {
        for v in &mut pixels {
            *v *= 255.0;
        }
    }

    // Stage 4: (H, W) → (H, W, 1) → (1, H, W, 1).
    let plane = Array2::from_shape_vec((spec.height as usize, spec.width as usize), pixels)
        .expect("resized buffer length must equal height * width");
    let tensor = plane.insert_axis(Axis(2)).insert_axis(Axis(0));

    Ok((tensor, label))
}

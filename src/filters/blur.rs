//! Fixed 5×5 weighted blur.
//!
//! - Convolves every channel independently with the integer kernel below.
//! - Handles borders by clamping indices (replicate), on both axes.
//! - Accumulates in `u32` and divides by the weight sum with truncation.
use crate::image::RasterImage;

/// Blur kernel: outer product of `[1, 2, 3, 2, 1]` with itself.
const BLUR_KERNEL: [[u32; 5]; 5] = [
    [1, 2, 3, 2, 1],
    [2, 4, 6, 4, 2],
    [3, 6, 9, 6, 3],
    [2, 4, 6, 4, 2],
    [1, 2, 3, 2, 1],
];

/// Sum of all 25 kernel weights.
const BLUR_WEIGHT_SUM: u32 = 81;

const RADIUS: usize = 2;

/// Clamp `center + offset - RADIUS` into `0..len`.
#[inline]
fn clamped(center: usize, offset: usize, len: usize) -> usize {
    (center + offset).saturating_sub(RADIUS).min(len - 1)
}

/// Apply the fixed 5×5 blur, returning a new image of the same geometry.
///
/// The input is left untouched. Because the weights sum to the divisor, a
/// flat-color image is a fixed point of this filter, borders included.
pub fn blur(image: &RasterImage) -> RasterImage {
    let width = image.width();
    let height = image.height();
    let channels = image.channels();
    let src = image.data();

    let mut out = image.new_like();
    let dst = out.data_mut();

    for y in 0..height {
        let sy: [usize; 5] = std::array::from_fn(|k| clamped(y, k, height));
        for x in 0..width {
            let sx: [usize; 5] = std::array::from_fn(|k| clamped(x, k, width));
            for c in 0..channels {
                let mut acc = 0u32;
                for (ky, kernel_row) in BLUR_KERNEL.iter().enumerate() {
                    let row_base = channels * (width * sy[ky]) + c;
                    for (kx, &weight) in kernel_row.iter().enumerate() {
                        acc += u32::from(src[row_base + channels * sx[kx]]) * weight;
                    }
                }
                dst[channels * (width * y + x) + c] = (acc / BLUR_WEIGHT_SUM) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{blur, BLUR_KERNEL, BLUR_WEIGHT_SUM};
    use crate::image::RasterImage;

    #[test]
    fn weights_sum_to_divisor() {
        let total: u32 = BLUR_KERNEL.iter().flatten().sum();
        assert_eq!(total, BLUR_WEIGHT_SUM);
    }

    #[test]
    fn flat_image_is_fixed_point() {
        let image = RasterImage::from_vec(7, 5, 3, vec![93; 7 * 5 * 3]).unwrap();
        let blurred = blur(&image);
        assert_eq!(blurred, image);
    }

    #[test]
    fn single_pixel_spreads_kernel_footprint() {
        // Center value equal to the weight sum makes each output pixel carry
        // its kernel weight exactly: 81 * w / 81 == w.
        let mut image = RasterImage::new(5, 5, 1).unwrap();
        let center = image.sample_index(2, 2, 0);
        image.data_mut()[center] = BLUR_WEIGHT_SUM as u8;

        let blurred = blur(&image);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(
                    u32::from(blurred.get(x, y, 0)),
                    BLUR_KERNEL[y][x],
                    "unexpected weight at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn division_truncates() {
        let mut image = RasterImage::new(5, 5, 1).unwrap();
        let center = image.sample_index(2, 2, 0);
        image.data_mut()[center] = 80;
        let blurred = blur(&image);
        // the center tap weighs 9: 80 * 9 / 81 = 8.88.. -> 8
        assert_eq!(blurred.get(2, 2, 0), 8);
    }

    #[test]
    fn borders_clamp_to_edge() {
        // A 1x1 image blurs to itself: all 25 taps clamp onto the only pixel.
        let image = RasterImage::from_vec(1, 1, 3, vec![11, 22, 33]).unwrap();
        assert_eq!(blur(&image), image);

        // Left column of a 2-wide image: taps 0..=2 clamp to column 0,
        // taps 3..=4 reach column 1. Column weights are 9 * [1,2,3,2,1].
        let image = RasterImage::from_vec(2, 1, 1, vec![0, 81]).unwrap();
        let blurred = blur(&image);
        // column 1 contributes 9 * (2 + 1) = 27 of the 81 weights
        assert_eq!(blurred.get(0, 0, 0), 27);
        // column 0 contributes 9 * (1 + 2) = 27
        assert_eq!(blurred.get(1, 0, 0), 81 - 27);
    }

    #[test]
    fn channels_do_not_bleed() {
        // Bright red field with a flat green channel: green must stay flat.
        let mut image = RasterImage::new(6, 6, 3).unwrap();
        for y in 0..6 {
            for x in 0..6 {
                let i = image.sample_index(x, y, 0);
                image.data_mut()[i] = if (x + y) % 2 == 0 { 240 } else { 10 };
                let i = image.sample_index(x, y, 1);
                image.data_mut()[i] = 55;
            }
        }
        let blurred = blur(&image);
        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(blurred.get(x, y, 1), 55);
                assert_eq!(blurred.get(x, y, 2), 0);
            }
        }
    }
}

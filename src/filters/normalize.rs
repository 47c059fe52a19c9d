//! Global linear contrast stretch.
use log::debug;
use serde::Serialize;

use crate::image::RasterImage;

/// Sample extrema observed by [`normalize`], reported for tooling output.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeStats {
    /// Smallest sample value before the stretch
    pub min: u8,
    /// Largest sample value before the stretch
    pub max: u8,
}

/// Stretch the occupied sample range to the full `[0, 255]` scale, in place.
///
/// Pass one scans every sample of every channel for the global extrema;
/// pass two remaps each sample `s` to `round((s - min) * 255 / (max - min))`.
/// A flat image (min == max) has no range to stretch and is left unchanged.
pub fn normalize(image: &mut RasterImage) -> NormalizeStats {
    let data = image.data_mut();

    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for &sample in data.iter() {
        min = min.min(sample);
        max = max.max(sample);
    }
    let stats = NormalizeStats { min, max };

    if min == max {
        debug!("normalize: flat image (value {min}), leaving unchanged");
        return stats;
    }

    let range = u32::from(max - min);
    for sample in data.iter_mut() {
        let shifted = u32::from(*sample - min);
        // Round-to-nearest; the quotient never exceeds 255 because
        // shifted <= range.
        *sample = ((shifted * 255 + range / 2) / range) as u8;
    }
    debug!("normalize: stretched [{min}, {max}]");
    stats
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::image::RasterImage;

    #[test]
    fn stretches_extrema_to_full_range() {
        let mut image = RasterImage::from_vec(2, 2, 1, vec![50, 100, 150, 200]).unwrap();
        let stats = normalize(&mut image);
        assert_eq!((stats.min, stats.max), (50, 200));
        assert_eq!(image.get(0, 0, 0), 0);
        assert_eq!(image.get(1, 1, 0), 255);
    }

    #[test]
    fn rounds_to_nearest() {
        // range 0..=2: the midpoint must round to 128, not truncate to 127
        let mut image = RasterImage::from_vec(3, 1, 1, vec![0, 1, 2]).unwrap();
        normalize(&mut image);
        assert_eq!(image.data(), &[0, 128, 255]);
    }

    #[test]
    fn extrema_span_all_channels() {
        // min lives in the green channel, max in the red one
        let mut image = RasterImage::from_vec(1, 1, 3, vec![230, 30, 130]).unwrap();
        let stats = normalize(&mut image);
        assert_eq!((stats.min, stats.max), (30, 230));
        assert_eq!(image.data(), &[255, 0, 128]);
    }

    #[test]
    fn flat_image_is_untouched() {
        let mut image = RasterImage::from_vec(2, 2, 3, vec![77; 12]).unwrap();
        let stats = normalize(&mut image);
        assert_eq!((stats.min, stats.max), (77, 77));
        assert_eq!(image.data(), &[77; 12]);
    }
}

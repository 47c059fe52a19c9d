use raster_filters::RasterImage;

/// Deterministic ramp covering the whole byte range with no repeats in a row.
pub fn ramp(width: usize, height: usize, channels: usize) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut data = vec![0u8; width * height * channels];
    for (i, sample) in data.iter_mut().enumerate() {
        *sample = (i * 13 % 256) as u8;
    }
    RasterImage::from_vec(width, height, channels, data).expect("valid geometry")
}

/// Uniform image with every sample set to `value`.
pub fn flat(width: usize, height: usize, channels: usize, value: u8) -> RasterImage {
    RasterImage::from_vec(width, height, channels, vec![value; width * height * channels])
        .expect("valid geometry")
}

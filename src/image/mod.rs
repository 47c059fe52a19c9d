//! Owned interleaved 8-bit raster image.
//!
//! Samples are stored one byte each in row-major, top-to-bottom order with
//! channels interleaved per pixel: index `channels * (y * width + x) + c`.
//! The constructor validates geometry, so `data.len() ==
//! width * height * channels` holds for every live `RasterImage`.
use crate::codec::CodecError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl RasterImage {
    /// Allocate a zero-filled image of the given geometry.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self, CodecError> {
        let len = checked_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0; len],
        })
    }

    /// Wrap an existing interleaved buffer, validating its length.
    pub fn from_vec(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, CodecError> {
        let expected = checked_len(width, height, channels)?;
        if data.len() != expected {
            return Err(CodecError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Zero-filled image with the same geometry as `self`.
    pub fn new_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: vec![0; self.data.len()],
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (1, 3, or 4)
    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Convert (x, y, c) to a linear index into `data`.
    #[inline]
    pub fn sample_index(&self, x: usize, y: usize, c: usize) -> usize {
        self.channels * (y * self.width + x) + c
    }

    /// Get the sample value at (x, y, c).
    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> u8 {
        self.data[self.sample_index(x, y, c)]
    }
}

fn checked_len(width: usize, height: usize, channels: usize) -> Result<usize, CodecError> {
    if !matches!(channels, 1 | 3 | 4) {
        return Err(CodecError::UnsupportedChannelCount(channels));
    }
    if width == 0 || height == 0 {
        return Err(CodecError::BadGeometry {
            width,
            height,
            channels,
        });
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(CodecError::BadGeometry {
            width,
            height,
            channels,
        })
}

use core::fmt;
use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while decoding or encoding an image file.
///
/// Decode failures are detected eagerly at the point of violation and abort
/// the whole operation; a decoder never hands back a partially populated
/// image.
#[derive(Debug)]
pub enum CodecError {
    Open { path: PathBuf, source: io::Error },
    Create { path: PathBuf, source: io::Error },
    Read(io::Error),
    Write(io::Error),
    /// Input ended before the header-declared geometry was satisfied.
    Truncated,
    BadMagic { found: u16 },
    BadTag { found: String },
    UnsupportedStorage(u8),
    UnsupportedBytesPerChannel(u8),
    UnsupportedDimension(u16),
    UnsupportedPixelRange(u32),
    UnsupportedColormap(u32),
    UnsupportedChannelCount(usize),
    BadHeaderToken { field: &'static str },
    BadSampleToken { index: usize },
    SampleOutOfRange { index: usize, value: i64, maxval: u16 },
    BadGeometry { width: usize, height: usize, channels: usize },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::Create { path, source } => {
                write!(f, "cannot create {}: {source}", path.display())
            }
            Self::Read(source) => write!(f, "read failed: {source}"),
            Self::Write(source) => write!(f, "write failed: {source}"),
            Self::Truncated => write!(f, "unexpected end of image data"),
            Self::BadMagic { found } => {
                write!(f, "bad magic number {found} (expected 474)")
            }
            Self::BadTag { found } => {
                write!(f, "bad format tag {found:?} (expected \"P3\")")
            }
            Self::UnsupportedStorage(v) => {
                write!(f, "unsupported storage format {v} (RLE is not supported)")
            }
            Self::UnsupportedBytesPerChannel(v) => {
                write!(f, "unsupported bytes per channel {v} (only 1 is supported)")
            }
            Self::UnsupportedDimension(v) => {
                write!(f, "unsupported dimension count {v} (only 3 is supported)")
            }
            Self::UnsupportedPixelRange(v) => {
                write!(f, "unsupported maximum pixel value {v} (must be 1..=255)")
            }
            Self::UnsupportedColormap(v) => {
                write!(f, "unsupported colormap id {v} (only normal is supported)")
            }
            Self::UnsupportedChannelCount(v) => {
                write!(f, "unsupported channel count {v} (must be 1, 3, or 4)")
            }
            Self::BadHeaderToken { field } => {
                write!(f, "malformed {field} in text header")
            }
            Self::BadSampleToken { index } => {
                write!(f, "unparsable sample at index {index}")
            }
            Self::SampleOutOfRange {
                index,
                value,
                maxval,
            } => {
                write!(f, "sample {value} at index {index} out of range 0..={maxval}")
            }
            Self::BadGeometry {
                width,
                height,
                channels,
            } => {
                write!(f, "bad image geometry {width}x{height}x{channels}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected}, got {actual}")
            }
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Create { source, .. } => Some(source),
            Self::Read(source) | Self::Write(source) => Some(source),
            _ => None,
        }
    }
}

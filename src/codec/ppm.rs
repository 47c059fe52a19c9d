//! Plain PPM (`P3`) text files.
//!
//! Header: the `P3` tag, then width, height and the maximum sample value as
//! decimal integers, then `3 * width * height` decimal samples. A `#` starts
//! a comment running to end-of-line; comments and whitespace runs are
//! skipped as a unit before every token, so comments may appear anywhere
//! between values.
//!
//! The whole input is held in memory; parsing walks a byte cursor rather
//! than a reader, which keeps the tokenizer trivial and the tests
//! file-free.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use super::error::CodecError;
use crate::image::RasterImage;

/// Format tag of the textual RGB variant.
pub const PPM_TAG: &str = "P3";

const PPM_CHANNELS: usize = 3;

/// Skip whitespace and `#` comments; returns the next token, if any.
fn next_token<'a>(data: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    loop {
        while *pos < data.len() && data[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
        if *pos < data.len() && data[*pos] == b'#' {
            while *pos < data.len() && data[*pos] != b'\n' {
                *pos += 1;
            }
            continue;
        }
        break;
    }
    if *pos >= data.len() {
        return None;
    }
    let start = *pos;
    while *pos < data.len() && !data[*pos].is_ascii_whitespace() {
        *pos += 1;
    }
    Some(&data[start..*pos])
}

fn parse_header_int(
    data: &[u8],
    pos: &mut usize,
    field: &'static str,
) -> Result<i64, CodecError> {
    let token = next_token(data, pos).ok_or(CodecError::Truncated)?;
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(CodecError::BadHeaderToken { field })
}

// --- decode ----------------------------------------------------------------

/// Decode a plain-PPM image from its raw bytes.
pub fn decode(data: &[u8]) -> Result<RasterImage, CodecError> {
    let mut pos = 0usize;

    let tag = next_token(data, &mut pos).ok_or(CodecError::Truncated)?;
    if tag != PPM_TAG.as_bytes() {
        return Err(CodecError::BadTag {
            found: String::from_utf8_lossy(tag).into_owned(),
        });
    }

    let width = parse_header_int(data, &mut pos, "width")?;
    let height = parse_header_int(data, &mut pos, "height")?;
    let maxval = parse_header_int(data, &mut pos, "maxval")?;

    if width <= 0 || height <= 0 {
        return Err(CodecError::BadGeometry {
            width: width.max(0) as usize,
            height: height.max(0) as usize,
            channels: PPM_CHANNELS,
        });
    }
    // Samples are stored one byte each, so a wider declared range can never
    // round-trip.
    if !(1..=255).contains(&maxval) {
        return Err(CodecError::UnsupportedPixelRange(maxval.max(0) as u32));
    }
    let maxval = maxval as u16;

    debug!("ppm header: {width}x{height} maxval={maxval}");

    let mut image = RasterImage::new(width as usize, height as usize, PPM_CHANNELS)?;
    let samples = image.data_mut();
    for index in 0..samples.len() {
        let token = next_token(data, &mut pos).ok_or(CodecError::Truncated)?;
        let value = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or(CodecError::BadSampleToken { index })?;
        if !(0..=i64::from(maxval)).contains(&value) {
            return Err(CodecError::SampleOutOfRange {
                index,
                value,
                maxval,
            });
        }
        samples[index] = value as u8;
    }
    Ok(image)
}

/// Read a plain-PPM image from `path`.
pub fn read_ppm(path: &Path) -> Result<RasterImage, CodecError> {
    let data = fs::read(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&data)
}

// --- encode ----------------------------------------------------------------

/// Encode an RGB image as plain PPM.
///
/// Samples are written as space-separated decimals with a newline after
/// every complete row; the declared maxval is always 255.
pub fn encode<W: Write>(writer: &mut W, image: &RasterImage) -> Result<(), CodecError> {
    if image.channels() != PPM_CHANNELS {
        return Err(CodecError::UnsupportedChannelCount(image.channels()));
    }

    write!(
        writer,
        "{PPM_TAG}\n{} {}\n255\n",
        image.width(),
        image.height()
    )
    .map_err(CodecError::Write)?;

    let row_len = image.width() * PPM_CHANNELS;
    for row in image.data().chunks(row_len) {
        for (i, &sample) in row.iter().enumerate() {
            if i > 0 {
                write!(writer, " ").map_err(CodecError::Write)?;
            }
            write!(writer, "{sample}").map_err(CodecError::Write)?;
        }
        writeln!(writer).map_err(CodecError::Write)?;
    }
    Ok(())
}

/// Write a plain-PPM image to `path`, flushing before reporting success.
pub fn write_ppm(path: &Path, image: &RasterImage) -> Result<(), CodecError> {
    let file = File::create(path).map_err(|source| CodecError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush().map_err(CodecError::Write)
}

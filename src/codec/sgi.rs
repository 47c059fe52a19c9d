//! Uncompressed SGI image files.
//!
//! Layout: a fixed 512-byte header (all multi-byte integers big-endian)
//! followed by `width * height * channels` single-byte samples, grouped by
//! channel plane, rows stored bottom-to-top, columns left-to-right.
//!
//! The decoder only accepts the verbatim storage variant: RLE, 2-byte
//! channels, non-3D dimensionality and indexed/dithered colormaps each fail
//! with their own [`CodecError`] variant. In-memory images are interleaved
//! top-to-bottom, so the row order is inverted while scattering samples on
//! decode and again on encode.
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use log::debug;

use super::error::CodecError;
use crate::image::RasterImage;

/// IRIS image file magic number.
pub const SGI_MAGIC: u16 = 474;

const NAME_LEN: usize = 80;
const RESERVED_LEN: usize = 404;

/// Largest geometry the 16-bit header fields can carry.
const MAX_HEADER_DIM: usize = u16::MAX as usize;

// --- byte-order helpers ----------------------------------------------------

fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), CodecError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => CodecError::Truncated,
        _ => CodecError::Read(e),
    })
}

fn read_u8<R: Read>(reader: &mut R) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    fill(reader, &mut buf)?;
    Ok(buf[0])
}

fn read_u16<R: Read>(reader: &mut R) -> Result<u16, CodecError> {
    let mut buf = [0u8; 2];
    fill(reader, &mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    fill(reader, &mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn write_u8<W: Write>(writer: &mut W, value: u8) -> Result<(), CodecError> {
    writer.write_all(&[value]).map_err(CodecError::Write)
}

fn write_u16<W: Write>(writer: &mut W, value: u16) -> Result<(), CodecError> {
    writer
        .write_all(&value.to_be_bytes())
        .map_err(CodecError::Write)
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<(), CodecError> {
    writer
        .write_all(&value.to_be_bytes())
        .map_err(CodecError::Write)
}

// --- decode ----------------------------------------------------------------

/// Decode an SGI image from a byte stream.
///
/// Header fields are validated in file order; the first violation aborts the
/// decode with its distinct error and nothing is returned.
pub fn decode<R: Read>(reader: &mut R) -> Result<RasterImage, CodecError> {
    let magic = read_u16(reader)?;
    if magic != SGI_MAGIC {
        return Err(CodecError::BadMagic { found: magic });
    }

    // Storage format: 0 = verbatim, 1 = RLE.
    let storage = read_u8(reader)?;
    if storage != 0 {
        return Err(CodecError::UnsupportedStorage(storage));
    }

    let bpc = read_u8(reader)?;
    if bpc != 1 {
        return Err(CodecError::UnsupportedBytesPerChannel(bpc));
    }

    // 1 = X, 2 = X x Y, 3 = X x Y x Z; only the volumetric form is accepted.
    let dimension = read_u16(reader)?;
    if dimension != 3 {
        return Err(CodecError::UnsupportedDimension(dimension));
    }

    let width = read_u16(reader)? as usize;
    let height = read_u16(reader)? as usize;
    let channels = read_u16(reader)? as usize;

    let pixmin = read_u32(reader)?;
    let pixmax = read_u32(reader)?;
    if pixmax > 255 {
        return Err(CodecError::UnsupportedPixelRange(pixmax));
    }

    let _reserved = read_u32(reader)?;

    let mut name = [0u8; NAME_LEN];
    fill(reader, &mut name)?;

    // 0 = normal, 1 = dithered, 2/3 = indexed palettes.
    let colormap = read_u32(reader)?;
    if colormap != 0 {
        return Err(CodecError::UnsupportedColormap(colormap));
    }

    let mut reserved = [0u8; RESERVED_LEN];
    fill(reader, &mut reserved)?;

    debug!("sgi header: {width}x{height}x{channels} pixmin={pixmin} pixmax={pixmax}");

    let mut image = RasterImage::new(width, height, channels)?;
    let mut scanline = vec![0u8; width];
    for z in 0..channels {
        // File rows run bottom-to-top; the interleaved buffer is top-to-bottom.
        for y in (0..height).rev() {
            fill(reader, &mut scanline)?;
            let base = channels * (width * y) + z;
            let data = image.data_mut();
            for (x, &value) in scanline.iter().enumerate() {
                data[base + channels * x] = value;
            }
        }
    }
    Ok(image)
}

/// Read an SGI image from `path`.
pub fn read_sgi(path: &Path) -> Result<RasterImage, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&mut BufReader::new(file))
}

// --- encode ----------------------------------------------------------------

/// Encode an image as an uncompressed SGI file.
///
/// Writes the fixed 512-byte header (name, colormap and reserved fields
/// zero-filled, pixel range declared as 0..=255) followed by the planar
/// bottom-to-top body.
pub fn encode<W: Write>(writer: &mut W, image: &RasterImage) -> Result<(), CodecError> {
    let width = image.width();
    let height = image.height();
    let channels = image.channels();
    if width > MAX_HEADER_DIM || height > MAX_HEADER_DIM {
        return Err(CodecError::BadGeometry {
            width,
            height,
            channels,
        });
    }

    write_u16(writer, SGI_MAGIC)?;
    write_u8(writer, 0)?; // verbatim storage
    write_u8(writer, 1)?; // one byte per channel
    write_u16(writer, 3)?;
    write_u16(writer, width as u16)?;
    write_u16(writer, height as u16)?;
    write_u16(writer, channels as u16)?;
    write_u32(writer, 0)?; // pixmin
    write_u32(writer, 255)?; // pixmax
    write_u32(writer, 0)?; // reserved
    writer.write_all(&[0u8; NAME_LEN]).map_err(CodecError::Write)?;
    write_u32(writer, 0)?; // colormap: normal
    writer
        .write_all(&[0u8; RESERVED_LEN])
        .map_err(CodecError::Write)?;

    let data = image.data();
    let mut scanline = vec![0u8; width];
    for z in 0..channels {
        for y in (0..height).rev() {
            let base = channels * (width * y) + z;
            for (x, slot) in scanline.iter_mut().enumerate() {
                *slot = data[base + channels * x];
            }
            writer.write_all(&scanline).map_err(CodecError::Write)?;
        }
    }
    Ok(())
}

/// Write an SGI image to `path`, flushing before reporting success.
pub fn write_sgi(path: &Path, image: &RasterImage) -> Result<(), CodecError> {
    let file = File::create(path).map_err(|source| CodecError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush().map_err(CodecError::Write)
}

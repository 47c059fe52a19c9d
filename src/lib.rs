#![doc = include_str!("../README.md")]

pub mod codec;
pub mod filters;
pub mod image;
pub mod report;

// --- High-level re-exports -------------------------------------------------

// Main entry points: image container + codecs + filters.
pub use crate::codec::CodecError;
pub use crate::image::RasterImage;

/// Small prelude for quick experiments.
///
/// ```no_run
/// use raster_filters::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> Result<(), CodecError> {
/// let mut image = read_sgi(Path::new("in.sgi"))?;
/// let stats = normalize(&mut image);
/// println!("stretched [{}, {}]", stats.min, stats.max);
/// write_sgi(Path::new("out.sgi"), &image)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::codec::ppm::{read_ppm, write_ppm};
    pub use crate::codec::sgi::{read_sgi, write_sgi};
    pub use crate::filters::{blur, normalize, NormalizeStats};
    pub use crate::{CodecError, RasterImage};
}

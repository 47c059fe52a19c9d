//! Image filters.
//!
//! Both filters are deterministic single-pass (or two-pass) transforms over
//! a decoded [`crate::RasterImage`]:
//!
//! - [`normalize`]: global linear contrast stretch, in place.
//! - [`blur`]: fixed 5×5 integer convolution producing a new image.
pub mod blur;
pub mod normalize;

pub use blur::blur;
pub use normalize::{normalize, NormalizeStats};

//! Rasterization of vector sources into reusable pixel surfaces.
//!
//! Responsibilities:
//! - bucket continuous draw scales into power-of-two mip levels (`mip`)
//! - size the raster target for a level under the device texture ceiling (`pipeline`)
//! - own and reuse the 2D drawing surface that performs the actual rendering (`surface`)

mod buffer;
mod mip;
mod pipeline;
mod surface;

pub use buffer::{PixelView, RasterBuffer};
pub use mip::{mip_level_for_scale, MipLevel, MIPMAP_OFFSET};
pub use pipeline::{raster_size, Raster, RasterPipeline};
pub use surface::{DrawingSurface, PixmapSurface};

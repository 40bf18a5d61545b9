//! Marduk skin crate.
//!
//! Turns resolution-independent vector assets into GPU textures at whatever
//! scale a sprite is drawn. Each scale is bucketed into a power-of-two mip
//! level; every level is rasterized and uploaded at most once per skin.

pub mod asset;
pub mod device;
pub mod error;
pub mod logging;
pub mod raster;
pub mod skin;

#[cfg(test)]
mod testing;

pub use error::{AssetError, SkinError};

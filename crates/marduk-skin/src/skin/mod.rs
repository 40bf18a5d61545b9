//! Skins: how a sprite obtains a texture or pixels for a given draw scale.
//!
//! The renderer holds skins through the [`Skin`] contract and never writes
//! into their caches. [`VectorSkin`] is the implementation for SVG assets.

mod cache;
mod config;
mod vector;

pub use cache::{CachedTexture, MipmapCache};
pub use config::SkinConfig;
pub use vector::VectorSkin;

use crate::raster::RasterBuffer;

/// Per-draw information forwarded on a cache miss, both to the surface that
/// draws the mip and to texture creation.
///
/// Never part of the cache key: a mip created for one sprite is reused for all.
#[derive(Debug, Copy, Clone, Default)]
pub struct DrawHint<'a> {
    /// Debug label attached to a newly created GPU texture.
    pub label: Option<&'a str>,
}

impl<'a> DrawHint<'a> {
    pub const fn labeled(label: &'a str) -> Self {
        Self { label: Some(label) }
    }
}

/// Contract the renderer uses for every kind of skin.
pub trait Skin {
    type Texture;

    /// Texture to draw at `scale`, or `None` when there is nothing to draw yet
    /// (asset loading) or at all (zero-area raster).
    fn texture(&mut self, scale: f32, hint: Option<&DrawHint<'_>>) -> Option<&Self::Texture>;

    /// CPU-side pixels at `scale`, for hit testing and color sampling.
    fn image_data(&mut self, scale: f32) -> Option<&RasterBuffer>;

    /// Releases every GPU texture the skin holds. Consumes the skin.
    fn destroy(self)
    where
        Self: Sized;
}

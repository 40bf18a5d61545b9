use std::rc::Rc;

use crate::asset::{SourceAsset, SvgAsset};
use crate::device::{TextureDevice, TextureFilter};
use crate::error::SkinError;
use crate::raster::{
    mip_level_for_scale, DrawingSurface, MipLevel, PixmapSurface, Raster, RasterBuffer,
    RasterPipeline,
};

use super::cache::{CachedTexture, MipmapCache};
use super::config::SkinConfig;
use super::{DrawHint, Skin};

/// Skin for a vector asset, rasterized on demand per mip level.
///
/// GPUs cannot draw vectors, so the skin keeps a set of bitmaps: 1/16x,
/// 1/8x, ... 1x, 2x, 4x ... of natural size, each created the first time a
/// sprite is drawn at a scale in its octave and reused for the skin's
/// lifetime. Rasterizing targets the one owned surface, so concurrent skins
/// never disturb each other.
///
/// Textures are released exactly once: by [`destroy`](Skin::destroy), or on
/// drop if the skin was never destroyed.
pub struct VectorSkin<G: TextureDevice, S: DrawingSurface = PixmapSurface> {
    device: Rc<G>,
    asset: Rc<S::Source>,
    pipeline: RasterPipeline<S>,
    mipmaps: MipmapCache<G::Texture>,
    /// Most recent CPU readback, tagged with its level.
    image_data: Option<(MipLevel, RasterBuffer)>,
    filter: TextureFilter,
}

impl<G: TextureDevice> VectorSkin<G, PixmapSurface> {
    /// Creates a skin for an SVG asset with default options.
    pub fn new(device: Rc<G>, asset: Rc<SvgAsset>) -> Result<Self, SkinError> {
        Self::with_config(device, asset, SkinConfig::default())
    }

    /// Creates a skin for an SVG asset.
    ///
    /// Fails only if the drawing surface cannot be acquired.
    pub fn with_config(
        device: Rc<G>,
        asset: Rc<SvgAsset>,
        config: SkinConfig,
    ) -> Result<Self, SkinError> {
        let surface = PixmapSurface::new()?;
        Ok(Self::with_surface(device, asset, surface, config))
    }
}

impl<G: TextureDevice, S: DrawingSurface> VectorSkin<G, S> {
    /// Creates a skin that rasterizes through `surface`.
    pub fn with_surface(
        device: Rc<G>,
        asset: Rc<S::Source>,
        surface: S,
        config: SkinConfig,
    ) -> Self {
        let ceiling = config.texture_ceiling(device.max_texture_dimension());
        Self {
            device,
            asset,
            pipeline: RasterPipeline::new(surface, ceiling),
            mipmaps: MipmapCache::new(),
            image_data: None,
            filter: config.filter,
        }
    }

    /// Texture for `scale`, rasterizing and uploading its mip on first use.
    ///
    /// Returns `None` while the asset is loading (not cached; checked again
    /// next call) and for levels whose raster has zero area (cached).
    pub fn texture(&mut self, scale: f32, hint: Option<&DrawHint<'_>>) -> Option<&G::Texture> {
        if !self.asset.is_ready() {
            return None;
        }

        let level = mip_level_for_scale(scale);
        let Self {
            device,
            asset,
            pipeline,
            mipmaps,
            filter,
            ..
        } = self;

        let cached = mipmaps.get_or_try_insert_with(level, || {
            match pipeline.rasterize(&**asset, level, hint) {
                Raster::Drawn(pixels) => {
                    log::debug!(
                        "VectorSkin: uploading mip {} ({}x{})",
                        level.get(),
                        pixels.width,
                        pixels.height
                    );
                    let label = hint.and_then(|h| h.label);
                    Some(CachedTexture::Present(device.create_texture(pixels, *filter, label)))
                }
                Raster::Degenerate => {
                    log::debug!("VectorSkin: mip {} is zero-area; caching as empty", level.get());
                    Some(CachedTexture::Degenerate)
                }
                Raster::NotReady => None,
            }
        })?;

        cached.texture()
    }

    /// Pixels for `scale`, reusing the last readback when the level matches.
    ///
    /// Independent of the texture cache: never creates or reads GPU textures.
    /// A `None` result (loading or zero-area) keeps the previous readback.
    pub fn image_data(&mut self, scale: f32) -> Option<&RasterBuffer> {
        if !self.asset.is_ready() {
            return None;
        }

        let level = mip_level_for_scale(scale);
        let fresh = matches!(&self.image_data, Some((held, _)) if *held == level);

        if !fresh {
            match self.pipeline.rasterize(&self.asset, level, None) {
                Raster::Drawn(_) => {}
                Raster::Degenerate | Raster::NotReady => return None,
            }
            let buffer = self.pipeline.surface().read_pixels();
            log::trace!(
                "VectorSkin: read back mip {} ({}x{})",
                level.get(),
                buffer.width(),
                buffer.height()
            );
            self.image_data = Some((level, buffer));
        }

        self.image_data.as_ref().map(|(_, buffer)| buffer)
    }

    /// The asset this skin draws.
    pub fn asset(&self) -> &Rc<S::Source> {
        &self.asset
    }

    /// The owned drawing surface.
    pub fn surface(&self) -> &S {
        self.pipeline.surface()
    }

    /// Raster ceiling in effect (device limit narrowed by config).
    pub fn max_texture_dimension(&self) -> u32 {
        self.pipeline.max_texture_dimension()
    }

    /// Total rasterizations performed, for both textures and readbacks.
    pub fn draw_count(&self) -> u64 {
        self.pipeline.draw_count()
    }

    /// Cached entry for `level`, if it has been requested.
    pub fn cached(&self, level: MipLevel) -> Option<&CachedTexture<G::Texture>> {
        self.mipmaps.get(level)
    }

    /// Levels present in the texture cache, ascending.
    pub fn cached_levels(&self) -> Vec<MipLevel> {
        self.mipmaps.levels()
    }

    /// Level of the held readback, if any.
    pub fn image_data_level(&self) -> Option<MipLevel> {
        self.image_data.as_ref().map(|(level, _)| *level)
    }

    fn release(&mut self) {
        let mut released = 0usize;
        for texture in self.mipmaps.drain_textures() {
            self.device.delete_texture(texture);
            released += 1;
        }
        self.image_data = None;

        if released > 0 {
            log::debug!("VectorSkin: released {released} mip textures");
        }
    }
}

impl<G: TextureDevice, S: DrawingSurface> Skin for VectorSkin<G, S> {
    type Texture = G::Texture;

    fn texture(&mut self, scale: f32, hint: Option<&DrawHint<'_>>) -> Option<&G::Texture> {
        VectorSkin::texture(self, scale, hint)
    }

    fn image_data(&mut self, scale: f32) -> Option<&RasterBuffer> {
        VectorSkin::image_data(self, scale)
    }

    fn destroy(mut self) {
        self.release();
    }
}

impl<G: TextureDevice, S: DrawingSurface> Drop for VectorSkin<G, S> {
    fn drop(&mut self) {
        // No-op after `destroy`: the cache is already drained.
        self.release();
    }
}

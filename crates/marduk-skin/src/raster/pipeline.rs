use crate::asset::SourceAsset;
use crate::skin::DrawHint;

use super::buffer::PixelView;
use super::mip::MipLevel;
use super::surface::DrawingSurface;

/// Outcome of rasterizing one mip level.
#[derive(Debug)]
pub enum Raster<'a> {
    /// The surface now holds the level's pixels.
    Drawn(PixelView<'a>),
    /// Nothing can be drawn at this level: the target has zero width or
    /// height, or the surface cannot hold it.
    Degenerate,
    /// The asset is still loading; nothing was drawn and the result may change.
    NotReady,
}

/// Target pixel size for `level` of an asset whose natural size is `natural`.
///
/// Each axis is scaled by the level factor, clamped to `max_dimension`
/// independently, then rounded half away from zero.
pub fn raster_size(natural: (u32, u32), level: MipLevel, max_dimension: u32) -> (u32, u32) {
    let factor = level.scale_factor();
    let axis = |n: u32| -> u32 {
        // 0 * inf is NaN, which `min` would turn into the ceiling.
        if n == 0 {
            return 0;
        }
        (f64::from(n) * factor).min(f64::from(max_dimension)).round() as u32
    };
    (axis(natural.0), axis(natural.1))
}

/// Drives an owned [`DrawingSurface`] at mip-level resolutions.
///
/// The pipeline only chooses the target resolution; the surface does the
/// vector-to-raster conversion.
#[derive(Debug)]
pub struct RasterPipeline<S> {
    surface: S,
    max_texture_dimension: u32,
    draws: u64,
}

impl<S: DrawingSurface> RasterPipeline<S> {
    pub fn new(surface: S, max_texture_dimension: u32) -> Self {
        Self {
            surface,
            max_texture_dimension,
            draws: 0,
        }
    }

    #[inline]
    pub fn max_texture_dimension(&self) -> u32 {
        self.max_texture_dimension
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of times the surface has been drawn into.
    #[inline]
    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// Renders `source` at `level` into the owned surface.
    ///
    /// Readiness is checked first; degenerate sizes return before the surface
    /// is touched. `hint` is handed to the surface's draw unchanged.
    pub fn rasterize(
        &mut self,
        source: &S::Source,
        level: MipLevel,
        hint: Option<&DrawHint<'_>>,
    ) -> Raster<'_> {
        if !source.is_ready() {
            return Raster::NotReady;
        }

        let (width, height) =
            raster_size(source.natural_size(), level, self.max_texture_dimension);
        if width == 0 || height == 0 {
            return Raster::Degenerate;
        }

        match self.surface.resize(width, height) {
            // A fresh size starts out transparent.
            Ok(true) => {}
            Ok(false) => self.surface.clear(),
            Err(err) => {
                log::warn!("RasterPipeline: mip {} has no surface: {err}", level.get());
                return Raster::Degenerate;
            }
        }
        self.surface.draw_source(source, width, height, hint);
        self.draws += 1;

        Raster::Drawn(self.surface.pixels())
    }
}

use resvg::tiny_skia;

use crate::asset::{SourceAsset, SvgAsset};
use crate::error::SkinError;
use crate::skin::DrawHint;

use super::buffer::{byte_len, PixelView, RasterBuffer};

/// A mutable 2D canvas that converts a source asset into pixels.
///
/// A skin owns exactly one surface and reuses it for every rasterization, so
/// implementations should keep their backing storage across `resize` calls.
pub trait DrawingSurface {
    /// Asset type this surface knows how to draw.
    type Source: SourceAsset + ?Sized;

    /// Current size in pixels.
    fn size(&self) -> (u32, u32);

    /// Resizes the canvas.
    ///
    /// Returns `Ok(false)` without touching the contents when the size already
    /// matches, and `Ok(true)` when the size changed, in which case every pixel
    /// is now transparent. A size the surface cannot hold is an error and
    /// leaves the canvas as it was.
    fn resize(&mut self, width: u32, height: u32) -> Result<bool, SkinError>;

    /// Clears every pixel to transparent.
    fn clear(&mut self);

    /// Draws `source` scaled to `width x height` at the top-left corner.
    ///
    /// `hint` describes the draw that caused the rasterization, when there is
    /// one. It must not change what a given size looks like: the result is
    /// cached and shared by every later draw at the same level.
    fn draw_source(
        &mut self,
        source: &Self::Source,
        width: u32,
        height: u32,
        hint: Option<&DrawHint<'_>>,
    );

    /// Borrows the current contents.
    fn pixels(&self) -> PixelView<'_>;

    /// Copies the current contents out.
    fn read_pixels(&self) -> RasterBuffer {
        self.pixels().to_buffer()
    }
}

/// CPU drawing surface backed by resvg/tiny-skia.
///
/// Owns a single RGBA8 byte buffer; a `tiny_skia::PixmapMut` is borrowed over
/// it for each draw, so resizing never hands memory back and growing only
/// reallocates when the buffer's capacity is exceeded.
#[derive(Debug)]
pub struct PixmapSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixmapSurface {
    /// Creates a 1x1 surface.
    pub fn new() -> Result<Self, SkinError> {
        Self::with_size(1, 1)
    }

    /// Creates a surface of the given size.
    ///
    /// Fails when tiny-skia cannot address a canvas of that size (zero area or
    /// a row stride beyond `i32::MAX`).
    pub fn with_size(width: u32, height: u32) -> Result<Self, SkinError> {
        if !is_addressable(width, height) {
            return Err(SkinError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; byte_len(width, height)],
        })
    }

    /// Bytes currently reserved by the backing buffer.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl DrawingSurface for PixmapSurface {
    type Source = SvgAsset;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<bool, SkinError> {
        if (width, height) == (self.width, self.height) {
            return Ok(false);
        }
        if !is_addressable(width, height) {
            return Err(SkinError::SurfaceUnavailable { width, height });
        }

        self.width = width;
        self.height = height;
        // Shrinking keeps the allocation; growing reuses it up to capacity.
        self.data.clear();
        self.data.resize(byte_len(width, height), 0);
        Ok(true)
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn draw_source(
        &mut self,
        source: &SvgAsset,
        width: u32,
        height: u32,
        _hint: Option<&DrawHint<'_>>,
    ) {
        let Some(tree) = source.tree() else {
            return;
        };

        let natural = tree.size();
        if natural.width() <= 0.0 || natural.height() <= 0.0 {
            return;
        }

        let Some(mut pixmap) =
            tiny_skia::PixmapMut::from_bytes(&mut self.data, self.width, self.height)
        else {
            log::warn!(
                "PixmapSurface: cannot draw into {}x{} buffer",
                self.width,
                self.height
            );
            return;
        };

        let transform = tiny_skia::Transform::from_scale(
            width as f32 / natural.width(),
            height as f32 / natural.height(),
        );
        resvg::render(tree, transform, &mut pixmap);
    }

    fn pixels(&self) -> PixelView<'_> {
        PixelView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

fn is_addressable(width: u32, height: u32) -> bool {
    tiny_skia::IntSize::from_wh(width, height).is_some()
        && width.checked_mul(4).is_some_and(|stride| stride <= i32::MAX as u32)
}

//! Test doubles shared by unit tests.

use std::cell::{Cell, RefCell};

use crate::asset::SourceAsset;
use crate::device::{TextureDevice, TextureFilter};
use crate::error::SkinError;
use crate::raster::{DrawingSurface, PixelView};
use crate::skin::DrawHint;

/// Asset whose readiness can be flipped by the test.
pub(crate) struct FakeAsset {
    size: (u32, u32),
    ready: Cell<bool>,
}

impl FakeAsset {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self { size: (width, height), ready: Cell::new(true) }
    }

    pub(crate) fn pending(width: u32, height: u32) -> Self {
        Self { size: (width, height), ready: Cell::new(false) }
    }

    pub(crate) fn finish_loading(&self) {
        self.ready.set(true);
    }
}

impl SourceAsset for FakeAsset {
    fn natural_size(&self) -> (u32, u32) {
        self.size
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

/// Surface that counts resizes/clears/draws and paints a solid, size-tagged
/// color. Records the label of every hint it is drawn with.
#[derive(Default)]
pub(crate) struct CountingSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
    /// Largest side it accepts; `None` accepts any size.
    limit: Option<u32>,
    pub(crate) resizes: u32,
    pub(crate) clears: u32,
    pub(crate) draws: u32,
    pub(crate) hints: Vec<Option<String>>,
}

impl CountingSurface {
    pub(crate) fn limited(max_side: u32) -> Self {
        Self { limit: Some(max_side), ..Self::default() }
    }
}

impl DrawingSurface for CountingSurface {
    type Source = FakeAsset;

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<bool, SkinError> {
        if (width, height) == (self.width, self.height) {
            return Ok(false);
        }
        if self.limit.is_some_and(|max| width > max || height > max) {
            return Err(SkinError::SurfaceUnavailable { width, height });
        }
        self.width = width;
        self.height = height;
        self.data.clear();
        self.data.resize(width as usize * height as usize * 4, 0);
        self.resizes += 1;
        Ok(true)
    }

    fn clear(&mut self) {
        self.data.fill(0);
        self.clears += 1;
    }

    fn draw_source(
        &mut self,
        _source: &FakeAsset,
        width: u32,
        height: u32,
        hint: Option<&DrawHint<'_>>,
    ) {
        let px = [width as u8, height as u8, 0, 255];
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        self.draws += 1;
        self.hints.push(hint.and_then(|h| h.label).map(str::to_owned));
    }

    fn pixels(&self) -> PixelView<'_> {
        PixelView { width: self.width, height: self.height, data: &self.data }
    }
}

/// Texture handle handed out by [`FakeDevice`]. Deliberately not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FakeTexture {
    pub(crate) id: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) filter: TextureFilter,
    pub(crate) label: Option<String>,
}

/// Device that records every create/delete.
pub(crate) struct FakeDevice {
    max_dimension: u32,
    next_id: Cell<u32>,
    pub(crate) created: RefCell<Vec<u32>>,
    pub(crate) deleted: RefCell<Vec<u32>>,
}

impl FakeDevice {
    pub(crate) fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            next_id: Cell::new(1),
            created: RefCell::new(Vec::new()),
            deleted: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn created_count(&self) -> usize {
        self.created.borrow().len()
    }
}

impl TextureDevice for FakeDevice {
    type Texture = FakeTexture;

    fn max_texture_dimension(&self) -> u32 {
        self.max_dimension
    }

    fn create_texture(
        &self,
        pixels: PixelView<'_>,
        filter: TextureFilter,
        label: Option<&str>,
    ) -> FakeTexture {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.created.borrow_mut().push(id);
        FakeTexture {
            id,
            width: pixels.width,
            height: pixels.height,
            filter,
            label: label.map(str::to_owned),
        }
    }

    fn delete_texture(&self, texture: FakeTexture) {
        self.deleted.borrow_mut().push(texture.id);
    }
}

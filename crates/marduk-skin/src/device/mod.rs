//! GPU texture management.
//!
//! Skins talk to the GPU only through [`TextureDevice`]: query the texture
//! size ceiling, upload pixels as a texture, delete a texture. [`Gpu`] is the
//! wgpu-backed implementation; it runs headless (no window or swapchain).

mod gpu;
mod init;

pub use gpu::{Gpu, SkinTexture};
pub use init::GpuInit;

use crate::raster::PixelView;

/// Sampling filter for a skin texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextureFilter {
    /// Smooth filtering; right for scaled vector content.
    #[default]
    Linear,
    /// Nearest-neighbor; right for pixel art.
    Nearest,
}

impl From<TextureFilter> for wgpu::FilterMode {
    fn from(filter: TextureFilter) -> Self {
        match filter {
            TextureFilter::Linear => wgpu::FilterMode::Linear,
            TextureFilter::Nearest => wgpu::FilterMode::Nearest,
        }
    }
}

/// Texture operations a skin needs from the GPU context.
///
/// `Texture` is an owning handle. Deleting consumes it, so a handle can be
/// released at most once.
pub trait TextureDevice {
    type Texture;

    /// Largest width or height the device accepts for a 2D texture.
    fn max_texture_dimension(&self) -> u32;

    /// Uploads `pixels` (RGBA8, premultiplied) as a new texture.
    fn create_texture(
        &self,
        pixels: PixelView<'_>,
        filter: TextureFilter,
        label: Option<&str>,
    ) -> Self::Texture;

    /// Releases the GPU memory behind `texture`.
    fn delete_texture(&self, texture: Self::Texture);
}

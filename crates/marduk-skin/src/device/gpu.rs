use anyhow::{Context, Result};

use crate::raster::PixelView;

use super::{GpuInit, TextureDevice, TextureFilter};

/// Headless wgpu context: adapter, logical device and queue.
///
/// Owned by the application and shared by every skin drawn with it.
pub struct Gpu {
    /// Selected adapter.
    adapter: wgpu::Adapter,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,
}

impl Gpu {
    /// Creates a GPU context without a surface.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(init: GpuInit) -> Result<Self> {
        let GpuInit {
            power_preference,
            force_fallback_adapter,
            required_features,
            required_limits,
        } = init;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference,
                compatible_surface: None,
                force_fallback_adapter,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("marduk-skin device"),
                required_features,
                required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        log::info!("Gpu: using adapter {:?}", adapter.get_info().name);

        Ok(Self {
            adapter,
            device,
            queue,
        })
    }

    /// Returns adapter name/backend details.
    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

/// A rasterized mip uploaded to the GPU, ready to bind.
///
/// Not `Clone`: the skin that created it is its only owner.
pub struct SkinTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl SkinTexture {
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Texture size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.texture.width(), self.texture.height())
    }
}

impl TextureDevice for Gpu {
    type Texture = SkinTexture;

    fn max_texture_dimension(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    fn create_texture(
        &self,
        pixels: PixelView<'_>,
        filter: TextureFilter,
        label: Option<&str>,
    ) -> SkinTexture {
        let size = wgpu::Extent3d {
            width: pixels.width,
            height: pixels.height,
            depth_or_array_layers: 1,
        };

        // Data is premultiplied, so the texture stays linear Unorm and the
        // consuming pipeline blends with One / OneMinusSrcAlpha.
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label.unwrap_or("marduk skin mip")),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels.data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(pixels.bytes_per_row()),
                rows_per_image: Some(pixels.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mode = wgpu::FilterMode::from(filter);
        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("marduk skin sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: mode,
            min_filter: mode,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        SkinTexture {
            texture,
            view,
            sampler,
        }
    }

    fn delete_texture(&self, texture: SkinTexture) {
        texture.texture.destroy();
    }
}

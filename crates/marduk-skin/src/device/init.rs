/// Initialization parameters for the headless GPU context.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Adapter preference.
    ///
    /// Skins upload many small textures; low power is usually enough.
    pub power_preference: wgpu::PowerPreference,

    /// Force a software adapter (useful in CI without a GPU).
    pub force_fallback_adapter: bool,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// `max_texture_dimension_2d` becomes the raster ceiling for every skin
    /// built on this context.
    pub required_limits: wgpu::Limits,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            force_fallback_adapter: false,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
        }
    }
}

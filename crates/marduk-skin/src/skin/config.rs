use crate::device::TextureFilter;

/// Per-skin options.
#[derive(Debug, Copy, Clone)]
pub struct SkinConfig {
    /// Sampling filter for uploaded mips. Vector content wants `Linear`.
    pub filter: TextureFilter,

    /// Optional raster ceiling below the device limit, to bound texture memory.
    pub max_texture_dimension: Option<u32>,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            filter: TextureFilter::Linear,
            max_texture_dimension: None,
        }
    }
}

impl SkinConfig {
    /// Effective ceiling given what the device supports.
    pub fn texture_ceiling(&self, device_max: u32) -> u32 {
        self.max_texture_dimension
            .map_or(device_max, |cap| cap.min(device_max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_defaults_to_device_limit() {
        assert_eq!(SkinConfig::default().texture_ceiling(8192), 8192);
    }

    #[test]
    fn override_can_only_lower_the_ceiling() {
        let low = SkinConfig { max_texture_dimension: Some(1024), ..SkinConfig::default() };
        assert_eq!(low.texture_ceiling(8192), 1024);

        let high = SkinConfig { max_texture_dimension: Some(65536), ..SkinConfig::default() };
        assert_eq!(high.texture_ceiling(8192), 8192);
    }
}

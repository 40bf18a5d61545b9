/// Distance between mip level 0 and the level that renders at natural size.
///
/// The smallest generated raster is `1 / 2^MIPMAP_OFFSET` of the asset's
/// natural size.
pub const MIPMAP_OFFSET: i32 = 4;

/// Discrete raster resolution tier for a vector skin.
///
/// Level `MIPMAP_OFFSET` is the asset's natural (100%) size; each step up
/// doubles both axes, each step down halves them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct MipLevel(pub u32);

impl MipLevel {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Size of this level relative to natural size: `2^(level - MIPMAP_OFFSET)`.
    #[inline]
    pub fn scale_factor(self) -> f64 {
        (f64::from(self.0) - f64::from(MIPMAP_OFFSET)).exp2()
    }
}

/// Maps a draw scale to the mip level whose raster covers it.
///
/// `max(ceil(log2(scale)) + MIPMAP_OFFSET, 0)`: scales in `(2^(n-1), 2^n]`
/// share one level, so a texel is always between 0.5x and 1x of a rendered
/// pixel. Zero, negative and NaN scales select level 0; `+inf` saturates.
pub fn mip_level_for_scale(scale: f32) -> MipLevel {
    let exp = f64::from(scale).log2().ceil() + f64::from(MIPMAP_OFFSET);

    // Also rejects NaN.
    if !(exp > 0.0) {
        return MipLevel(0);
    }

    // Float-to-int `as` saturates, so +inf lands on u32::MAX.
    MipLevel(exp as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(scale: f32) -> u32 {
        mip_level_for_scale(scale).get()
    }

    #[test]
    fn natural_scale_maps_to_offset() {
        assert_eq!(level(1.0), MIPMAP_OFFSET as u32);
    }

    #[test]
    fn one_bucket_covers_half_open_octave() {
        // (1, 2] shares a level; 2.1 starts the next one.
        assert_eq!(level(1.1), level(1.9));
        assert_eq!(level(1.9), level(2.0));
        assert!(level(1.9) < level(2.1));
        assert_eq!(level(2.1), 6);
    }

    #[test]
    fn small_scales_clamp_to_zero() {
        assert_eq!(level(1.0 / 16.0), 0);
        assert_eq!(level(0.01), 0);
        assert_eq!(level(1e-9), 0);
    }

    #[test]
    fn degenerate_inputs_select_smallest_level() {
        assert_eq!(level(0.0), 0);
        assert_eq!(level(-3.0), 0);
        assert_eq!(level(f32::NAN), 0);
    }

    #[test]
    fn infinite_scale_saturates() {
        assert_eq!(level(f32::INFINITY), u32::MAX);
    }

    #[test]
    fn non_decreasing_over_a_sweep() {
        let mut prev = 0;
        let mut s = 0.001f32;
        while s < 500.0 {
            let l = level(s);
            assert!(l >= prev, "level dropped at scale {s}");
            prev = l;
            s *= 1.07;
        }
    }

    #[test]
    fn pure_for_repeated_input() {
        for s in [0.3f32, 1.0, 1.5, 7.25, 64.0] {
            assert_eq!(mip_level_for_scale(s), mip_level_for_scale(s));
        }
    }

    #[test]
    fn scale_factor_is_power_of_two_around_offset() {
        assert_eq!(MipLevel::new(4).scale_factor(), 1.0);
        assert_eq!(MipLevel::new(0).scale_factor(), 1.0 / 16.0);
        assert_eq!(MipLevel::new(6).scale_factor(), 4.0);
    }
}

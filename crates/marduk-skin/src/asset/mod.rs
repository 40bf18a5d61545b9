//! Vector source assets.
//!
//! Assets are owned outside the skin and shared read-only. An asset may still
//! be loading when a skin is built; skins poll `is_ready` on every request.

mod svg;

pub use svg::SvgAsset;

/// Read-only view of a vector image as consumed by skins.
pub trait SourceAsset {
    /// Intrinsic size at 100% scale, in source units.
    ///
    /// Meaningful only once [`is_ready`](Self::is_ready) returns `true`.
    fn natural_size(&self) -> (u32, u32);

    /// Whether the asset has finished decoding. Never reverts to `false`.
    fn is_ready(&self) -> bool;
}

//! Error types.
//!
//! Only construction-time and asset-loading failures are errors. A skin that
//! has nothing to draw at some scale, or whose asset is still pending, answers
//! `None` instead.

use thiserror::Error;

/// Failure to build a skin or one of its owned resources.
#[derive(Debug, Error)]
pub enum SkinError {
    /// The 2D drawing surface could not be created at the requested size.
    #[error("could not acquire a {width}x{height} drawing surface")]
    SurfaceUnavailable { width: u32, height: u32 },
}

/// Failure to load a vector source asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The SVG document could not be parsed.
    #[error("failed to parse SVG: {0}")]
    Parse(#[from] resvg::usvg::Error),

    /// The asset already finished loading; readiness never reverts.
    #[error("asset is already loaded")]
    AlreadyLoaded,
}

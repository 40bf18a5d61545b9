use std::cell::OnceCell;

use resvg::usvg;

use crate::error::AssetError;

use super::SourceAsset;

/// An SVG document that becomes ready exactly once.
///
/// Construct with [`SvgAsset::pending`] when the bytes arrive later (the
/// asset reports not-ready until [`SvgAsset::load`] succeeds), or with
/// [`SvgAsset::from_data`] when they are already available.
pub struct SvgAsset {
    tree: OnceCell<usvg::Tree>,
}

impl SvgAsset {
    pub fn pending() -> Self {
        Self { tree: OnceCell::new() }
    }

    pub fn from_data(data: &[u8]) -> Result<Self, AssetError> {
        let asset = Self::pending();
        asset.load(data)?;
        Ok(asset)
    }

    /// Parses `data` and marks the asset ready.
    ///
    /// A failed parse leaves the asset pending so a later load may still
    /// succeed; loading a ready asset is rejected.
    pub fn load(&self, data: &[u8]) -> Result<(), AssetError> {
        if self.tree.get().is_some() {
            return Err(AssetError::AlreadyLoaded);
        }

        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
        self.tree.set(tree).map_err(|_| AssetError::AlreadyLoaded)?;

        let (w, h) = self.natural_size();
        log::debug!("SvgAsset: loaded {w}x{h} document");
        Ok(())
    }

    /// The parsed document, once ready.
    pub fn tree(&self) -> Option<&usvg::Tree> {
        self.tree.get()
    }
}

impl Default for SvgAsset {
    fn default() -> Self {
        Self::pending()
    }
}

impl SourceAsset for SvgAsset {
    fn natural_size(&self) -> (u32, u32) {
        self.tree.get().map_or((0, 0), |tree| {
            let size = tree.size();
            (size.width().round() as u32, size.height().round() as u32)
        })
    }

    fn is_ready(&self) -> bool {
        self.tree.get().is_some()
    }
}

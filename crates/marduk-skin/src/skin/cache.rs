use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::raster::MipLevel;

/// A mip level's cached result.
#[derive(Debug, PartialEq, Eq)]
pub enum CachedTexture<T> {
    /// Uploaded texture for this level.
    Present(T),
    /// The level rasterizes to zero area; there is nothing to draw.
    Degenerate,
}

impl<T> CachedTexture<T> {
    #[inline]
    pub fn texture(&self) -> Option<&T> {
        match self {
            CachedTexture::Present(t) => Some(t),
            CachedTexture::Degenerate => None,
        }
    }
}

/// Mip level → texture map.
///
/// Entries are written once, on the first request for a level, and never
/// replaced. A missing key means the level was never requested.
#[derive(Debug)]
pub struct MipmapCache<T> {
    entries: HashMap<MipLevel, CachedTexture<T>>,
}

impl<T> Default for MipmapCache<T> {
    fn default() -> Self {
        Self { entries: HashMap::new() }
    }
}

impl<T> MipmapCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, level: MipLevel) -> Option<&CachedTexture<T>> {
        self.entries.get(&level)
    }

    #[inline]
    pub fn contains(&self, level: MipLevel) -> bool {
        self.entries.contains_key(&level)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached levels in ascending order.
    pub fn levels(&self) -> Vec<MipLevel> {
        let mut levels: Vec<_> = self.entries.keys().copied().collect();
        levels.sort_unstable();
        levels
    }

    /// Returns the entry for `level`, computing it with `f` on a miss.
    ///
    /// `f` runs only when the level is absent. If it returns `None` nothing is
    /// stored, so the next call tries again.
    pub fn get_or_try_insert_with<F>(&mut self, level: MipLevel, f: F) -> Option<&CachedTexture<T>>
    where
        F: FnOnce() -> Option<CachedTexture<T>>,
    {
        match self.entries.entry(level) {
            Entry::Occupied(e) => Some(&*e.into_mut()),
            Entry::Vacant(e) => f().map(|value| &*e.insert(value)),
        }
    }

    /// Empties the cache, yielding every uploaded texture exactly once.
    /// Degenerate entries are discarded.
    pub fn drain_textures(&mut self) -> impl Iterator<Item = T> + '_ {
        self.entries.drain().filter_map(|(_, cached)| match cached {
            CachedTexture::Present(t) => Some(t),
            CachedTexture::Degenerate => None,
        })
    }
}

//! On-disk icon cache
//!
//! Icons are downloaded as PNG, optionally doubled in size, and re-encoded to
//! lossy WebP under `{static_dir}/{folder}/{id}.webp`. An existing file is
//! never fetched again, and a failed download only produces a warning.

use crate::asset::AssetCategory;
use crate::source::HttpSource;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::cell::Cell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Could not decode {category} image \"{id}\": {source}")]
    Decode {
        category: AssetCategory,
        id: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Could not encode {category} image \"{id}\": {message}")]
    Encode {
        category: AssetCategory,
        id: String,
        message: String,
    },

    #[error("{category} image \"{id}\" is too large to upscale ({width}x{height})")]
    TooLarge {
        category: AssetCategory,
        id: String,
        width: u32,
        height: u32,
    },

    #[error("IO error writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What [`ImageCache::ensure`] did for one asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The file was already on disk; nothing was requested
    Cached,
    /// The image was downloaded and written
    Saved,
    /// The download failed and a warning was logged
    Skipped,
}

/// Running totals of cache outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub cached: usize,
    pub saved: usize,
    pub skipped: usize,
}

impl CacheStats {
    fn record(&mut self, outcome: CacheOutcome) {
        match outcome {
            CacheOutcome::Cached => self.cached += 1,
            CacheOutcome::Saved => self.saved += 1,
            CacheOutcome::Skipped => self.skipped += 1,
        }
    }
}

pub struct ImageCache<'a, S: HttpSource> {
    source: &'a S,
    static_dir: PathBuf,
    stats: Cell<CacheStats>,
}

impl<'a, S: HttpSource> ImageCache<'a, S> {
    pub fn new(source: &'a S, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            static_dir: static_dir.into(),
            stats: Cell::new(CacheStats::default()),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.get()
    }

    /// Make sure asset `id` of `category` is cached on disk
    pub fn ensure(&self, category: AssetCategory, id: &str) -> Result<CacheOutcome, CacheError> {
        let outcome = self.ensure_inner(category, id)?;

        let mut stats = self.stats.get();
        stats.record(outcome);
        self.stats.set(stats);

        Ok(outcome)
    }

    fn ensure_inner(&self, category: AssetCategory, id: &str) -> Result<CacheOutcome, CacheError> {
        let target = category.cache_path(&self.static_dir, id);

        if target.is_file() {
            debug!(%category, id, "Image already cached");
            return Ok(CacheOutcome::Cached);
        }

        let data = match self.source.get(&category.url(id)) {
            Ok(data) => data,
            Err(e) => {
                warn!(%category, id, "Could not save image of {} with ID \"{}\": {}", category, id, e);
                return Ok(CacheOutcome::Skipped);
            }
        };

        let image = decode_png(&data).map_err(|source| CacheError::Decode {
            category,
            id: id.to_string(),
            source,
        })?;

        let image = if category.upscale() {
            double_size(&image).ok_or_else(|| CacheError::TooLarge {
                category,
                id: id.to_string(),
                width: image.width(),
                height: image.height(),
            })?
        } else {
            image
        };

        let encoded = encode_webp(&image, category.quality()).map_err(|message| CacheError::Encode {
            category,
            id: id.to_string(),
            message,
        })?;

        write_atomic(&target, &encoded)?;
        debug!(%category, id, bytes = encoded.len(), "Image saved");

        Ok(CacheOutcome::Saved)
    }
}

/// Decode PNG bytes into RGBA8
pub fn decode_png(data: &[u8]) -> Result<RgbaImage, image::ImageError> {
    Ok(image::load_from_memory_with_format(data, ImageFormat::Png)?.to_rgba8())
}

/// Double both dimensions with Lanczos3 resampling
///
/// Returns `None` when a doubled side no longer fits in a `u32`.
pub fn double_size(image: &RgbaImage) -> Option<RgbaImage> {
    let (width, height) = doubled_dimensions(image.dimensions())?;
    Some(imageops::resize(image, width, height, FilterType::Lanczos3))
}

fn doubled_dimensions((width, height): (u32, u32)) -> Option<(u32, u32)> {
    Some((width.checked_mul(2)?, height.checked_mul(2)?))
}

/// Encode to lossy WebP at `quality` (1 to 100)
pub fn encode_webp(image: &RgbaImage, quality: u8) -> Result<Vec<u8>, String> {
    webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height())
        .encode_simple(false, f32::from(quality))
        .map(|memory| memory.to_vec())
        .map_err(|e| format!("{:?}", e))
}

/// Write through a temporary file in the target directory, then rename
fn write_atomic(target: &Path, bytes: &[u8]) -> Result<(), CacheError> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let io_err = |source: std::io::Error| CacheError::Io {
        path: target.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;

    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    file.write_all(bytes).map_err(io_err)?;
    file.persist(target).map_err(|e| io_err(e.error))?;

    Ok(())
}

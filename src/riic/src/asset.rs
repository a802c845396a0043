//! Image asset categories
//!
//! Each category fixes where icons are downloaded from, which folder of the
//! static directory they are cached in, and how they are re-encoded.

use std::fmt;
use std::path::{Path, PathBuf};

const ACESHIP_BASE: &str = "https://raw.githubusercontent.com/Aceship/Arknight-Images/main";
const ARKDATA_BASE: &str = "https://raw.githubusercontent.com/astral4/arkdata/main/assets";

/// Extension of every cached image
pub const CACHE_EXTENSION: &str = "webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Operator avatars, keyed by character id
    Character,
    /// Base skill icons, keyed by skill icon id
    Skill,
    /// Elite phase badges, keyed by phase number
    Elite,
    /// Facility icons, keyed by lowercase room id
    Facility,
    /// Item icons, keyed by item icon id
    Item,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Character,
        AssetCategory::Skill,
        AssetCategory::Elite,
        AssetCategory::Facility,
        AssetCategory::Item,
    ];

    /// Directory the PNG sources live in, without a trailing slash
    pub fn base_url(self) -> String {
        match self {
            AssetCategory::Character => format!("{ACESHIP_BASE}/avatars"),
            AssetCategory::Skill => format!("{ACESHIP_BASE}/ui/infrastructure/skill"),
            AssetCategory::Elite => format!("{ACESHIP_BASE}/ui/elite"),
            AssetCategory::Facility => format!("{ARKDATA_BASE}/facility"),
            AssetCategory::Item => format!("{ARKDATA_BASE}/item"),
        }
    }

    /// Folder under the static directory
    pub const fn folder(self) -> &'static str {
        match self {
            AssetCategory::Character => "chars",
            AssetCategory::Skill => "skills",
            AssetCategory::Elite => "elite",
            AssetCategory::Facility => "facilities",
            AssetCategory::Item => "items",
        }
    }

    /// Lossy WebP quality, 1 to 100
    pub const fn quality(self) -> u8 {
        match self {
            AssetCategory::Character => 25,
            AssetCategory::Skill => 50,
            AssetCategory::Elite | AssetCategory::Facility | AssetCategory::Item => 75,
        }
    }

    /// Whether icons are doubled in size before encoding
    pub const fn upscale(self) -> bool {
        !matches!(self, AssetCategory::Character)
    }

    pub const fn name(self) -> &'static str {
        match self {
            AssetCategory::Character => "character",
            AssetCategory::Skill => "skill",
            AssetCategory::Elite => "elite",
            AssetCategory::Facility => "facility",
            AssetCategory::Item => "item",
        }
    }

    /// Download URL of asset `id`
    pub fn url(self, id: &str) -> String {
        format!("{}/{}.png", self.base_url(), id)
    }

    /// Cache location of asset `id` under `static_dir`
    pub fn cache_path(self, static_dir: &Path, id: &str) -> PathBuf {
        static_dir
            .join(self.folder())
            .join(format!("{id}.{CACHE_EXTENSION}"))
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

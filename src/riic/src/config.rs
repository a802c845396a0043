//! Run configuration
//!
//! Every field defaults to the fixed values the planner site expects, so a
//! run without a config file writes to `static/` and `src/lib/data/`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// How operator skills are written to `chars.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLayout {
    /// Skill text inlined in every tier; only `chars.json` is written
    Inline,
    /// Tiers reference `skills.json`; facilities, colors and terms are written too
    #[default]
    Table,
}

impl fmt::Display for SkillLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLayout::Inline => f.write_str("inline"),
            SkillLayout::Table => f.write_str("table"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the image cache
    pub static_dir: PathBuf,
    /// Directory the JSON files are written to
    pub data_dir: PathBuf,
    pub layout: SkillLayout,
    /// HTTP timeout in seconds; unset keeps the client default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Item icon ids cached on every run
    pub item_whitelist: Vec<String>,
    /// Display names applied before the built-in overrides
    pub name_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            static_dir: PathBuf::from("static"),
            data_dir: PathBuf::from("src/lib/data"),
            layout: SkillLayout::default(),
            timeout_secs: None,
            user_agent: None,
            item_whitelist: Vec::new(),
            name_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse a TOML config file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Config::default()),
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Location of a JSON output file
    pub fn data_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.data_path("chars.json"), PathBuf::from("src/lib/data/chars.json"));
        assert_eq!(config.layout, SkillLayout::Table);
        assert_eq!(config.timeout(), None);
        assert!(config.item_whitelist.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("riic.toml");
        fs::write(
            &path,
            "layout = \"inline\"\ntimeout_secs = 10\nitem_whitelist = [\"MTL_SL_G3\"]\n\n[name_overrides]\nchar_010_chen = \"Ch'en\"\n",
        )
        .unwrap();

        let config = Config::from_toml_file(&path).unwrap();

        assert_eq!(config.layout, SkillLayout::Inline);
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.name_overrides["char_010_chen"], "Ch'en");
        assert_eq!(config.item_whitelist, vec!["MTL_SL_G3".to_string()]);
        assert_eq!(config.data_dir, PathBuf::from("src/lib/data"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Config::from_toml_file(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_bad_layout_is_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("riic.toml");
        fs::write(&path, "layout = \"nested\"\n").unwrap();

        let err = Config::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.user_agent = Some("riic-fetch".to_string());
        config.item_whitelist = vec!["MTL_SL_G3".to_string(), "mod_unlock_token".to_string()];
        config
            .name_overrides
            .insert("char_118_yuki".to_string(), "Yuki".to_string());

        let text = config.to_toml_string().unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    advisory::{AdvisoryGenerator, DEFAULT_UV_THRESHOLD},
    band::{Palette, TextToken},
    i18n::Locale,
    model::HumidityScale,
    recommend::Recommender,
};

/// Tunables for the advisory rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    /// Sunscreen guide is emitted when the UV index is strictly above this.
    pub uv_threshold: i32,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            uv_threshold: DEFAULT_UV_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaletteConfig {
    /// Text color on the Cool band.
    pub cool_text: TextToken,
}

/// Presentation preferences for the command-line host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,

    /// Scale humidity is given on when supplied by hand.
    pub humidity_scale: HumidityScale,

    /// Show at most this many guides; all of them when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guides: Option<usize>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [advisory]
/// uv_threshold = 5
///
/// [palette]
/// cool_text = "black"
///
/// [display]
/// locale = "ko"
/// humidity_scale = "percent"
/// max_guides = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub advisory: AdvisoryConfig,
    pub palette: PaletteConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "outfit", "outfit-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn advisory_generator(&self) -> AdvisoryGenerator {
        AdvisoryGenerator::new(self.advisory.uv_threshold)
    }

    pub fn recommender(&self) -> Recommender {
        Recommender::new(self.advisory_generator())
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.cool_text)
    }
}

//! Canvas settings: optional YAML/JSON file, overridden by flags.
//!
//! ```yaml
//! width: 1280
//! height: 720
//! scale: 2
//! color: "#333"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use weft::CanvasSettings;

/// Settings file contents. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<f64>,
    pub color: Option<String>,
}

impl SettingsFile {
    /// Load from `.json` (serde_json) or anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&text).map_err(anyhow::Error::from)
        } else {
            serde_yaml::from_str(&text).map_err(anyhow::Error::from)
        };
        parsed.with_context(|| format!("invalid settings file {}", path.display()))
    }

    fn apply(&self, settings: &mut CanvasSettings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(scale) = self.scale {
            settings.scale = scale;
        }
        if let Some(color) = &self.color {
            settings.color = Some(color.clone());
        }
    }
}

/// Canvas flags shared by `render` and `benchmark`.
#[derive(Debug, Clone, Default, Args)]
pub struct CanvasArgs {
    /// Settings file (YAML, or JSON by extension)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Canvas width in pixels (default: 640)
    #[arg(long)]
    pub width: Option<u32>,

    /// Canvas height in pixels (default: 480)
    #[arg(long)]
    pub height: Option<u32>,

    /// Uniform drawing scale (default: 1)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Stroke color, any SVG color (default: #222)
    #[arg(long)]
    pub color: Option<String>,
}

impl CanvasArgs {
    /// Defaults, then the settings file, then flags; validated.
    pub fn resolve(&self) -> Result<CanvasSettings> {
        let mut settings = CanvasSettings::default();

        if let Some(path) = &self.config {
            SettingsFile::load(path)?.apply(&mut settings);
        }

        let flags = SettingsFile {
            width: self.width,
            height: self.height,
            scale: self.scale,
            color: self.color.clone(),
        };
        flags.apply(&mut settings);

        settings.validate()?;
        log::debug!("canvas settings: {:?}", settings);
        Ok(settings)
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::surface::MAX_SURFACE_DIMENSION;

/// File the native binary looks for in the working directory
pub const CONFIG_FILE: &str = "sticker_pad.json";

/// Settings for a drawing pad.
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Window title, also used to name exported files
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Integer upscale applied to the canvas when exporting
    pub export_scale: u32,
    /// Directory exports are written to on native targets
    pub export_dir: PathBuf,
    pub thin_pen: f32,
    pub thick_pen: f32,
    /// Glyph size of placed stickers, in canvas pixels
    pub sticker_size: f32,
    /// Built-in sticker palette, in button order
    pub stickers: Vec<String>,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            title: "Sticker Pad".to_owned(),
            canvas_width: 256,
            canvas_height: 256,
            export_scale: 4,
            export_dir: PathBuf::from("."),
            thin_pen: 2.0,
            thick_pen: 6.0,
            sticker_size: 32.0,
            stickers: vec!["🍵".to_owned(), "🌸".to_owned(), "🐸".to_owned()],
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path` if it exists, falling back to defaults otherwise.
    /// A present but broken file is reported and ignored.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }
        if self.export_scale == 0 {
            return Err(ConfigError::Invalid("export_scale must be at least 1".to_owned()));
        }
        if self.export_size().is_none() {
            return Err(ConfigError::Invalid(format!(
                "export of {}x{} at {}x exceeds {MAX_SURFACE_DIMENSION} pixels per side",
                self.canvas_width, self.canvas_height, self.export_scale
            )));
        }
        for (name, value) in [
            ("thin_pen", self.thin_pen),
            ("thick_pen", self.thick_pen),
            ("sticker_size", self.sticker_size),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }

    /// Size of the exported image in pixels, or `None` when a side would
    /// exceed [`MAX_SURFACE_DIMENSION`]
    pub fn export_size(&self) -> Option<(u32, u32)> {
        let width = self.canvas_width.checked_mul(self.export_scale)?;
        let height = self.canvas_height.checked_mul(self.export_scale)?;
        (width <= MAX_SURFACE_DIMENSION && height <= MAX_SURFACE_DIMENSION)
            .then_some((width, height))
    }

    /// Export file name: the title slug with a fixed `-export.png` suffix
    pub fn export_file_name(&self) -> String {
        let slug: String = self
            .title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        let slug = if slug.is_empty() { "drawing".to_owned() } else { slug };
        format!("{slug}-export.png")
    }
}

//! Configuration
//!
//! Theme overrides, tap animation timing and named grids, loaded from
//! `weightgrid.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, Easing, DURATION_STANDARD_MS};
use crate::device::Device;
use crate::error::ConfigError;
use crate::layout::WeightedGridLayout;
use crate::theme::{Color, ColorName, SizeName, Theme, ThemeSettings};

const CONFIG_FILE: &str = "weightgrid.toml";

/// Top-level configuration loaded from weightgrid.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    /// Named grid layouts
    #[serde(default)]
    pub grids: HashMap<String, GridConfig>,
}

/// Theme overrides; anything unset keeps the built-in value
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub padding: Option<f32>,

    #[serde(default)]
    pub icon_inline_size: Option<f32>,

    #[serde(default)]
    pub text_size: Option<f32>,

    /// Color token name -> hex color
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl ThemeConfig {
    /// Overlay the configured values on the default theme
    pub fn to_settings(&self) -> Result<ThemeSettings, ConfigError> {
        let mut settings = ThemeSettings::new();

        let sizes = [
            (SizeName::Padding, self.padding),
            (SizeName::InlineIcon, self.icon_inline_size),
            (SizeName::Text, self.text_size),
        ];
        for (name, value) in sizes {
            if let Some(value) = value {
                settings = settings.with_size(name, value);
            }
        }

        for (token, hex) in &self.colors {
            let name = ColorName::from_name(token)
                .ok_or_else(|| ConfigError::UnknownColorToken(token.clone()))?;
            let color = Color::from_hex(hex).map_err(|source| ConfigError::Color {
                name: token.clone(),
                source,
            })?;
            settings = settings.with_color(name, color);
        }

        Ok(settings)
    }
}

/// Button tap ripple timing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_tap_duration")]
    pub tap_duration_ms: u32,

    /// Easing name: linear, ease, ease-in, ease-out, ease-in-out
    #[serde(default = "default_tap_easing")]
    pub tap_easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tap_duration_ms: default_tap_duration(),
            tap_easing: default_tap_easing(),
        }
    }
}

fn default_tap_duration() -> u32 {
    DURATION_STANDARD_MS
}

fn default_tap_easing() -> String {
    "ease-out".to_string()
}

impl AnimationConfig {
    /// Tap animation curve; unknown easing names fall back to ease-out
    pub fn to_animation(&self) -> Animation {
        let easing = Easing::from_name(&self.tap_easing).unwrap_or_else(|| {
            crate::log!("Unknown tap easing '{}', using ease-out", self.tap_easing);
            Easing::EaseOut
        });
        Animation::progress_curve(self.tap_duration_ms, easing)
    }
}

/// A configured weighted grid
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    pub weights: Vec<usize>,

    /// columns | rows | adaptive
    #[serde(default = "default_arrangement")]
    pub arrangement: String,
}

fn default_arrangement() -> String {
    "columns".to_string()
}

impl GridConfig {
    /// Build the layout; `device` is required for adaptive grids
    pub fn build(
        &self,
        name: &str,
        theme: Rc<dyn Theme>,
        device: Option<Rc<dyn Device>>,
    ) -> Result<WeightedGridLayout, ConfigError> {
        let weights = self.weights.clone();
        let layout = match self.arrangement.to_lowercase().as_str() {
            "columns" | "horizontal" => WeightedGridLayout::with_columns(weights, theme),
            "rows" | "vertical" => WeightedGridLayout::with_rows(weights, theme),
            "adaptive" => {
                let device = device.ok_or_else(|| ConfigError::MissingDevice(name.to_string()))?;
                WeightedGridLayout::adaptive(weights, theme, device)
            }
            other => return Err(ConfigError::UnknownArrangement(other.to_string())),
        };

        layout.map_err(|source| ConfigError::Layout {
            name: name.to_string(),
            source,
        })
    }
}

impl Config {
    /// Find weightgrid.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("weightgrid").join(CONFIG_FILE)),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };

        Self::load_from_path(&path).unwrap_or_else(|e| {
            crate::log!("Failed to load {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = content.parse::<Config>()?;
        crate::log!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build every configured grid, keyed by name
    pub fn build_grids(
        &self,
        theme: Rc<dyn Theme>,
        device: Option<Rc<dyn Device>>,
    ) -> Result<HashMap<String, WeightedGridLayout>, ConfigError> {
        self.grids
            .iter()
            .map(|(name, grid)| {
                let layout = grid.build(name, theme.clone(), device.clone())?;
                Ok((name.clone(), layout))
            })
            .collect()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

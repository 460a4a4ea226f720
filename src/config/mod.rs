use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration (stored in ~/.config/shelfboard/)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl GlobalConfig {
    /// Load global config from the default location.
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            toml::from_str(&content).context("Failed to parse config")
        } else {
            Ok(Self::default())
        }
    }

    /// Load the global config, falling back to the defaults when the file is
    /// malformed. The parse failure is logged rather than surfaced: a broken
    /// config file should not keep the board from starting.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Save global config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the path to the global config file
    /// Always uses ~/.config/shelfboard/ on all platforms
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").context("Could not determine home directory")?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("shelfboard")
            .join("config.toml"))
    }

    /// Get the path to the global data directory (log output)
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "shelfboard")
            .context("Could not determine data directory")?;
        Ok(dirs.data_dir().to_path_buf())
    }
}

/// Theme configuration with hex colors.
///
/// Built once at startup and handed to the UI. Board logic only picks which
/// of these tokens applies to a column; it never changes the definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Border color for the focused column (hex, e.g. "#FFFF00")
    #[serde(default = "default_color_focused")]
    pub color_focused: String,

    /// Border color for unfocused columns (hex, e.g. "#3C3C3C")
    #[serde(default = "default_color_normal")]
    pub color_normal: String,

    /// Color for dimmed/help text (hex, e.g. "#666666")
    #[serde(default = "default_color_dimmed")]
    pub color_dimmed: String,

    /// Text color for book titles (hex, e.g. "#FFFFFF")
    #[serde(default = "default_color_text")]
    pub color_text: String,

    /// Color for book descriptions (hex, e.g. "#FFB6C1")
    #[serde(default = "default_color_description")]
    pub color_description: String,

    /// Color for column headers when not focused (hex, e.g. "#AAAAAA")
    #[serde(default = "default_color_column_header")]
    pub color_column_header: String,

    /// Border color for the new-book form (hex, e.g. "#00FF00")
    #[serde(default = "default_color_form_border")]
    pub color_form_border: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_focused: default_color_focused(),
            color_normal: default_color_normal(),
            color_dimmed: default_color_dimmed(),
            color_text: default_color_text(),
            color_description: default_color_description(),
            color_column_header: default_color_column_header(),
            color_form_border: default_color_form_border(),
        }
    }
}

fn default_color_focused() -> String {
    "#ead49a".to_string() // Yellow
}

fn default_color_normal() -> String {
    "#3c3c3c".to_string() // Dark Gray
}

fn default_color_dimmed() -> String {
    "#9C9991".to_string() // Gray
}

fn default_color_text() -> String {
    "#f2ece6".to_string() // Light Rose
}

fn default_color_description() -> String {
    "#C4B0AC".to_string() // Rose (dimmed)
}

fn default_color_column_header() -> String {
    "#a0d2fa".to_string() // Light Blue Gray
}

fn default_color_form_border() -> String {
    "#9ffcf8".to_string() // Light Cyan
}

impl ThemeConfig {
    /// Parse a hex color string to RGB tuple
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

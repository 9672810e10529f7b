use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level, used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Navigation title shown above the carousel
    #[serde(default = "default_title")]
    pub title: String,
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Panel width in carousel units
    #[serde(default = "default_panel_width")]
    pub panel_width: f64,
    /// Panel height in carousel units
    #[serde(default = "default_panel_height")]
    pub panel_height: f64,
    /// Transition animation
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate(),
            panel_width: default_panel_width(),
            panel_height: default_panel_height(),
            animation: AnimationConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Easing curve applied to panel transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Panel transition animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animate index changes (false = jump)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Transition duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Redraw rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            fps: default_animation_fps(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "gruvbox-dark", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Screen background
    pub bg0: Option<String>,
    /// Toolbar and status bar background
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Dimmed foreground
    pub fg1: Option<String>,
    /// Accent color (title, enabled arrows)
    pub accent: Option<String>,
    // Panel colors
    pub red: Option<String>,
    pub orange: Option<String>,
    pub green: Option<String>,
    pub blue: Option<String>,
    pub purple: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "h", "<C-n>" (Ctrl+n), "<S-Tab>", "<Left>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Show the previous panel
    #[serde(default = "default_key_previous")]
    pub previous: String,
    /// Show the next panel
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            previous: default_key_previous(),
            next: default_key_next(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_previous() -> String { "h".to_string() }
fn default_key_next() -> String { "l".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    PathBuf::from("~/.local/share/carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_title() -> String {
    "Image Carousel".to_string()
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_panel_width() -> f64 {
    300.0
}

fn default_panel_height() -> f64 {
    500.0
}

fn default_animation_duration() -> u64 {
    350
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.title, "Image Carousel");
        assert_eq!(config.ui.panel_width, 300.0);
        assert_eq!(config.ui.panel_height, 500.0);
        assert!(config.ui.animation.enabled);
        assert_eq!(config.ui.animation.easing, EasingType::Cubic);
        assert_eq!(config.keymap.previous, "h");
        assert_eq!(config.keymap.next, "l");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            title = "Colors"

            [ui.animation]
            easing = "ease_out"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.title, "Colors");
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.animation.easing, EasingType::EaseOut);
        assert_eq!(config.ui.animation.duration_ms, 350);
        assert_eq!(config.keymap.quit, "q");
    }

    #[test]
    fn test_default_data_dir_is_portable() {
        let config = AppConfig::default();
        assert_eq!(config.general.data_dir, PathBuf::from("~/.local/share/carousel"));
        assert!(config.to_toml().unwrap().contains("~/.local/share/carousel"));
        if let Some(home) = dirs::home_dir() {
            assert!(config.data_dir().starts_with(home));
            assert!(config.log_path().ends_with("carousel.log"));
        }
    }

    #[test]
    fn test_theme_as_string() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");
        assert!(config.ui.theme.colors.red.is_none());
    }

    #[test]
    fn test_theme_as_table() {
        let config = AppConfig::from_toml(
            r##"
            [ui.theme]
            name = "dracula"
            colors = { red = "#ff0000" }
            "##,
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.red.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_toml_output_parses_back() {
        let text = AppConfig::default().to_toml().unwrap();
        let parsed = AppConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.ui.title, "Image Carousel");
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        let path = Path::new("/tmp/carousel");
        assert_eq!(expand_tilde(path), PathBuf::from("/tmp/carousel"));
    }
}

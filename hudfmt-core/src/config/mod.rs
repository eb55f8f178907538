//! Configuration types for hudfmt
//!
//! Every formatter has fixed defaults; a host can override them from a TOML
//! file so that overlays across a game share one look.

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::FormatError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub money: MoneyConfig,
    #[serde(default)]
    pub html: HtmlConfig,
    #[serde(default)]
    pub reflection: ReflectionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Append the centisecond part (`m:ss.cc`)
    #[serde(default = "default_show_milliseconds")]
    pub show_milliseconds: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoneyConfig {
    #[serde(default = "default_show_decimal")]
    pub show_decimal: bool,
    /// `1,234.56` when true, `1.234,56` otherwise
    #[serde(default = "default_english_style")]
    pub english_style: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlConfig {
    #[serde(default = "default_font_size")]
    pub size: u32,
    /// Hex RGB without the leading `#`
    #[serde(default = "default_font_color")]
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionConfig {
    /// Compare and print short type names instead of qualified ones
    #[serde(default = "default_simple_names")]
    pub simple_names: bool,
}

// Default value functions
fn default_show_milliseconds() -> bool { false }
fn default_show_decimal() -> bool { true }
fn default_english_style() -> bool { true }
fn default_font_size() -> u32 { 12 }
fn default_font_color() -> String { "FFFFFF".to_string() }
fn default_simple_names() -> bool { true }

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            show_milliseconds: default_show_milliseconds(),
        }
    }
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            show_decimal: default_show_decimal(),
            english_style: default_english_style(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            size: default_font_size(),
            color: default_font_color(),
            bold: false,
            italic: false,
            underlined: false,
        }
    }
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            simple_names: default_simple_names(),
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, FormatError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| FormatError::Configuration(format!("Failed to parse config: {}", e)))?;
    tracing::debug!("Loaded formatting config from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), FormatError> {
    let path = path.as_ref();
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    tracing::debug!("Saved formatting config to {}", path.display());
    Ok(())
}

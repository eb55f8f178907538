//! Core types shared across hudfmt crates

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{FormatError, FormatResult};
pub use config::{
    default_config, load_config, save_config, Config, HtmlConfig, MoneyConfig,
    ReflectionConfig, TimeConfig,
};
pub use logging::init_logging;

//! hudfmt: string formatting helpers for 2D game debug overlays and HUDs
//!
//! ```
//! use hudfmt::{format_money, format_time, html_format};
//!
//! assert_eq!(format_time(63.256, true), "1:03.25");
//! assert_eq!(format_money(1234567.891, true, true), "1,234,567.89");
//! assert_eq!(
//!     html_format("hi", 12, "FF0000", true, false, false),
//!     "<b><font size='12' color='#FF0000'>hi</font></b>"
//! );
//! ```

pub use hudfmt_core::{config, error, logging};
pub use hudfmt_utils::{display, reflect};

pub use hudfmt_core::{
    init_logging, load_config, save_config, Config, FormatError, FormatResult,
};
pub use hudfmt_utils::{
    class_name, filter_digits, format_array, format_array_opt, format_map_keys, format_money,
    format_money_default, format_ticks, format_time, format_time_with, html_format,
    native_class_name, same_class_name, try_format_money, try_format_time, HtmlStyle,
    MoneyStyle, NativeTypeNames, TypeNameSource, TypeRegistry,
};

/// Formatters preconfigured from a [`Config`]
///
/// Convenient for hosts that load one config at startup and format many
/// values with it.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: Config,
    money: MoneyStyle,
    html: HtmlStyle,
}

impl Formatter {
    pub fn new(config: Config) -> Self {
        let money = MoneyStyle::from(&config.money);
        let html = HtmlStyle::from(&config.html);
        Self { config, money, html }
    }

    /// Build from a TOML config file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> FormatResult<Self> {
        Ok(Self::new(load_config(path)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self, seconds: f64) -> String {
        format_time_with(seconds, &self.config.time)
    }

    pub fn money(&self, amount: f64) -> String {
        self.money.format(amount)
    }

    pub fn html(&self, text: &str) -> String {
        self.html.wrap(text)
    }

    pub fn class_name<S: TypeNameSource, T: std::any::Any>(
        &self,
        source: &S,
        obj: Option<&T>,
    ) -> Option<String> {
        class_name(source, obj, self.config.reflection.simple_names)
    }

    pub fn same_class_name<S, A, B>(&self, source: &S, a: Option<&A>, b: Option<&B>) -> bool
    where
        S: TypeNameSource,
        A: std::any::Any,
        B: std::any::Any,
    {
        same_class_name(source, a, b, self.config.reflection.simple_names)
    }
}

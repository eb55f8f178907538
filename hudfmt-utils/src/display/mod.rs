//! Display and formatting utilities

pub mod collections;
pub mod html;
pub mod money;
pub mod text;
pub mod time;

// Re-export commonly used types
pub use collections::{format_array, format_array_opt, format_map_keys};
pub use html::{html_format, HtmlStyle};
pub use money::{format_money, format_money_default, try_format_money, MoneyStyle};
pub use text::filter_digits;
pub use time::{format_ticks, format_time, format_time_with, try_format_time};

/// Two-digit field: values below 10 get one leading zero
///
/// Negative values are prefixed as well (`-1` becomes `"0-1"`).
pub(crate) fn pad2(value: i64) -> String {
    if value < 10 {
        format!("0{}", value)
    } else {
        value.to_string()
    }
}

/// Three-digit thousands group
pub(crate) fn pad3(value: u64) -> String {
    format!("{:03}", value)
}

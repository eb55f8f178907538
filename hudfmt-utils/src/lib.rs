//! Formatting helpers for game debug overlays and HUDs
//!
//! Provides clock and tick formatting, money amounts, list and key joining,
//! HTML font tags, digit filtering and type-name introspection. Every
//! formatter is a pure function of its arguments.

pub mod display;
pub mod reflect;

// Re-export commonly used types
pub use display::{
    filter_digits, format_array, format_array_opt, format_map_keys, format_money,
    format_money_default, format_ticks, format_time, format_time_with, html_format,
    try_format_money, try_format_time, HtmlStyle, MoneyStyle,
};
pub use reflect::{
    class_name, native_class_name, same_class_name, NativeTypeNames, TypeNameSource,
    TypeRegistry,
};

//! Currency amount formatting with thousands grouping
//!
//! The output reproduces the legacy overlay format exactly, including two
//! known quirks:
//!
//! - amounts below 1 have an empty integer part, so `0.5` becomes `".50"`;
//! - cents are `floor(amount * 100) - floor(amount) * 100`, which truncates
//!   and inherits floating-point representation error (`1.005` can lose a
//!   cent).
//!
//! The integer part is a saturating `u64` cast: negative and NaN amounts
//! print no integer part, and amounts above `u64::MAX` (about `1.8e19`)
//! print as `18,446,744,073,709,551,615`.

use hudfmt_core::{FormatError, FormatResult, MoneyConfig};

use super::{pad2, pad3};

/// Separator choice and whether cents are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyStyle {
    pub show_decimal: bool,
    /// `1,234.56` when true, `1.234,56` otherwise
    pub english_style: bool,
}

impl Default for MoneyStyle {
    fn default() -> Self {
        Self {
            show_decimal: true,
            english_style: true,
        }
    }
}

impl From<&MoneyConfig> for MoneyStyle {
    fn from(config: &MoneyConfig) -> Self {
        Self {
            show_decimal: config.show_decimal,
            english_style: config.english_style,
        }
    }
}

impl MoneyStyle {
    fn group_separator(&self) -> char {
        if self.english_style { ',' } else { '.' }
    }

    fn decimal_separator(&self) -> char {
        if self.english_style { '.' } else { ',' }
    }

    /// Format `amount` in this style
    pub fn format(&self, amount: f64) -> String {
        let mut out = integer_groups(amount, self.group_separator());

        if self.show_decimal {
            let cents = ((amount * 100.0).floor() - amount.floor() * 100.0) as i64;
            out.push(self.decimal_separator());
            out.push_str(&pad2(cents));
        }

        out
    }
}

/// Most significant group first; inner groups padded to three digits
fn integer_groups(amount: f64, separator: char) -> String {
    // Saturating cast: negative and NaN become 0, huge amounts u64::MAX
    let mut remaining = amount.floor() as u64;
    let mut out = String::new();

    while remaining > 0 {
        let group = remaining % 1000;
        remaining /= 1000;

        let group = if remaining > 0 { pad3(group) } else { group.to_string() };
        out = if out.is_empty() {
            group
        } else {
            format!("{}{}{}", group, separator, out)
        };
    }

    out
}

/// Format a money amount, e.g. `1234567.891` as `"1,234,567.89"`
pub fn format_money(amount: f64, show_decimal: bool, english_style: bool) -> String {
    MoneyStyle {
        show_decimal,
        english_style,
    }
    .format(amount)
}

/// [`format_money`] with cents shown and English separators
pub fn format_money_default(amount: f64) -> String {
    MoneyStyle::default().format(amount)
}

/// Like [`MoneyStyle::format`] but rejects negative and non-finite amounts
pub fn try_format_money(amount: f64, style: MoneyStyle) -> FormatResult<String> {
    if !amount.is_finite() || amount < 0.0 {
        tracing::debug!(amount, "Rejected amount for money formatting");
        return Err(FormatError::invalid_input("amount", amount));
    }
    Ok(style.format(amount))
}

//! HTML font tags for text fields that accept a small HTML subset
//!
//! Text and color are inserted verbatim; nothing is escaped.

use hudfmt_core::HtmlConfig;

/// Font attributes and style toggles for [`HtmlStyle::wrap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStyle {
    pub size: u32,
    /// Hex RGB without the leading `#`
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        Self {
            size: 12,
            color: "FFFFFF".to_string(),
            bold: false,
            italic: false,
            underlined: false,
        }
    }
}

impl From<&HtmlConfig> for HtmlStyle {
    fn from(config: &HtmlConfig) -> Self {
        Self {
            size: config.size,
            color: config.color.clone(),
            bold: config.bold,
            italic: config.italic,
            underlined: config.underlined,
        }
    }
}

impl HtmlStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    /// Wrap `text` in a font tag, then `<u>`, `<i>` and `<b>` from the inside out
    pub fn wrap(&self, text: &str) -> String {
        let mut out = format!(
            "<font size='{}' color='#{}'>{}</font>",
            self.size, self.color, text
        );

        if self.underlined {
            out = format!("<u>{}</u>", out);
        }
        if self.italic {
            out = format!("<i>{}</i>", out);
        }
        if self.bold {
            out = format!("<b>{}</b>", out);
        }

        out
    }
}

/// Wrap `text` in HTML font and style tags
///
/// Defaults used by callers are size 12 and color `FFFFFF`; see
/// [`HtmlStyle::default`].
pub fn html_format(
    text: &str,
    size: u32,
    color: &str,
    bold: bool,
    italic: bool,
    underlined: bool,
) -> String {
    HtmlStyle {
        size,
        color: color.to_string(),
        bold,
        italic,
        underlined,
    }
    .wrap(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_html_format_plain() {
        assert_eq!(
            html_format("hi", 12, "FFFFFF", false, false, false),
            "<font size='12' color='#FFFFFF'>hi</font>"
        );
    }

    #[test]
    fn test_html_format_bold() {
        assert_eq!(
            html_format("hi", 12, "FF0000", true, false, false),
            "<b><font size='12' color='#FF0000'>hi</font></b>"
        );
    }

    #[test]
    fn test_html_format_nesting_order() {
        assert_eq!(
            html_format("x", 20, "00FF00", true, true, true),
            "<b><i><u><font size='20' color='#00FF00'>x</font></u></i></b>"
        );
        assert_eq!(
            html_format("x", 8, "000000", false, true, true),
            "<i><u><font size='8' color='#000000'>x</font></u></i>"
        );
        assert_eq!(
            html_format("x", 8, "000000", true, false, true),
            "<b><u><font size='8' color='#000000'>x</font></u></b>"
        );
    }

    #[test]
    fn test_html_style_builder() {
        let style = HtmlStyle::new().size(14).color("ABCDEF").italic(true);
        assert_eq!(
            style.wrap("score"),
            "<i><font size='14' color='#ABCDEF'>score</font></i>"
        );
    }

    #[test]
    fn test_html_style_from_config() {
        assert_eq!(HtmlStyle::from(&HtmlConfig::default()), HtmlStyle::default());

        let config = HtmlConfig {
            size: 16,
            color: "333333".to_string(),
            bold: true,
            ..HtmlConfig::default()
        };
        assert_eq!(
            HtmlStyle::from(&config).wrap(""),
            "<b><font size='16' color='#333333'></font></b>"
        );
    }

    #[test]
    fn test_html_text_is_not_escaped() {
        assert_eq!(
            HtmlStyle::default().wrap("<br>"),
            "<font size='12' color='#FFFFFF'><br></font>"
        );
    }
}

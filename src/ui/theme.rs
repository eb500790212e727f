use std::str::FromStr;

use ratatui::style::Color;

use crate::config::ColorsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub line: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            line: Color::Green,
            border: Color::Cyan,
            text: Color::White,
        }
    }
}

impl Theme {
    /// Unparseable entries fall back to the default color for that slot.
    pub fn from_config(colors: &ColorsConfig) -> Self {
        let base = Theme::default();
        Theme {
            line: parse_color(&colors.line).unwrap_or(base.line),
            border: parse_color(&colors.border).unwrap_or(base.border),
            text: parse_color(&colors.text).unwrap_or(base.text),
        }
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    parse_hex_color(s).or_else(|| Color::from_str(s).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_colors() {
        let theme = Theme::from_config(&ColorsConfig::default());
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn hex_and_named_colors() {
        let colors = ColorsConfig {
            line: "#ff8800".to_string(),
            border: "blue".to_string(),
            text: "not-a-color".to_string(),
        };
        let theme = Theme::from_config(&colors);
        assert_eq!(theme.line, Color::Rgb(0xff, 0x88, 0x00));
        assert_eq!(theme.border, Color::Blue);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn multibyte_hex_falls_back_to_default() {
        // Six bytes but only three chars.
        let colors = ColorsConfig {
            line: "#a\u{e9}\u{20ac}".to_string(),
            ..ColorsConfig::default()
        };
        assert_eq!(Theme::from_config(&colors).line, Color::Green);
        assert_eq!(parse_hex_color("#\u{e9}\u{e9}\u{e9}"), None);
    }
}

//! Style types for text rendering
//!
//! Highlighting works with these small value types; `to_content_style`
//! maps them onto crossterm for both the full-screen viewer and
//! printed output.

use crossterm::style::{self as term, Attribute, ContentStyle};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightBlue,
}

impl Color {
    /// crossterm color, `None` for the terminal default
    pub fn to_crossterm(self) -> Option<term::Color> {
        let mapped = match self {
            Color::Default => return None,
            Color::Red => term::Color::DarkRed,
            Color::Green => term::Color::DarkGreen,
            Color::Yellow => term::Color::DarkYellow,
            Color::Blue => term::Color::DarkBlue,
            Color::Magenta => term::Color::DarkMagenta,
            Color::Cyan => term::Color::DarkCyan,
            Color::White => term::Color::Grey,
            Color::BrightBlack => term::Color::DarkGrey,
            Color::BrightRed => term::Color::Red,
            Color::BrightBlue => term::Color::Blue,
        };
        Some(mapped)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Dim/faint text
    pub dim: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a reverse video style (for headers and badges)
    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Default::default()
        }
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Builder: set dim
    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Equivalent crossterm style
    pub fn to_content_style(&self) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = self.fg.to_crossterm();
        let flags = [
            (self.bold, Attribute::Bold),
            (self.dim, Attribute::Dim),
            (self.italic, Attribute::Italic),
            (self.reverse, Attribute::Reverse),
        ];
        for (on, attribute) in flags {
            if on {
                style.attributes.set(attribute);
            }
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_italic();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_default_content_style_is_empty() {
        assert_eq!(Style::default().to_content_style(), ContentStyle::new());
    }

    #[test]
    fn test_content_style_mapping() {
        let style = Style::fg(Color::Magenta).with_bold().with_dim().to_content_style();
        assert_eq!(style.foreground_color, Some(term::Color::DarkMagenta));
        assert!(style.attributes.has(Attribute::Bold));
        assert!(style.attributes.has(Attribute::Dim));
        assert!(!style.attributes.has(Attribute::Italic));
        assert!(!style.attributes.has(Attribute::Reverse));

        let badge = Style::reverse().to_content_style();
        assert_eq!(badge.foreground_color, None);
        assert!(badge.attributes.has(Attribute::Reverse));
    }
}

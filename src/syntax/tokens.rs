//! Token categories for syntax highlighting
//!
//! This module defines the categories a word can be classified into
//! and their default visual styles.

use super::style::{Color, Style};

/// Visual classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Language keywords (const, function, return, ...)
    Keyword,
    /// Built-in type names (string, Promise, ...)
    TypeName,
    /// Words opening with a string delimiter
    StringLiteral,
    /// Whole-line comments
    Comment,
    /// Identifier immediately followed by `(`
    Call,
    /// Digit runs
    NumericLiteral,
    /// Anything else
    Plain,
}

impl Category {
    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Keyword => Style::fg(Color::Magenta).with_bold(),
            Category::TypeName => Style::fg(Color::Yellow),
            Category::StringLiteral => Style::fg(Color::Green),
            Category::Comment => Style::fg(Color::BrightBlack).with_italic(),
            Category::Call => Style::fg(Color::Blue),
            Category::NumericLiteral => Style::fg(Color::Cyan),
            Category::Plain => Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        assert!(!Category::Comment.default_style().is_default());
        assert!(!Category::StringLiteral.default_style().is_default());
        assert!(!Category::Keyword.default_style().is_default());
        // Plain text is never decorated
        assert!(Category::Plain.default_style().is_default());
    }
}

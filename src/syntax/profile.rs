//! Language profiles for syntax highlighting
//!
//! A profile bundles the word sets and delimiters that parameterize
//! the line scanner for one source language.

use std::collections::HashSet;

use super::scanner::{self, ClassifiedLine};

/// Keyword set, type-name set, comment prefix and string delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Profile name (e.g., "typescript")
    pub name: String,
    /// Keywords, matched case-sensitively as whole words
    pub keywords: HashSet<String>,
    /// Built-in type names, matched case-sensitively as whole words
    pub types: HashSet<String>,
    /// Prefix that marks a whole-line comment (empty disables comments)
    pub comment_prefix: String,
    /// Characters that open a string literal
    pub string_delimiters: Vec<char>,
}

impl LanguageProfile {
    /// Create an empty profile
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            keywords: HashSet::new(),
            types: HashSet::new(),
            comment_prefix: String::new(),
            string_delimiters: Vec::new(),
        }
    }

    /// Add keywords
    pub fn add_keywords(&mut self, words: &[&str]) {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Add type names
    pub fn add_types(&mut self, words: &[&str]) {
        self.types.extend(words.iter().map(|w| w.to_string()));
    }

    /// Set the whole-line comment prefix
    pub fn set_comment_prefix(&mut self, prefix: &str) {
        self.comment_prefix = prefix.to_string();
    }

    /// Add string delimiter characters
    pub fn add_string_delimiters(&mut self, delimiters: &[char]) {
        for &ch in delimiters {
            if !self.string_delimiters.contains(&ch) {
                self.string_delimiters.push(ch);
            }
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    pub fn is_string_delimiter(&self, ch: char) -> bool {
        self.string_delimiters.contains(&ch)
    }

    /// Check whether a line is a whole-line comment
    pub fn is_comment_line(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.trim_start().starts_with(&self.comment_prefix)
    }

    /// Highlight a multi-line snippet with this profile
    pub fn highlight(&self, code: &str) -> Vec<ClassifiedLine> {
        scanner::highlight(code, self)
    }
}

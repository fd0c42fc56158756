//! Syntax highlighting module
//!
//! A best-effort, line-based highlighter for card snippets. It only
//! decorates text: every classified line reassembles to its source.

mod builtin;
mod profile;
mod scanner;
mod style;
mod tokens;

pub use builtin::{all_profiles, profile_by_name};
pub use profile::LanguageProfile;
pub use scanner::{classify_word, highlight, highlight_line, ClassifiedLine, LineKind, Token};
pub use style::{Color, Style};
pub use tokens::Category;

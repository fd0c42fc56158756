//! Line scanner for syntax highlighting
//!
//! Each line is scanned independently. A line is either a whole-line
//! comment or code; code lines are split into whitespace-separated words
//! and every word is run through an ordered list of classifiers, the
//! first match deciding its category. Nothing is ever dropped: indent,
//! words and separators concatenate back to the original line.

use super::profile::LanguageProfile;
use super::tokens::Category;

/// A classified word together with the whitespace that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Non-empty word text
    pub text: String,
    /// Whitespace run after the word (empty at end of line)
    pub separator: String,
    pub category: Category,
}

impl Token {
    fn new(text: &str, separator: &str, category: Category) -> Self {
        Self {
            text: text.to_string(),
            separator: separator.to_string(),
            category,
        }
    }
}

/// One source line split into classified tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// Leading whitespace before the first token
    pub indent: String,
    pub tokens: Vec<Token>,
}

impl ClassifiedLine {
    /// Reassemble the original line text
    pub fn text(&self) -> String {
        let mut out = self.indent.clone();
        for token in &self.tokens {
            out.push_str(&token.text);
            out.push_str(&token.separator);
        }
        out
    }
}

/// How a line is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The whole trimmed line is one comment token
    Comment,
    /// The line is split into classified words
    Code,
}

impl LineKind {
    pub fn of(line: &str, profile: &LanguageProfile) -> Self {
        if profile.is_comment_line(line) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }
}

type Classifier = fn(&str, &LanguageProfile) -> bool;

/// Classifiers in precedence order; anything unmatched is Plain.
const CLASSIFIERS: [(Classifier, Category); 5] = [
    (has_keyword, Category::Keyword),
    (has_type_name, Category::TypeName),
    (opens_string, Category::StringLiteral),
    (has_call, Category::Call),
    (has_number, Category::NumericLiteral),
];

/// Classify a single whitespace-free word
pub fn classify_word(word: &str, profile: &LanguageProfile) -> Category {
    CLASSIFIERS
        .iter()
        .find(|(matches, _)| matches(word, profile))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Plain)
}

/// Highlight a snippet; one classified line per `\n`-separated line
pub fn highlight(code: &str, profile: &LanguageProfile) -> Vec<ClassifiedLine> {
    code.split('\n')
        .map(|line| highlight_line(line, profile))
        .collect()
}

/// Highlight a single line
pub fn highlight_line(line: &str, profile: &LanguageProfile) -> ClassifiedLine {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    let tokens = match LineKind::of(line, profile) {
        LineKind::Comment => vec![Token::new(body, "", Category::Comment)],
        LineKind::Code => split_words(body)
            .map(|(word, sep)| Token::new(word, sep, classify_word(word, profile)))
            .collect(),
    };

    ClassifiedLine {
        indent: indent.to_string(),
        tokens,
    }
}

/// Split text (with no leading whitespace) into (word, trailing whitespace) pairs
fn split_words(mut rest: &str) -> impl Iterator<Item = (&str, &str)> {
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (word, tail) = rest.split_at(word_end);
        let sep_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
        let (sep, next) = tail.split_at(sep_end);
        rest = next;
        Some((word, sep))
    })
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_ident_char(ch: char) -> bool {
    is_word_char(ch) || ch == '$'
}

/// Maximal runs of word characters, i.e. the text between word boundaries
fn word_runs(word: &str) -> impl Iterator<Item = &str> {
    word.split(|c: char| !is_word_char(c)).filter(|run| !run.is_empty())
}

fn has_keyword(word: &str, profile: &LanguageProfile) -> bool {
    word_runs(word).any(|run| profile.is_keyword(run))
}

fn has_type_name(word: &str, profile: &LanguageProfile) -> bool {
    word_runs(word).any(|run| profile.is_type(run))
}

fn opens_string(word: &str, profile: &LanguageProfile) -> bool {
    word.chars().next().is_some_and(|ch| profile.is_string_delimiter(ch))
}

/// An identifier directly followed by `(`, starting at a word boundary.
/// A `$` can only open an identifier right after a word character.
fn has_call(word: &str, _profile: &LanguageProfile) -> bool {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len()).any(|start| call_starts_at(&chars, start))
}

fn call_starts_at(chars: &[char], start: usize) -> bool {
    let first = chars[start];
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }

    let after_word = start > 0 && is_word_char(chars[start - 1]);
    if after_word == is_word_char(first) {
        return false;
    }

    let end = chars[start..]
        .iter()
        .position(|&ch| !is_ident_char(ch))
        .map_or(chars.len(), |len| start + len);
    chars.get(end) == Some(&'(')
}

fn has_number(word: &str, _profile: &LanguageProfile) -> bool {
    word_runs(word).any(|run| run.chars().all(|ch| ch.is_ascii_digit()))
}

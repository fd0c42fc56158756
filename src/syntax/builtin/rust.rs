//! Rust language profile

use crate::syntax::profile::LanguageProfile;

/// Create the Rust profile
pub fn rust_profile() -> LanguageProfile {
    let mut profile = LanguageProfile::new("rust");

    profile.add_keywords(&[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ]);

    profile.add_types(&[
        "bool", "char", "str", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32",
        "i64", "i128", "isize", "f32", "f64", "String", "Vec", "Box", "Rc", "Arc", "Option",
        "Result", "Some", "None", "Ok", "Err",
    ]);

    profile.set_comment_prefix("//");
    profile.add_string_delimiters(&['"']);

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    #[test]
    fn test_rust_line() {
        let profile = rust_profile();
        let line = &profile.highlight("let total: u64 = sum(items);")[0];
        let cats: Vec<_> = line.tokens.iter().map(|t| t.category).collect();
        assert_eq!(
            cats,
            vec![
                Category::Keyword,
                Category::Plain,
                Category::TypeName,
                Category::Plain,
                Category::Call,
            ]
        );
    }

    #[test]
    fn test_doc_comment_is_comment() {
        let profile = rust_profile();
        let line = &profile.highlight("    /// Returns the total")[0];
        assert_eq!(line.tokens.len(), 1);
        assert_eq!(line.tokens[0].category, Category::Comment);
    }
}

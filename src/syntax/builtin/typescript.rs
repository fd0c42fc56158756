//! TypeScript/JavaScript language profile

use crate::syntax::profile::LanguageProfile;

/// Create the TypeScript profile (also used for plain JavaScript)
pub fn typescript_profile() -> LanguageProfile {
    let mut profile = LanguageProfile::new("typescript");

    profile.add_keywords(&[
        "const", "let", "var", "function", "return", "if", "else", "for", "while", "import",
        "export", "from", "class", "interface", "type", "extends", "implements", "new", "this",
        "async", "await", "try", "catch", "throw",
    ]);

    profile.add_types(&[
        "string", "number", "boolean", "any", "void", "Promise", "Date", "Array", "Object",
    ]);

    profile.set_comment_prefix("//");
    profile.add_string_delimiters(&['\'', '"', '`']);

    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Category;

    #[test]
    fn test_typescript_card_line() {
        let profile = typescript_profile();
        let lines = profile.highlight("function createMenu({ title }: MenuConfig) {\n  // ...\n}");

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].tokens[0].category, Category::Keyword);
        assert_eq!(lines[0].tokens[1].category, Category::Call);
        assert_eq!(lines[1].tokens.len(), 1);
        assert_eq!(lines[1].tokens[0].category, Category::Comment);
        assert_eq!(lines[2].tokens[0].category, Category::Plain);
    }

    #[test]
    fn test_type_annotation() {
        let profile = typescript_profile();
        let line = &profile.highlight("  title: string;")[0];
        assert_eq!(line.tokens[1].category, Category::TypeName);
    }
}

//! Built-in language profiles
//!
//! This module provides highlighting profiles for the languages
//! card snippets are written in.

mod python;
mod rust;
mod typescript;

use super::profile::LanguageProfile;

/// Get all built-in language profiles
pub fn all_profiles() -> Vec<LanguageProfile> {
    vec![
        typescript::typescript_profile(),
        rust::rust_profile(),
        python::python_profile(),
    ]
}

/// Look up a built-in profile by name (case-insensitive)
pub fn profile_by_name(name: &str) -> Option<LanguageProfile> {
    let wanted = name.to_lowercase();
    all_profiles().into_iter().find(|p| match wanted.as_str() {
        "ts" | "js" | "javascript" => p.name == "typescript",
        "rs" => p.name == "rust",
        "py" => p.name == "python",
        other => p.name == other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup() {
        assert_eq!(profile_by_name("TypeScript").map(|p| p.name), Some("typescript".to_string()));
        assert_eq!(profile_by_name("js").map(|p| p.name), Some("typescript".to_string()));
        assert_eq!(profile_by_name("rs").map(|p| p.name), Some("rust".to_string()));
        assert_eq!(profile_by_name("python").map(|p| p.name), Some("python".to_string()));
        assert!(profile_by_name("cobol").is_none());
    }

    #[test]
    fn test_all_profiles_have_comments_and_strings() {
        for profile in all_profiles() {
            assert!(!profile.comment_prefix.is_empty(), "{}", profile.name);
            assert!(!profile.string_delimiters.is_empty(), "{}", profile.name);
            assert!(!profile.keywords.is_empty(), "{}", profile.name);
        }
    }
}

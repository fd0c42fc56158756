//! Python language profile

use crate::syntax::profile::LanguageProfile;

/// Create the Python profile
pub fn python_profile() -> LanguageProfile {
    let mut profile = LanguageProfile::new("python");

    profile.add_keywords(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
        "try", "while", "with", "yield", "self",
    ]);

    profile.add_types(&[
        "int", "float", "str", "bool", "bytes", "list", "dict", "set", "tuple", "object",
    ]);

    profile.set_comment_prefix("#");
    profile.add_string_delimiters(&['\'', '"']);

    profile
}

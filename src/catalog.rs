//! Card catalog
//!
//! The built-in clean-code examples, plus loading of user decks from
//! TOML files. A catalog is read-only once loaded.
//!
//! Deck file format:
//! ```text
//! language = "typescript"
//!
//! [[cards]]
//! id = "1"
//! title = "Meaningful Variable Names"
//! category = "Variables"
//! principle = "Use searchable, descriptive names."
//! bad.code = "const d = new Date();"
//! good.code = "const now = new Date();"
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{CardsError, Result};

/// Topic a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    Variables,
    Functions,
    Classes,
    Async,
    #[serde(rename = "Error Handling")]
    ErrorHandling,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Variables => "Variables",
            Category::Functions => "Functions",
            Category::Classes => "Classes",
            Category::Async => "Async",
            Category::ErrorHandling => "Error Handling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One side of a comparison card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Snippet {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Snippet {
    fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            description: None,
        }
    }
}

/// A single bad-vs-good example card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Example {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub principle: String,
    pub bad: Snippet,
    pub good: Snippet,
}

/// A loaded set of cards and the language their snippets are in
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Language profile name for highlighting, if the deck names one
    #[serde(default)]
    pub language: Option<String>,
    pub cards: Vec<Example>,
}

impl Catalog {
    /// The built-in example cards
    pub fn builtin() -> Self {
        Self {
            language: Some("typescript".to_string()),
            cards: builtin_examples(),
        }
    }

    /// Load a deck from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::parse(&contents)?;
        debug!(path = %path.display(), cards = catalog.cards.len(), "loaded deck");
        Ok(catalog)
    }

    /// Parse deck contents
    pub fn parse(contents: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(contents)?;
        if catalog.cards.is_empty() {
            return Err(CardsError::EmptyDeck);
        }
        Ok(catalog)
    }

    /// Find a card by id
    pub fn find(&self, id: &str) -> Result<&Example> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or_else(|| CardsError::NoSuchCard(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn example(
    id: &str,
    title: &str,
    category: Category,
    principle: &str,
    bad: &str,
    good: &str,
) -> Example {
    Example {
        id: id.to_string(),
        title: title.to_string(),
        category,
        principle: principle.to_string(),
        bad: Snippet::new(bad),
        good: Snippet::new(good),
    }
}

fn builtin_examples() -> Vec<Example> {
    vec![
        example(
            "1",
            "Meaningful Variable Names",
            Category::Variables,
            "Use searchable, descriptive names. Avoid single-letter variables that force the reader to map context mentally.",
            "const yyyymmdstr = moment().format(\"YYYY/MM/DD\");\n\n// What does 'd' stand for?\nconst d = new Date();\nconst diff = d - 3;",
            "const currentDate = moment().format(\"YYYY/MM/DD\");\n\nconst now = new Date();\nconst threeDaysAgo = now - 3;",
        ),
        example(
            "2",
            "Function Arguments",
            Category::Functions,
            "Limit function arguments to 2 or fewer. If you need more, use an object parameter (destructuring).",
            "function createMenu(title, body, buttonText, cancellable) {\n  // ...\n}\n\ncreateMenu(\"Foo\", \"Bar\", \"Baz\", true);",
            "interface MenuConfig {\n  title: string;\n  body: string;\n  buttonText: string;\n  cancellable: boolean;\n}\n\nfunction createMenu({ title, body, buttonText, cancellable }: MenuConfig) {\n  // ...\n}\n\ncreateMenu({\n  title: \"Foo\",\n  body: \"Bar\",\n  buttonText: \"Baz\",\n  cancellable: true\n});",
        ),
        example(
            "3",
            "Functions Should Do One Thing",
            Category::Functions,
            "Functions should do one thing and do it well. This reduces complexity and makes testing easier.",
            "function emailClients(clients: Client[]) {\n  clients.forEach((client) => {\n    const clientRecord = database.lookup(client);\n    if (clientRecord.isActive()) {\n      email(client);\n    }\n  });\n}",
            "function emailActiveClients(clients: Client[]) {\n  clients.filter(isActiveClient).forEach(email);\n}\n\nfunction isActiveClient(client: Client) {\n  const clientRecord = database.lookup(client);\n  return clientRecord.isActive();\n}",
        ),
        example(
            "4",
            "Use Default Arguments",
            Category::Variables,
            "Use ES6 default arguments instead of short-circuiting or conditionals inside the function.",
            "function createMicrobrewery(name) {\n  const breweryName = name || \"Hipster Brew Co.\";\n  // ...\n}",
            "function createMicrobrewery(name: string = \"Hipster Brew Co.\") {\n  // ...\n}",
        ),
        example(
            "5",
            "Avoid Side Effects",
            Category::Functions,
            "Functions should not modify external state or variables passed to them if possible. Return new values instead.",
            "let name = \"Ryan McDermott\";\n\nfunction splitIntoFirstAndLastName() {\n  name = name.split(\" \");\n}\n\nsplitIntoFirstAndLastName();\nconsole.log(name); // ['Ryan', 'McDermott'];",
            "const name = \"Ryan McDermott\";\n\nfunction splitIntoFirstAndLastName(name: string) {\n  return name.split(\" \");\n}\n\nconst newName = splitIntoFirstAndLastName(name);\nconsole.log(name); // 'Ryan McDermott';\nconsole.log(newName); // ['Ryan', 'McDermott'];",
        ),
        example(
            "6",
            "Encapsulate Conditionals",
            Category::Variables,
            "Extract complex conditions into variables or functions to make the logic readable.",
            "if (fsm.state === \"fetching\" && isEmpty(listNode)) {\n  // ...\n}",
            "function shouldShowSpinner(fsm, listNode) {\n  return fsm.state === \"fetching\" && isEmpty(listNode);\n}\n\nif (shouldShowSpinner(fsmInstance, listNodeInstance)) {\n  // ...\n}",
        ),
        example(
            "7",
            "Avoid Flags as Parameters",
            Category::Functions,
            "Flags tell your user that this function does more than one thing. Split them into two functions.",
            "function createFile(name: string, temp: boolean) {\n  if (temp) {\n    fs.create(`./temp/${name}`);\n  } else {\n    fs.create(name);\n  }\n}",
            "function createFile(name: string) {\n  fs.create(name);\n}\n\nfunction createTempFile(name: string) {\n  createFile(`./temp/${name}`);\n}",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.language.as_deref(), Some("typescript"));

        let ids: HashSet<_> = catalog.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 7);
        assert!(catalog.cards.iter().all(|c| !c.bad.code.is_empty() && !c.good.code.is_empty()));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("3").map(|c| c.title.as_str()).ok(), Some("Functions Should Do One Thing"));
        assert!(matches!(catalog.find("99"), Err(CardsError::NoSuchCard(id)) if id == "99"));
    }

    #[test]
    fn test_parse_deck() {
        let contents = r#"
language = "python"

[[cards]]
id = "py-1"
title = "Catch Specific Errors"
category = "Error Handling"
principle = "Never swallow every exception."
bad.code = "try:\n    run()\nexcept:\n    pass"
good = { code = "try:\n    run()\nexcept IOError as err:\n    log(err)", description = "Narrow handler" }
        "#;

        let catalog = Catalog::parse(contents).unwrap();
        assert_eq!(catalog.language.as_deref(), Some("python"));
        assert_eq!(catalog.len(), 1);

        let card = &catalog.cards[0];
        assert_eq!(card.category, Category::ErrorHandling);
        assert_eq!(card.category.to_string(), "Error Handling");
        assert_eq!(card.bad.code.lines().count(), 4);
        assert_eq!(card.bad.description, None);
        assert_eq!(card.good.description.as_deref(), Some("Narrow handler"));
    }

    #[test]
    fn test_parse_rejects_empty_and_invalid() {
        assert!(matches!(Catalog::parse("cards = []"), Err(CardsError::EmptyDeck)));
        assert!(matches!(Catalog::parse("cards = 3"), Err(CardsError::Deck(_))));

        let bad_category = r#"
[[cards]]
id = "1"
title = "t"
category = "Networking"
principle = "p"
bad.code = "a"
good.code = "b"
        "#;
        assert!(matches!(Catalog::parse(bad_category), Err(CardsError::Deck(_))));
    }
}

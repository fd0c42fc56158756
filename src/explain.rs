//! AI explanations for cards
//!
//! Builds a prompt from a card and asks a remote text-generation
//! endpoint why the clean variant is better. The API key is handed in
//! at construction; without one no request is ever made.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::Example;

/// Text shown when the endpoint answers without any text
pub const NO_EXPLANATION: &str = "No explanation generated.";

/// Why an explanation is unavailable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    #[error("API key is missing. Set api-key in ~/.cleancards.conf or GEMINI_API_KEY to use AI explanations.")]
    MissingCredential,

    #[error("Failed to fetch explanation: {0}")]
    Remote(String),
}

/// A remote text-generation backend
pub trait TextGenerator {
    /// Generate text for a prompt. `Ok(None)` means the call succeeded
    /// but produced no text.
    fn generate(&self, api_key: &str, prompt: &str) -> Result<Option<String>, ExplainError>;
}

/// Explanation service: credential plus backend
pub struct Explainer<G> {
    api_key: Option<String>,
    generator: G,
}

impl<G: TextGenerator> Explainer<G> {
    pub fn new(api_key: Option<String>, generator: G) -> Self {
        // An empty key counts as no key
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        Self { api_key, generator }
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Explain why the card's good snippet beats the bad one
    pub fn explain(&self, example: &Example) -> Result<String, ExplainError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            warn!("explanation requested without an API key");
            ExplainError::MissingCredential
        })?;

        let prompt = build_prompt(example);
        debug!(card = %example.id, prompt_len = prompt.len(), "requesting explanation");

        let text = self.generator.generate(api_key, &prompt)?;
        Ok(text
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| NO_EXPLANATION.to_string()))
    }
}

/// Build the natural-language prompt for one card
pub fn build_prompt(example: &Example) -> String {
    format!(
        "You are a Clean Code expert.\n\
         Analyze the following two code snippets.\n\
         \n\
         Context: {title} ({category})\n\
         Principle: {principle}\n\
         \n\
         BAD EXAMPLE:\n\
         {bad}\n\
         \n\
         GOOD EXAMPLE:\n\
         {good}\n\
         \n\
         Explain concisely (in 2-3 short paragraphs) why the Good Example is better.\n\
         Focus on maintainability, readability, and potential bugs.\n\
         Do not repeat the code, just explain the reasoning.\n",
        title = example.title,
        category = example.category,
        principle = example.principle,
        bad = example.bad.code,
        good = example.good.code,
    )
}

/// Google Generative Language (Gemini) REST backend
pub struct GeminiClient {
    agent: ureq::Agent,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    pub fn new(endpoint: &str, model: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, api_key: &str, prompt: &str) -> Result<Option<String>, ExplainError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .agent
            .post(&self.url())
            .set("x-goog-api-key", api_key)
            .send_json(body)
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => {
                    ExplainError::Remote(format!("endpoint returned HTTP {}", code))
                }
                ureq::Error::Transport(transport) => ExplainError::Remote(transport.to_string()),
            })?;

        let parsed: GenerateResponse = response
            .into_json()
            .map_err(|err| ExplainError::Remote(format!("malformed response: {}", err)))?;

        Ok(parsed.text())
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockGenerator {
        calls: AtomicUsize,
        reply: Result<Option<String>, ExplainError>,
    }

    impl MockGenerator {
        fn replying(reply: Result<Option<String>, ExplainError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply,
            }
        }
    }

    impl TextGenerator for MockGenerator {
        fn generate(&self, api_key: &str, prompt: &str) -> Result<Option<String>, ExplainError> {
            assert_eq!(api_key, "secret");
            assert!(prompt.contains("BAD EXAMPLE"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn card() -> Example {
        Catalog::builtin().cards[0].clone()
    }

    #[test]
    fn test_missing_credential_makes_no_call() {
        let explainer = Explainer::new(None, MockGenerator::replying(Ok(Some("x".into()))));
        assert!(!explainer.has_credential());
        assert_eq!(explainer.explain(&card()), Err(ExplainError::MissingCredential));
        assert_eq!(explainer.generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blank_credential_is_missing() {
        let explainer = Explainer::new(Some("  ".into()), MockGenerator::replying(Ok(None)));
        assert_eq!(explainer.explain(&card()), Err(ExplainError::MissingCredential));
        assert_eq!(explainer.generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_explanation() {
        let explainer = Explainer::new(
            Some("secret".into()),
            MockGenerator::replying(Ok(Some("Because names matter.".into()))),
        );
        assert_eq!(explainer.explain(&card()).unwrap(), "Because names matter.");
        assert_eq!(explainer.generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_reply_uses_placeholder() {
        let explainer = Explainer::new(Some("secret".into()), MockGenerator::replying(Ok(None)));
        assert_eq!(explainer.explain(&card()).unwrap(), NO_EXPLANATION);
    }

    #[test]
    fn test_remote_failure_is_not_retried() {
        let explainer = Explainer::new(
            Some("secret".into()),
            MockGenerator::replying(Err(ExplainError::Remote("HTTP 503".into()))),
        );
        let err = explainer.explain(&card()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch explanation: HTTP 503");
        assert_eq!(explainer.generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_prompt_embeds_card_fields() {
        let example = card();
        let prompt = build_prompt(&example);
        assert!(prompt.contains("Context: Meaningful Variable Names (Variables)"));
        assert!(prompt.contains(&example.principle));
        assert!(prompt.contains(&example.bad.code));
        assert!(prompt.contains(&example.good.code));
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}],"role":"model"}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text().as_deref(), Some("Hello, world"));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert_eq!(empty.text(), None);

        let no_parts: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(no_parts.text(), None);
    }

    #[test]
    fn test_url_building() {
        let client = GeminiClient::new(
            "https://example.invalid/v1beta/",
            "gemini-test",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.url(),
            "https://example.invalid/v1beta/models/gemini-test:generateContent"
        );
    }
}

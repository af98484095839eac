//! # grad-ai
//!
//! Client for a hosted chat-completion API used as a university search engine.
//!
//! Every operation sends one user message built from a fixed prompt template,
//! takes the first choice's message content, and pulls a JSON object out of it
//! (see [`extract`]). No retries, no streaming, no caching.

mod error;
pub mod extract;
mod http;
pub mod prompts;
pub mod types;

pub use error::AiError;
pub use types::{Recommendation, ScoreRequirements, UniversitySearchResult, UserProfile};

use std::time::Duration;

use grad_config::AiConfig;
use serde::{Deserialize, Serialize};

use crate::http::check_response;
use crate::types::{RecommendationEnvelope, SearchEnvelope};

// ── Wire types ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    /// Non-empty content of the first choice.
    fn into_content(self) -> Result<String, AiError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(AiError::NoContent)
    }
}

// ── Client ────────────────────────────────────────────────────────

pub struct AiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
}

impl AiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// [`AiError::NotConfigured`] when no API key is set, or [`AiError::Http`]
    /// if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.is_configured() {
            return Err(AiError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("gradtrack/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
        })
    }

    /// Send one prompt and return the reply text.
    ///
    /// # Errors
    ///
    /// Transport, status, or [`AiError::NoContent`] failures.
    pub async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            top_p: self.top_p,
        };

        tracing::debug!(model = %self.model, url = %self.base_url, "sending completion request");
        let resp = self
            .http
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let data: ChatResponse = check_response(resp).await?.json().await?;
        data.into_content()
    }

    /// Universities matching a free-text query.
    ///
    /// # Errors
    ///
    /// Any request or extraction failure.
    pub async fn search_universities(
        &self,
        query: &str,
    ) -> Result<Vec<UniversitySearchResult>, AiError> {
        let content = self.complete(&prompts::search_prompt(query)).await?;
        parse_search(&content)
    }

    /// Details for one named university. Every failure collapses to `None`.
    pub async fn university_details(&self, name: &str) -> Option<UniversitySearchResult> {
        let result = match self.complete(&prompts::details_prompt(name)).await {
            Ok(content) => parse_details(&content),
            Err(e) => Err(e),
        };
        result
            .inspect_err(|e| tracing::warn!(%e, university = name, "university details unavailable"))
            .ok()
    }

    /// Recommendations tailored to a profile.
    ///
    /// # Errors
    ///
    /// Any request or extraction failure.
    pub async fn recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<Recommendation>, AiError> {
        let content = self
            .complete(&prompts::recommendations_prompt(profile))
            .await?;
        parse_recommendations(&content)
    }
}

/// Parse a search reply: the `universities` array, empty if absent.
///
/// # Errors
///
/// [`AiError::NoJson`] or [`AiError::Parse`].
pub fn parse_search(content: &str) -> Result<Vec<UniversitySearchResult>, AiError> {
    Ok(extract::parse_block::<SearchEnvelope>(content)?.universities)
}

/// Parse a details reply: the block itself is the university.
///
/// # Errors
///
/// [`AiError::NoJson`] or [`AiError::Parse`].
pub fn parse_details(content: &str) -> Result<UniversitySearchResult, AiError> {
    extract::parse_block(content)
}

/// Parse a recommendation reply: the `recommendations` array, empty if absent.
///
/// # Errors
///
/// [`AiError::NoJson`] or [`AiError::Parse`].
pub fn parse_recommendations(content: &str) -> Result<Vec<Recommendation>, AiError> {
    Ok(extract::parse_block::<RecommendationEnvelope>(content)?.recommendations)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_api_key_is_not_configured() {
        let err = AiClient::from_config(&AiConfig::default()).err().unwrap();
        assert!(matches!(err, AiError::NotConfigured));
    }

    #[test]
    fn builds_with_api_key() {
        let config = AiConfig {
            api_key: "pplx-test".into(),
            ..Default::default()
        };
        let client = AiClient::from_config(&config).unwrap();
        assert_eq!(client.model, grad_config::DEFAULT_MODEL);
        assert_eq!(client.max_tokens, 4000);
    }

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.2,
            max_tokens: 4000,
            top_p: 0.9,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 4000);
        assert!(value.get("stream").is_none());
    }

    #[test]
    fn content_comes_from_first_choice() {
        let resp: ChatResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{\"a\":1}"}},
                {"index":1,"message":{"role":"assistant","content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(resp.into_content().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn empty_choices_is_no_content() {
        let resp: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(resp.into_content(), Err(AiError::NoContent)));

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert!(matches!(blank.into_content(), Err(AiError::NoContent)));
    }

    #[test]
    fn parse_replies_wrapped_in_prose() {
        let reply = "Sure! Here are some options:\n```json\n{\"universities\":[{\"name\":\"KTH\",\
                     \"location\":\"Stockholm\",\"country\":\"Sweden\"}]}\n```";
        let found = parse_search(reply).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "KTH");

        let details = parse_details(r#"Info: {"name":"KTH Royal Institute of Technology"}"#).unwrap();
        assert_eq!(details.name, "KTH Royal Institute of Technology");

        assert!(parse_recommendations(r#"{"note":"none"}"#).unwrap().is_empty());
        assert!(matches!(parse_recommendations("nothing"), Err(AiError::NoJson)));
    }

    #[test]
    fn one_sloppy_result_keeps_the_rest() {
        let found = parse_search(
            r#"{"universities":[{"name":"KTH","programs":null},{"name":"ETH Zurich","ranking":"Top 10"}]}"#,
        )
        .unwrap();
        let names: Vec<&str> = found.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["KTH", "ETH Zurich"]);

        let picks = parse_recommendations(
            r#"{"recommendations":[{"name":"TU Delft","description":null,"category":"safety"}]}"#,
        )
        .unwrap();
        assert_eq!(picks[0].university.description, "");
        assert_eq!(picks[0].tag(), Some(grad_core::enums::UniversityTag::Safety));
    }
}

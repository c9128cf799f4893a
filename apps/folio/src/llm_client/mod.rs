/// LLM client: the single point of entry for all completion calls in folio.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// Both the terminal `ask` command and the HTTP ask route go through the
/// `Completions` trait so tests can swap in an in-process backend.
///
/// Model: gpt-3.5-turbo (hardcoded; do not make configurable, to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls in folio.
pub const MODEL: &str = "gpt-3.5-turbo";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The completion backend seam. The production implementation is
/// `OpenAiClient`; tests use canned in-process backends.
#[async_trait]
pub trait Completions: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

/// The OpenAI chat-completions client. One request per call, no retry;
/// every failure surfaces to the caller as a single reported error.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
        })
    }
}

#[async_trait]
impl Completions for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the structured error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&body)?;

        let answer = extract_answer(&parsed).ok_or(LlmError::EmptyContent)?;
        debug!("completion call succeeded ({} chars)", answer.len());
        Ok(answer)
    }
}

/// Pulls the answer text out of the first choice, trimmed.
/// An absent or blank content field counts as a malformed response.
fn extract_answer(response: &ChatResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|c| c.message.content.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<ChatResponse, serde_json::Error> {
        serde_json::from_str(body)
    }

    #[test]
    fn test_extract_answer_from_well_formed_response() {
        let response = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"  He led four teams.  "}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_answer(&response).as_deref(), Some("He led four teams."));
    }

    #[test]
    fn test_missing_content_field_is_empty() {
        let response = parse(r#"{"choices":[{"message":{"role":"assistant"}}]}"#).unwrap();
        assert!(extract_answer(&response).is_none());
    }

    #[test]
    fn test_no_choices_is_empty() {
        let response = parse(r#"{"choices":[]}"#).unwrap();
        assert!(extract_answer(&response).is_none());
    }

    #[test]
    fn test_blank_content_is_empty() {
        let response =
            parse(r#"{"choices":[{"message":{"content":"   \n "}}]}"#).unwrap();
        assert!(extract_answer(&response).is_none());
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        assert!(parse(r#"{"unexpected": true}"#).is_err());
    }

    #[test]
    fn test_request_body_matches_wire_format() {
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 500);
    }
}

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::prompts::{build_ask_prompt, RESUME_QA_SYSTEM};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// POST /api/ask
/// Answers one question about the resume. The full content record rides
/// along as prompt context on every call.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = req.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("Question is required".to_string()));
    }

    let backend = state.backend.as_ref().ok_or(AppError::MissingCredential)?;

    let prompt = build_ask_prompt(&state.content, question);
    let answer = backend
        .complete(RESUME_QA_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(AskResponse { answer }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::content::Content;
    use crate::llm_client::{Completions, LlmError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedBackend(Result<&'static str, u16>);

    #[async_trait]
    impl Completions for FixedBackend {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, LlmError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "simulated".to_string(),
                }),
            }
        }
    }

    fn state_with(backend: Option<Arc<dyn Completions>>) -> AppState {
        AppState {
            backend,
            content: Arc::new(Content::builtin()),
            config: Config {
                openai_api_key: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_blank_question_is_a_validation_error() {
        let state = state_with(Some(Arc::new(FixedBackend(Ok("unused")))));
        let result = handle_ask(
            State(state),
            Json(AskRequest {
                question: "   ".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_missing_credential_is_reported_before_any_call() {
        let state = state_with(None);
        let result = handle_ask(
            State(state),
            Json(AskRequest {
                question: "who are you?".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::MissingCredential)));
    }

    #[tokio::test]
    async fn test_backend_failure_maps_to_llm_error() {
        let state = state_with(Some(Arc::new(FixedBackend(Err(502)))));
        let result = handle_ask(
            State(state),
            Json(AskRequest {
                question: "who are you?".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Llm(_))));
    }

    #[tokio::test]
    async fn test_success_returns_the_answer() {
        let state = state_with(Some(Arc::new(FixedBackend(Ok("He led four teams.")))));
        let Json(resp) = handle_ask(
            State(state),
            Json(AskRequest {
                question: "how many teams?".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.answer, "He led four teams.");
    }
}

//! Chat-completion model collaborator.
//!
//! [`ChatModel`] is text in, text out. [`openai::OpenAiChatClient`] talks to
//! any OpenAI-compatible endpoint (Ollama serves one at `/v1`).

pub mod openai;

use serde::Serialize;

use crate::error::PlanResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// A single-shot chat completion. Any failure is a [`PlanError::Transport`](crate::error::PlanError::Transport).
#[allow(async_fn_in_trait)]
pub trait ChatModel {
    async fn complete(&self, messages: &[ChatMessage], temperature: f64) -> PlanResult<String>;

    fn model_id(&self) -> &str;
}

use serde::{Deserialize, Serialize};

use super::{ChatMessage, ChatModel};
use crate::config::ModelConfig;
use crate::error::{PlanError, PlanResult};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for `POST {base_url}/chat/completions`.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiChatClient {
    pub fn new(config: &ModelConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatModel for OpenAiChatClient {
    async fn complete(&self, messages: &[ChatMessage], temperature: f64) -> PlanResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlanError::Transport(format!(
                "model endpoint returned HTTP {status}: {body}"
            )));
        }

        let body: ChatResponse = response.json().await?;
        extract_content(body)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn extract_content(body: ChatResponse) -> PlanResult<String> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| PlanError::Transport("model response contained no choices".into()))
}

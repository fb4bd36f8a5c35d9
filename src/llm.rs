//! Best-effort summarization of history text through a local Ollama
//! completion endpoint.
//!
//! The adapter is purely additive: callers probe [`Summarizer::is_available`]
//! first and fall back to the raw, unsummarized history text whenever the
//! endpoint is down. No failure here ever propagates as an error.

use crate::config::LlmConfig;
use crate::error::LlmError;
use serde::{Deserialize, Serialize};

/// Token budget for the availability probe
const PROBE_TOKENS: u32 = 5;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    num_predict: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Client for the completion endpoint.
#[derive(Debug, Clone)]
pub struct Summarizer {
    http: reqwest::Client,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl Summarizer {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
        }
    }

    /// Liveness probe: one trivial completion with a tiny token budget.
    /// Any transport, status, or decode failure means "not available".
    pub async fn is_available(&self) -> bool {
        match self.chat("test", PROBE_TOKENS).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("completion endpoint unavailable: {e}");
                false
            }
        }
    }

    /// Summarize history text with respect to the user's question.
    ///
    /// Returns the model's response verbatim, or a human-readable fallback
    /// string on any failure. Never returns an error.
    pub async fn summarize(&self, history_text: &str, question: &str) -> String {
        let prompt = format!(
            "Please analyze this git history and answer the user's question concisely.\n\
             \n\
             USER'S QUESTION: {question}\n\
             \n\
             GIT HISTORY:\n\
             {history_text}\n\
             \n\
             Please provide a clear, concise summary focusing on the most relevant changes.\n\
             If there are multiple commits, highlight the most significant ones.\n\
             Explain the evolution of the code and the reasons for changes."
        );

        match self.chat(&prompt, self.max_tokens).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!("LLM summarization failed: {e}");
                format!("Could not generate summary. Error: {e}")
            }
        }
    }

    async fn chat(&self, content: &str, num_predict: u32) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            stream: false,
            options: ChatOptions { num_predict },
        };

        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        if response.message.content.is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(response.message.content)
    }
}

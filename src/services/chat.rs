//! Conversational fallback model client
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint, such as a
//! local server hosting the TinyLlama chat model.

use super::{ConversationModel, LlmConfig};
use crate::detector::{AdaError, AdaResult};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

const SYSTEM_PROMPT: &str = "Jesteś pomocnym asystentem o imieniu Ada. Odpowiadasz zawsze poprawną polszczyzną.
Formułujesz odpowiedzi jako krótkie, gramatycznie poprawne, jasne i zwięzłe zdania.
Na pytania odpowiadasz konkretnie, poprawnie i zgodnie z prawdą.
Nie zgaduj informacji, których nie znasz - powiedz wtedy, że nie wiesz.
Twoje odpowiedzi są zawsze pomocne, dokładne i praktyczne.";

/// Question and answer pairs sent ahead of the user's prompt
const FEW_SHOT_EXAMPLES: &[(&str, &str)] = &[
    ("Jak się nazywasz?", "Nazywam się Ada."),
    ("Która jest godzina?", "Nie mam dostępu do aktualnej godziny."),
    (
        "Co lubisz robić?",
        "Lubię pomagać użytkownikom odpowiadając na ich pytania w sposób jasny i zwięzły.",
    ),
];

pub const EMPTY_REPLY_FALLBACK: &str = "Przepraszam, nie wiem, jak odpowiedzieć na to pytanie.";

const ASSISTANT_MARKER: &str = "<|assistant|>";
const USER_MARKER: &str = "<|user|>";

pub struct ChatClient {
    client: Client,
    config: LlmConfig,
}

impl ChatClient {
    /// Create a new chat client with the given configuration
    pub fn new(config: LlmConfig) -> AdaResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Request payload for one prompt
    pub fn request_body(&self, prompt: &str) -> Value {
        let mut messages = vec![json!({"role": "system", "content": SYSTEM_PROMPT})];
        for (question, answer) in FEW_SHOT_EXAMPLES {
            messages.push(json!({"role": "user", "content": question}));
            messages.push(json!({"role": "assistant", "content": answer}));
        }
        messages.push(json!({"role": "user", "content": prompt}));

        json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "top_p": self.config.top_p,
            "max_tokens": self.config.max_new_tokens,
        })
    }

    fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Send the prompt and return the cleaned up reply
    pub async fn chat(&self, prompt: &str) -> AdaResult<String> {
        if !self.config.enabled {
            return Err(AdaError::ConfigError(
                "conversational model is not enabled".to_string(),
            ));
        }

        info!(model = %self.config.model, "sending prompt to conversational model");

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base_url))
            .header("Content-Type", "application/json")
            .json(&self.request_body(prompt));

        // Local servers usually run without authentication
        if let Some(api_key) = self.api_key() {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let timeout = self.config.timeout_seconds;
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                AdaError::Timeout(timeout)
            } else {
                AdaError::NetworkError(e)
            }
        })?;

        if response.status() == 401 {
            return Err(AdaError::InvalidAPIKey);
        }

        if response.status() == 429 {
            return Err(AdaError::RateLimited);
        }

        let response_text = response.text().await?;
        let response_json: Value = serde_json::from_str(&response_text)?;

        let generated = parse_reply(&response_json)?;
        debug!(generated, "raw model reply");

        Ok(clean_reply(generated, prompt))
    }
}

impl ConversationModel for ChatClient {
    async fn generate(&self, prompt: &str) -> AdaResult<String> {
        self.chat(prompt).await
    }
}

/// Pull the generated text out of a chat completion response
fn parse_reply(response_json: &Value) -> AdaResult<&str> {
    // Check for API errors
    if let Some(error) = response_json.get("error") {
        return Err(AdaError::APIError(
            error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown API error")
                .to_string(),
        ));
    }

    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| AdaError::ParseError("No message content in response".to_string()))
}

/// Strip chat template residue from a generated reply.
///
/// Keeps the text after the last assistant marker and cuts it at the next
/// user marker. Without markers the echoed prompt is removed instead. An
/// empty result becomes a polite apology.
pub fn clean_reply(generated: &str, prompt: &str) -> String {
    let reply = match generated.rsplit_once(ASSISTANT_MARKER) {
        Some((_, last)) => last.split(USER_MARKER).next().unwrap_or_default().trim().to_string(),
        None if prompt.is_empty() => generated.trim().to_string(),
        None => generated.replace(prompt, "").trim().to_string(),
    };

    if reply.is_empty() {
        EMPTY_REPLY_FALLBACK.to_string()
    } else {
        reply
    }
}

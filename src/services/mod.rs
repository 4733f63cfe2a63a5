//! Collaborators the assistant hands work to
//!
//! The detector never calls these itself. The request layer falls back to a
//! [`ConversationModel`] when no command is detected and forwards music
//! commands aimed at Spotify to a [`MusicBackend`].

pub mod chat;
pub mod music;

use crate::detector::{AdaResult, MusicParams};
use serde::Serialize;
use std::future::Future;

pub use chat::ChatClient;
pub use music::UnlinkedMusicBackend;

pub const DEFAULT_MODEL: &str = "TinyLlama/TinyLlama-1.1B-Chat-v1.0";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 100;
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_TOP_P: f32 = 0.85;

/// Free-form text in, free-form text out
pub trait ConversationModel {
    fn generate(&self, prompt: &str) -> impl Future<Output = AdaResult<String>> + Send;
}

/// Outcome reported by a music service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendReply {
    pub success: bool,
    pub message: String,
}

/// Executes music commands against a streaming service.
///
/// Failures are reported in the reply rather than as errors, so the
/// assistant can relay them to the user.
pub trait MusicBackend {
    fn execute(&self, params: &MusicParams) -> impl Future<Output = BackendReply> + Send;
}

/// Conversational model settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    pub enabled: bool,
    pub api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub timeout_seconds: u64,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

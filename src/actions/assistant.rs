//! Assistant request handling
//!
//! Routes an utterance either to the detected command's handler or, when no
//! command is found, to the conversational model.

use std::io::{self, IsTerminal};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{
    actions::display::{print_green, print_yellow},
    args::parser::{AskCommand, DetectCommand},
    config,
    detector::{
        transparency::{format_interpretation, show_interpretation, show_interpretation_compact},
        AdaError, AdaResult, CommandCategory, CommandDetector, CommandInfo, TargetPlatform,
    },
    services::{BackendReply, ChatClient, ConversationModel, MusicBackend, UnlinkedMusicBackend},
};

/// Reply to one utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantReply {
    pub is_command: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_data: Option<CommandInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendReply>,
    pub response: String,
}

pub struct Assistant<M, B> {
    model: M,
    music: B,
}

impl<M: ConversationModel, B: MusicBackend> Assistant<M, B> {
    pub fn new(model: M, music: B) -> Self {
        Self { model, music }
    }

    /// Handle an utterance: run a detected command or fall back to conversation
    pub async fn handle(&self, text: &str) -> AdaResult<AssistantReply> {
        let result = CommandDetector::detect(text);

        let Some(category) = result.category else {
            info!("no command detected, falling back to conversation");
            let response = self.model.generate(text.trim()).await?;
            return Ok(AssistantReply {
                is_command: false,
                command_data: None,
                backend: None,
                response,
            });
        };

        let mut command = CommandDetector::describe(category, &result.parameters);
        let mut backend = None;

        if let Some(params) = result.parameters.music() {
            if category == CommandCategory::Music && params.target_platform == TargetPlatform::Spotify {
                let reply = self.music.execute(params).await;
                if !reply.success {
                    warn!(message = %reply.message, "music backend reported a failure");
                }
                // the backend knows better what actually happened
                if !reply.message.is_empty() {
                    command.user_message = reply.message.clone();
                }
                backend = Some(reply);
            }
        }

        Ok(AssistantReply {
            is_command: true,
            response: command.user_message.clone(),
            command_data: Some(command),
            backend,
        })
    }
}

/// Detection outcome without running anything
pub fn detection_report(text: &str) -> Value {
    let result = CommandDetector::detect(text);
    match result.category {
        Some(category) => {
            let command = CommandDetector::describe(category, &result.parameters);
            json!({
                "detected": true,
                "command_type": category,
                "parameters": result.parameters,
                "user_message": command.user_message,
                "command_data": command,
            })
        },
        None => json!({
            "detected": false,
            "prompt": text,
        }),
    }
}

fn to_json(value: &impl Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {}", e))
}

fn describe_error(error: AdaError) -> String {
    match error {
        AdaError::ConfigError(_) => {
            "Conversational model is disabled. Use 'ada config enable-llm' to enable it.".to_string()
        },
        AdaError::InvalidAPIKey => {
            "The model server rejected the API key. Use 'ada config set-key <api_key>' to set it.".to_string()
        },
        other => format!("Conversational model failed: {}", other),
    }
}

pub fn handle_ask(cmd: &AskCommand) -> Result<(), String> {
    let text = cmd.utterance();
    let config = config::get_config()?;

    if cmd.show || config.show_transparency {
        let result = CommandDetector::detect(&text);
        if let Some(category) = result.category {
            let command = CommandDetector::describe(category, &result.parameters);
            show_interpretation(&text, &result, &command);
        }
    }

    let client = ChatClient::new(config.llm.to_llm_config()).map_err(describe_error)?;
    let assistant = Assistant::new(client, UnlinkedMusicBackend);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("Failed to create async runtime: {}", e))?;

    let reply = rt.block_on(assistant.handle(&text)).map_err(describe_error)?;

    if cmd.json {
        println!("{}", to_json(&reply)?);
        return Ok(());
    }

    match &reply.backend {
        Some(backend) if !backend.success => print_yellow(&reply.response),
        _ if reply.is_command => print_green(&reply.response),
        _ => println!("{}", reply.response),
    }
    Ok(())
}

pub fn handle_detect(cmd: &DetectCommand) -> Result<(), String> {
    let text = cmd.utterance();

    if cmd.json {
        println!("{}", to_json(&detection_report(&text))?);
        return Ok(());
    }

    let result = CommandDetector::detect(&text);
    if cmd.compact {
        show_interpretation_compact(&text, &result);
        return Ok(());
    }

    match result.category {
        Some(_) if !io::stdout().is_terminal() => {
            print!("{}", interpretation_text(&text).unwrap_or_default());
        },
        Some(category) => {
            let command = CommandDetector::describe(category, &result.parameters);
            show_interpretation(&text, &result, &command);
        },
        None => print_yellow("No command detected. 'ada ask' would hand this to the conversational model."),
    }
    Ok(())
}

/// Plain text interpretation, used when output is not a terminal
pub fn interpretation_text(text: &str) -> Option<String> {
    let result = CommandDetector::detect(text);
    let category = result.category?;
    let command = CommandDetector::describe(category, &result.parameters);
    Some(format_interpretation(text, &result, &command))
}

//! Command classification
//!
//! Walks the registry in detection order and stops at the first rule that
//! matches anywhere in the utterance. Classification and parameter extraction
//! are decoupled: the extractor rescans the text with its own sub-patterns
//! and only receives the winning category.

use super::composer;
use super::extractor;
use super::registry::{self, MatchRule};
use super::types::{CommandCategory, CommandInfo, DetectionResult, ParameterSet};
use tracing::{debug, info};

/// Entry point of the command detection engine
pub struct CommandDetector;

/// Trim surrounding whitespace.
///
/// Case is left untouched: every registry and extraction pattern is compiled
/// with the Unicode case-insensitive flag, so "ZATRZYMAJ" and "zatrzymaj"
/// classify the same while extracted titles and queries keep their casing.
pub fn normalize(text: &str) -> &str {
    text.trim()
}

/// First rule in registry order that matches the normalized text
pub fn classify(text: &str) -> Option<&'static MatchRule> {
    registry::registry()
        .iter()
        .flat_map(|group| group.rules.iter())
        .find(|rule| rule.is_match(text))
}

impl CommandDetector {
    /// Detect whether the text is an actionable command and extract its parameters
    pub fn detect(text: &str) -> DetectionResult {
        let text = normalize(text);

        if text.is_empty() {
            return DetectionResult::no_match();
        }

        info!(text, "analysing utterance for commands");

        let Some(rule) = classify(text) else {
            info!("no command detected");
            return DetectionResult::no_match();
        };

        let parameters = extractor::extract(text, rule.category);
        info!(category = %rule.category, rule = rule.name, "command detected");
        debug!(?parameters, "extracted parameters");

        DetectionResult {
            matched: true,
            category: Some(rule.category),
            parameters,
            rule: Some(rule.name),
        }
    }

    /// Build the command record handed to the caller: type, parameters,
    /// description, handler identifier and confirmation message
    pub fn describe(category: CommandCategory, parameters: &ParameterSet) -> CommandInfo {
        let response = composer::compose(category, parameters);
        CommandInfo {
            command_type: category,
            parameters: parameters.clone(),
            description: composer::description(category),
            handler: response.handler_id,
            user_message: response.message,
        }
    }
}

//! Types and structures for command detection

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Top-level intent an utterance can be classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Calendar,
    Reminder,
    Weather,
    Email,
    Music,
    Unknown,
}

impl CommandCategory {
    /// Priority list used by the classifier. Categories declared earlier win
    /// when the same utterance matches rules from several categories.
    pub const DETECTION_ORDER: [CommandCategory; 5] = [
        CommandCategory::Calendar,
        CommandCategory::Reminder,
        CommandCategory::Weather,
        CommandCategory::Email,
        CommandCategory::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCategory::Calendar => "calendar",
            CommandCategory::Reminder => "reminder",
            CommandCategory::Weather => "weather",
            CommandCategory::Email => "email",
            CommandCategory::Music => "music",
            CommandCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Playback operation requested by a music command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MusicAction {
    Pause,
    Resume,
    Next,
    Previous,
    VolumeUp,
    VolumeDown,
    VolumeSet,
    Search,
}

impl fmt::Display for MusicAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MusicAction::Pause => "pause",
            MusicAction::Resume => "resume",
            MusicAction::Next => "next",
            MusicAction::Previous => "previous",
            MusicAction::VolumeUp => "volume_up",
            MusicAction::VolumeDown => "volume_down",
            MusicAction::VolumeSet => "volume_set",
            MusicAction::Search => "search",
        };
        write!(f, "{}", name)
    }
}

/// What kind of catalogue item a music search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Track,
    Artist,
    Album,
    Playlist,
}

/// Music service the command is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TargetPlatform {
    #[default]
    #[serde(rename = "none")]
    Unspecified,
    Spotify,
}

/// Date, time and title of a calendar event or a reminder.
///
/// Relative dates such as "jutro" are kept as literal tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeatherParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Parameters of a music command.
///
/// `value` is a volume level or delta in percent, never clamped here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MusicParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<MusicAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_type: Option<SearchType>,
    #[serde(rename = "targetPlatform")]
    pub target_platform: TargetPlatform,
}

/// Structured output of parameter extraction, one variant per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParameterSet {
    Calendar(ScheduleParams),
    Reminder(ScheduleParams),
    Weather(WeatherParams),
    Music(MusicParams),
    #[default]
    Empty,
}

impl ParameterSet {
    /// True when the set carries no keys at all
    pub fn is_empty(&self) -> bool {
        match self {
            ParameterSet::Calendar(p) | ParameterSet::Reminder(p) => {
                p.date.is_none() && p.time.is_none() && p.title.is_none()
            },
            ParameterSet::Weather(p) => p.location.is_none(),
            // targetPlatform is always present on a music command
            ParameterSet::Music(_) => false,
            ParameterSet::Empty => true,
        }
    }

    pub fn schedule(&self) -> Option<&ScheduleParams> {
        match self {
            ParameterSet::Calendar(p) | ParameterSet::Reminder(p) => Some(p),
            _ => None,
        }
    }

    pub fn weather(&self) -> Option<&WeatherParams> {
        match self {
            ParameterSet::Weather(p) => Some(p),
            _ => None,
        }
    }

    pub fn music(&self) -> Option<&MusicParams> {
        match self {
            ParameterSet::Music(p) => Some(p),
            _ => None,
        }
    }
}

// Flat JSON object with only the keys that were extracted
impl Serialize for ParameterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParameterSet::Calendar(p) | ParameterSet::Reminder(p) => p.serialize(serializer),
            ParameterSet::Weather(p) => p.serialize(serializer),
            ParameterSet::Music(p) => p.serialize(serializer),
            ParameterSet::Empty => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Outcome of running the detector over one utterance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub matched: bool,
    pub category: Option<CommandCategory>,
    pub parameters: ParameterSet,
    /// Name of the registry rule that fired
    #[serde(skip)]
    pub rule: Option<&'static str>,
}

impl DetectionResult {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            category: None,
            parameters: ParameterSet::Empty,
            rule: None,
        }
    }
}

/// Handler identifier and confirmation text for a detected command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedResponse {
    pub handler_id: Option<&'static str>,
    pub message: String,
}

/// Everything the request layer hands over about a detected command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandInfo {
    pub command_type: CommandCategory,
    pub parameters: ParameterSet,
    pub description: &'static str,
    pub handler: Option<&'static str>,
    pub user_message: String,
}

/// Errors raised by the layers around the detector
#[derive(Debug, thiserror::Error)]
pub enum AdaError {
    #[error("API error: {0}")]
    APIError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid API key")]
    InvalidAPIKey,

    #[error("Rate limited")]
    RateLimited,

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),
}

pub type AdaResult<T> = Result<T, AdaError>;

use clap::{
    Args,
    Parser,
    Subcommand,
};

/// Ada, a voice assistant backend that recognises Polish spoken commands
///
/// Commands (calendar, reminder, weather, email, music) are detected with
/// fixed rules; anything else goes to the conversational model configured
/// in ~/.config/ada/config.json
#[derive(Debug, Parser)]
#[command(author, version)]
pub struct CliArgs {
    /// log detection details to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
    #[command(subcommand)]
    pub arguments: Option<Action>,
}

#[derive(Debug, Subcommand)]
pub enum Action {
    /// handle an utterance: run the detected command or ask the model
    Ask(AskCommand),
    /// show how an utterance is classified, without running anything
    Detect(DetectCommand),
    /// list classification rules in the order they are evaluated
    Patterns,
    /// configure the conversational model and display
    #[command(subcommand)]
    Config(ConfigCommand),
    /// any other words are an utterance, same as 'ada ask <utterance>'
    #[command(external_subcommand)]
    Utterance(Vec<String>),
}

#[derive(Debug, Args)]
pub struct AskCommand {
    /// the utterance, as transcribed
    #[arg(required = true, value_parser = validate_word)]
    pub words: Vec<String>,
    /// print the reply as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// show the interpretation before the reply
    #[arg(short, long, default_value_t = false)]
    pub show: bool,
}

impl AskCommand {
    pub fn utterance(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct DetectCommand {
    /// the utterance, as transcribed
    #[arg(required = true, value_parser = validate_word)]
    pub words: Vec<String>,
    /// print the detection report as JSON
    #[arg(long, default_value_t = false, conflicts_with = "compact")]
    pub json: bool,
    /// print a single line
    #[arg(short, long, default_value_t = false)]
    pub compact: bool,
}

impl DetectCommand {
    pub fn utterance(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// show current configuration
    Show,
    /// enable the conversational model fallback
    EnableLlm,
    /// disable the conversational model fallback
    DisableLlm,
    /// set the model server API key, empty to clear
    SetKey {
        /// API key
        api_key: String,
    },
    /// set the model name sent with each request
    SetModel {
        /// model name
        #[arg(value_parser = validate_word)]
        model: String,
    },
    /// set the base URL of the OpenAI-compatible endpoint
    SetUrl {
        /// e.g. http://localhost:8080/v1
        #[arg(value_parser = validate_url)]
        url: String,
    },
    /// set the request timeout in seconds
    SetTimeout {
        /// seconds, 1 to 600
        #[arg(value_parser = validate_timeout)]
        seconds: u64,
    },
    /// print the interpretation before every reply
    EnableTransparency,
    /// stop printing the interpretation
    DisableTransparency,
}

fn validate_word(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("cannot be empty".to_string());
    }
    Ok(s.to_string())
}

fn validate_url(s: &str) -> Result<String, String> {
    if !(s.starts_with("http://") || s.starts_with("https://")) {
        return Err(format!("URL must start with http:// or https://, it cannot be {}", s));
    }
    Ok(s.trim_end_matches('/').to_string())
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let seconds: u64 = s.parse().map_err(|_| "Timeout must be a number".to_string())?;
    if seconds == 0 {
        return Err("Timeout must be greater than 0".to_string());
    }
    if seconds > 600 {
        return Err("Timeout cannot exceed 600 seconds".to_string());
    }
    Ok(seconds)
}

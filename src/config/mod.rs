use std::{
    fs,
    path::{Path, PathBuf},
};

use nanoserde::{DeJson, SerJson};

use crate::services::{
    LlmConfig,
    DEFAULT_API_BASE_URL,
    DEFAULT_MAX_NEW_TOKENS,
    DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECONDS,
    DEFAULT_TOP_P,
};

const CONFIG_PATH: &[&str] = &[".config", "ada", "config.json"];

#[derive(Default, DeJson, SerJson)]
pub struct Config {
    /// Conversational model settings
    #[nserde(default)]
    pub llm: LlmConfigSection,
    /// Whether to print how an utterance was interpreted before replying
    #[nserde(default)]
    pub show_transparency: bool,
}

/// Numeric fields left at 0 fall back to their defaults.
#[derive(DeJson, SerJson)]
pub struct LlmConfigSection {
    /// Whether the conversational fallback is enabled
    #[nserde(default)]
    pub enabled: bool,
    /// API key, empty for local servers without authentication
    #[nserde(default)]
    pub api_key: String,
    /// Model to use (default: TinyLlama/TinyLlama-1.1B-Chat-v1.0)
    #[nserde(default)]
    pub model: String,
    /// Base URL of the OpenAI-compatible endpoint
    #[nserde(default)]
    pub api_base_url: String,
    /// API request timeout in seconds (default: 30)
    #[nserde(default)]
    pub timeout_seconds: u64,
    #[nserde(default)]
    pub max_new_tokens: u32,
    #[nserde(default)]
    pub temperature: f32,
    #[nserde(default)]
    pub top_p: f32,
}

impl Default for LlmConfigSection {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl LlmConfigSection {
    pub fn to_llm_config(&self) -> LlmConfig {
        LlmConfig {
            enabled: self.enabled,
            api_key: if self.api_key.is_empty() { None } else { Some(self.api_key.clone()) },
            model: non_empty_or(&self.model, DEFAULT_MODEL),
            api_base_url: non_empty_or(self.api_base_url.trim_end_matches('/'), DEFAULT_API_BASE_URL),
            timeout_seconds: if self.timeout_seconds == 0 { DEFAULT_TIMEOUT_SECONDS } else { self.timeout_seconds },
            max_new_tokens: if self.max_new_tokens == 0 { DEFAULT_MAX_NEW_TOKENS } else { self.max_new_tokens },
            temperature: if self.temperature <= 0.0 { DEFAULT_TEMPERATURE } else { self.temperature },
            top_p: if self.top_p <= 0.0 { DEFAULT_TOP_P } else { self.top_p },
        }
    }

    pub fn from_llm_config(llm_config: &LlmConfig) -> Self {
        Self {
            enabled: llm_config.enabled,
            api_key: llm_config.api_key.clone().unwrap_or_default(),
            model: llm_config.model.clone(),
            api_base_url: llm_config.api_base_url.clone(),
            timeout_seconds: llm_config.timeout_seconds,
            max_new_tokens: llm_config.max_new_tokens,
            temperature: llm_config.temperature,
            top_p: llm_config.top_p,
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Location of the config file under the home directory
pub fn config_path() -> Result<PathBuf, String> {
    let home_dir = home::home_dir().ok_or_else(|| String::from("cannot find home directory"))?;
    Ok(CONFIG_PATH.iter().fold(home_dir, |p, d| p.join(d)))
}

/// Read a config file, or return the defaults if it does not exist
pub fn load_config(config_path: &Path) -> Result<Config, String> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(config_path)
        .map_err(|e| format!("Failed to read config file: {}", e))?;

    let config: Config = DeJson::deserialize_json(&config_content)
        .map_err(|e| format!("Failed to parse config file: {}", e))?;

    Ok(config)
}

/// Write a config file, creating its directory when needed
pub fn write_config(config_path: &Path, config: &Config) -> Result<(), String> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let config_json = config.serialize_json();
    fs::write(config_path, config_json)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}

/// Get the full configuration from the config file
pub fn get_config() -> Result<Config, String> {
    load_config(&config_path()?)
}

/// Save configuration to the config file
pub fn save_config(config: &Config) -> Result<(), String> {
    write_config(&config_path()?, config)
}

/// Get just the conversational model configuration
pub fn get_llm_config() -> Result<LlmConfig, String> {
    Ok(get_config()?.llm.to_llm_config())
}

/// Update the conversational model configuration
pub fn update_llm_config(llm_config: &LlmConfig) -> Result<(), String> {
    let mut config = get_config()?;
    config.llm = LlmConfigSection::from_llm_config(llm_config);
    save_config(&config)
}

/// Toggle the interpretation display
pub fn set_show_transparency(enabled: bool) -> Result<(), String> {
    let mut config = get_config()?;
    config.show_transparency = enabled;
    save_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_path_under_home() {
        let path = config_path().unwrap();
        assert!(path.ends_with(".config/ada/config.json"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("config.json")).unwrap();
        assert!(!config.show_transparency);

        let llm = config.llm.to_llm_config();
        assert_eq!(llm, LlmConfig::default());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let llm = LlmConfig {
            enabled: true,
            api_key: Some("sk-test".to_string()),
            model: "local-model".to_string(),
            timeout_seconds: 5,
            ..Default::default()
        };
        let config = Config {
            llm: LlmConfigSection::from_llm_config(&llm),
            show_transparency: true,
        };
        write_config(&path, &config).unwrap();

        let loaded = load_config(&path).unwrap();
        assert!(loaded.show_transparency);
        let loaded_llm = loaded.llm.to_llm_config();
        assert!(loaded_llm.enabled);
        assert_eq!(loaded_llm.api_key, Some("sk-test".to_string()));
        assert_eq!(loaded_llm.model, "local-model");
        assert_eq!(loaded_llm.timeout_seconds, 5);
        assert_eq!(loaded_llm.max_new_tokens, 100);
    }

    #[test]
    fn test_partial_section_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"llm": {"enabled": true, "api_base_url": "http://10.0.0.2:8000/v1/"}}"#).unwrap();

        let llm = load_config(&path).unwrap().llm.to_llm_config();
        assert!(llm.enabled);
        assert_eq!(llm.api_key, None);
        assert_eq!(llm.model, DEFAULT_MODEL);
        assert_eq!(llm.api_base_url, "http://10.0.0.2:8000/v1");
        assert_eq!(llm.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(llm.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(llm.top_p, DEFAULT_TOP_P);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_config(&path);
        assert!(result.is_err());
        assert!(result.err().unwrap().contains("Failed to parse config file"));
    }
}

//! Config subcommand handlers

use crate::{
    actions::display::{print_bold, print_green, print_yellow},
    args::parser::ConfigCommand,
    config,
    services::LlmConfig,
};

fn mask_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn update_llm(change: impl FnOnce(&mut LlmConfig)) -> Result<LlmConfig, String> {
    let mut llm_config = config::get_llm_config().unwrap_or_default();
    change(&mut llm_config);
    config::update_llm_config(&llm_config)?;
    Ok(llm_config)
}

pub fn handle_config(config_cmd: &ConfigCommand) -> Result<(), String> {
    match config_cmd {
        ConfigCommand::Show => {
            let config = config::get_config()?;
            let llm_config = config.llm.to_llm_config();

            print_bold("Conversational model");
            println!("  enabled:            {}", llm_config.enabled);
            println!(
                "  api key:            {}",
                llm_config.api_key.as_deref().map(mask_key).unwrap_or_else(|| "(none)".to_string())
            );
            println!("  model:              {}", llm_config.model);
            println!("  api base url:       {}", llm_config.api_base_url);
            println!("  timeout:            {}s", llm_config.timeout_seconds);
            println!("  max new tokens:     {}", llm_config.max_new_tokens);
            println!("  temperature:        {}", llm_config.temperature);
            println!("  top p:              {}", llm_config.top_p);
            println!();
            print_bold("Display");
            println!("  show transparency:  {}", config.show_transparency);
            println!();
            println!("Config file: {}", config::config_path()?.display());
            Ok(())
        },

        ConfigCommand::EnableLlm => {
            let llm_config = update_llm(|c| c.enabled = true)?;
            print_green("Conversational model enabled.");
            if llm_config.api_key.is_none() {
                print_yellow(&format!(
                    "No API key set, requests to {} will be sent without authentication.",
                    llm_config.api_base_url
                ));
            }
            Ok(())
        },

        ConfigCommand::DisableLlm => {
            update_llm(|c| c.enabled = false)?;
            print_green("Conversational model disabled. Only commands will be handled.");
            Ok(())
        },

        ConfigCommand::SetKey { api_key } => {
            update_llm(|c| {
                c.api_key = if api_key.is_empty() { None } else { Some(api_key.clone()) };
            })?;
            print_green("API key updated.");
            Ok(())
        },

        ConfigCommand::SetModel { model } => {
            update_llm(|c| c.model = model.clone())?;
            print_green(&format!("Model set to {}.", model));
            Ok(())
        },

        ConfigCommand::SetUrl { url } => {
            update_llm(|c| c.api_base_url = url.clone())?;
            print_green(&format!("API base URL set to {}.", url));
            Ok(())
        },

        ConfigCommand::SetTimeout { seconds } => {
            update_llm(|c| c.timeout_seconds = *seconds)?;
            print_green(&format!("Request timeout set to {} seconds.", seconds));
            Ok(())
        },

        ConfigCommand::EnableTransparency => {
            config::set_show_transparency(true)?;
            print_green("Interpretation display enabled.");
            Ok(())
        },

        ConfigCommand::DisableTransparency => {
            config::set_show_transparency(false)?;
            print_green("Interpretation display disabled.");
            Ok(())
        },
    }
}

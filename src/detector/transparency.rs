//! Transparency display for command detection
//!
//! Shows how an utterance was interpreted: which category and rule fired,
//! which handler it is routed to and what was extracted.

use super::types::*;

fn parameters_json(parameters: &ParameterSet) -> String {
    serde_json::to_string(parameters).unwrap_or_else(|_| "{}".to_string())
}

/// Display the detection interpretation for one utterance
pub fn show_interpretation(input: &str, result: &DetectionResult, info: &CommandInfo) {
    println!();
    println!("  Command Interpretation");
    println!("  ======================");
    println!("  Input: \"{}\"", input);
    println!("  Interpreted: {}", info.description);
    println!();

    println!("  Category: {}", info.command_type);
    if let Some(rule) = result.rule {
        println!("  Rule: {}", rule);
    }
    if let Some(handler) = info.handler {
        println!("  Handler: {}", handler);
    }

    if !info.parameters.is_empty() {
        println!("  Parameters: {}", parameters_json(&info.parameters));
    }

    println!();
    println!("  Message:");
    println!("    {}", info.user_message);
    println!();
}

/// Display a simple one-line interpretation info
pub fn show_interpretation_compact(input: &str, result: &DetectionResult) {
    println!("{}", compact_line(input, result));
}

fn compact_line(input: &str, result: &DetectionResult) -> String {
    match result.category {
        Some(category) => {
            let rule_str = result.rule.map(|r| format!(" [{}]", r)).unwrap_or_default();
            format!(
                "Detected: \"{}\" -> {}{} {}",
                input,
                category,
                rule_str,
                parameters_json(&result.parameters)
            )
        },
        None => format!("Detected: \"{}\" -> no command", input),
    }
}

/// Format interpretation as a string for programmatic use
pub fn format_interpretation(input: &str, result: &DetectionResult, info: &CommandInfo) -> String {
    let mut output = format!("Input: \"{}\"\n", input);
    output.push_str(&format!("Category: {}\n", info.command_type));
    output.push_str(&format!("Description: {}\n", info.description));

    if let Some(rule) = result.rule {
        output.push_str(&format!("Rule: {}\n", rule));
    }

    if let Some(handler) = info.handler {
        output.push_str(&format!("Handler: {}\n", handler));
    }

    if !info.parameters.is_empty() {
        output.push_str(&format!("Parameters: {}\n", parameters_json(&info.parameters)));
    }

    output.push_str(&format!("Message: {}\n", info.user_message));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::classifier::CommandDetector;

    fn interpret(input: &str) -> (DetectionResult, CommandInfo) {
        let result = CommandDetector::detect(input);
        let category = result.category.unwrap_or(CommandCategory::Unknown);
        let info = CommandDetector::describe(category, &result.parameters);
        (result, info)
    }

    #[test]
    fn test_format_interpretation_weather() {
        let input = "jaka jest pogoda w Warszawie";
        let (result, info) = interpret(input);
        let output = format_interpretation(input, &result, &info);

        assert!(output.contains("Input: \"jaka jest pogoda w Warszawie\""));
        assert!(output.contains("Category: weather"));
        assert!(output.contains("Rule: weather_ask"));
        assert!(output.contains("Handler: weather_handler"));
        assert!(output.contains("Parameters: {\"location\":\"Warszawie\"}"));
        assert!(output.contains("Message: Wykryłam polecenie sprawdzenia pogody w Warszawie."));
    }

    #[test]
    fn test_format_interpretation_without_parameters() {
        let input = "wyślij email do szefa";
        let (result, info) = interpret(input);
        let output = format_interpretation(input, &result, &info);

        assert!(output.contains("Category: email"));
        assert!(output.contains("Description: Operacja na email"));
        assert!(!output.contains("Parameters:"));
    }

    #[test]
    fn test_format_interpretation_unknown() {
        let (result, info) = interpret("opowiedz mi żart");
        let output = format_interpretation("opowiedz mi żart", &result, &info);

        assert!(output.contains("Category: unknown"));
        assert!(!output.contains("Rule:"));
        assert!(!output.contains("Handler:"));
    }

    #[test]
    fn test_compact_line() {
        let (result, _) = interpret("zmniejsz głośność o 20");
        let line = compact_line("zmniejsz głośność o 20", &result);
        assert!(line.starts_with("Detected: \"zmniejsz głośność o 20\" -> music [music_volume_down]"));
        assert!(line.contains("\"action\":\"volume_down\""));
        assert!(line.contains("\"value\":20"));
    }

    #[test]
    fn test_compact_line_no_command() {
        let (result, _) = interpret("jak się masz?");
        assert_eq!(compact_line("jak się masz?", &result), "Detected: \"jak się masz?\" -> no command");
    }
}

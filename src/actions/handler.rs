use crate::{
    actions::{
        assistant,
        patterns,
        settings,
    },
    args::parser::{
        Action,
        AskCommand,
        CliArgs,
    },
};

pub fn handle_commands(args: CliArgs) -> Result<(), String> {
    match args.arguments {
        Some(Action::Ask(cmd)) => assistant::handle_ask(&cmd),
        Some(Action::Detect(cmd)) => assistant::handle_detect(&cmd),
        Some(Action::Patterns) => patterns::handle_patterns(),
        Some(Action::Config(cmd)) => settings::handle_config(&cmd),
        Some(Action::Utterance(words)) => handle_utterance(words),
        None => {
            print_usage();
            Ok(())
        },
    }
}

/// Bare words are handled like 'ada ask'
fn handle_utterance(words: Vec<String>) -> Result<(), String> {
    let words: Vec<String> = words.into_iter().filter(|w| !w.trim().is_empty()).collect();

    if words.is_empty() {
        print_usage();
        return Ok(());
    }

    assistant::handle_ask(&AskCommand {
        words,
        json: false,
        show: false,
    })
}

/// Print usage information
fn print_usage() {
    println!("ada - voice assistant backend for Polish spoken commands");
    println!();
    println!("Handle an utterance (default):");
    println!("  ada zatrzymaj muzykę");
    println!("  ada ustaw przypomnienie na jutro o 15:00 temat: spotkanie z Tomkiem");
    println!("  ada jaka jest pogoda w Warszawie");
    println!();
    println!("Other commands:");
    println!("  ada detect włącz utwór Shape of You na spotify");
    println!("  ada patterns");
    println!("  ada config show");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Log detection details to stderr");
    println!("  -h, --help     Show detailed help");
}

mod actions;
mod args;
mod config;
mod detector;
mod services;

use std::process::exit;

use actions::display::print_red;
use args::parser::CliArgs;
use clap::Parser;
use tracing_subscriber::{EnvFilter, prelude::*};

// RUST_LOG wins over --verbose; stdout stays reserved for replies
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,ada=info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter),
        )
        .init();
}

fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    let result = actions::handler::handle_commands(cli_args);
    if let Err(err) = result {
        print_red(&format!("Error: {}", err));
        exit(1)
    }
}

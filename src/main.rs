mod cli;
mod commands;
mod config;
mod error;
mod line;
mod output;
mod rows;
mod snmp;

use clap::Parser;
use cli::{Cli, Commands};
use commands::handle_cron_command;
use output::print_error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; the data stream owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Cron(cmd) => handle_cron_command(cmd, &cli),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

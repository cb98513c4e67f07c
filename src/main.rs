mod bootstrap;
mod commands;
mod config;
mod docker;
mod error;
mod listing;
mod output;
mod prompt;
mod runner;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use commands::run::Project;
use prompt::TerminalPrompt;

#[derive(Parser)]
#[command(
    name = "lambda-run",
    version,
    about = "Run a lambda in a docker container",
    long_about = None
)]
struct Cli {}

fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let _cli = Cli::parse();
    let cfg = config::RunnerConfig::load();

    let result = commands::run::run(&Project::current(), &cfg, &TerminalPrompt::new());

    match result {
        Ok(()) => output::print_success("Lambda run finished"),
        Err(e) => {
            output::print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

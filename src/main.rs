use anyhow::Result;

use player_registry::cli::{Cli, Command};
use player_registry::{build_config, handle_reset, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = build_config(cli.database.as_deref());
    match cli.command {
        Command::Serve { port } => handle_serve(port, config),
        Command::Reset => handle_reset(config),
    }
}

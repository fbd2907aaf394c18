pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    let quiet = matches!(cli.command, types::Commands::Index { quiet: true, .. });
    logging::init_logging(logging::log_level(cli.debug, quiet));
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Index { .. } => commands::handle_index_command(&cli.command),
        types::Commands::Outline { .. } => commands::handle_outline_command(&cli.command),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

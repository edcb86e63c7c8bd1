//! CellReader CLI - classify marker columns across CSV exports.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Files { folder } => commands::files::run(folder, cli.verbose).await,

        Commands::Markers {
            folder,
            files,
            leading_columns,
            sample_rows,
            delimiter,
            json,
        } => {
            commands::markers::run(
                folder,
                files,
                leading_columns,
                sample_rows,
                delimiter,
                json,
                cli.verbose,
            )
            .await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

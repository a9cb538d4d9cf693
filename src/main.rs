// src/main.rs
use anyhow::Result;
use clap::Parser;
use cover_letter::app_log;
use cover_letter::cli::{handle_command, Cli};
use cover_letter::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging first
    init_logging(cli.log_file.as_deref(), cli.verbose)?;

    if let Err(e) = handle_command(cli).await {
        app_log!(error, "{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

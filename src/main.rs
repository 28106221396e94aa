//! CLI entry point for running batch image editing scripts

use clap::Parser;
use pixedit::io::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> pixedit::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()?;
    Ok(())
}

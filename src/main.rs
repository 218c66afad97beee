use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cv_screener::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so the result cards stay readable on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(cli).await
}

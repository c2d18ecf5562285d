//! Wild Rydes service entry point.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wild_rydes::api::create_router;
use wild_rydes::config::Config;
use wild_rydes::{metrics, server};

/// Wild Rydes informational HTTP service.
#[derive(Parser, Debug)]
#[command(name = "wild-rydes")]
#[command(about = "Serves the Wild Rydes root, health and about endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logging is not up yet; anyhow reports config errors on stderr
    let config = Config::load()?;

    let filter = if args.verbose {
        EnvFilter::new("wild_rydes=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    metrics::init_metrics();

    let listener = server::bind(&config).await?;
    info!(port = config.port, "Starting Wild Rydes service");

    server::serve(listener, create_router()).await?;

    Ok(())
}

//! pitwall - Formula 1 schedule and standings in the terminal.
//!
//! Browses the current season's race schedule and the championship
//! standings served by the OpenF1 API.
//!
//! Usage:
//!   pitwall                          # default API endpoint
//!   pitwall --api-url http://...     # point at another endpoint
//!   pitwall --log-file pitwall.log   # write diagnostics to a file

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use pitwall::api::{DEFAULT_BASE_URL, OpenF1Client};
use pitwall::tui::App;

/// Formula 1 schedule and standings viewer.
#[derive(Parser)]
#[command(name = "pitwall", about = "Formula 1 stats viewer")]
struct Args {
    /// Base URL of the OpenF1 API.
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// UI tick interval in milliseconds (spinner and event polling).
    #[arg(long, value_name = "MS", default_value_t = 100)]
    tick_ms: u64,

    /// Write diagnostic logs to this file. Without it, nothing is logged
    /// (log output would corrupt the terminal UI).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &PathBuf) -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Error opening log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let client = OpenF1Client::new(&args.api_url);
    let tick_rate = Duration::from_millis(args.tick_ms);
    let app = App::new(client);

    if let Err(e) = app.run(tick_rate).await {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

//! labtrack - terminal client for the laboratory test-tracking service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use labtrack_app::config;
use labtrack_core::logging;
use tracing::info;

/// labtrack - track lab tests from the terminal
#[derive(Parser, Debug)]
#[command(name = "labtrack")]
#[command(about = "A terminal client for the laboratory test-tracking service", long_about = None)]
struct Args {
    /// Backend base URL (overrides LABTRACK_API_URL and the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to a config file (default: <config dir>/labtrack/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let mut settings = config::load_startup_settings(args.config.as_deref())?;
    config::apply_overrides(&mut settings, args.api_url.as_deref())?;
    info!("Backend base URL: {}", settings.api.base_url);

    if let Err(e) = labtrack_tui::run(settings).await {
        eprintln!(
            "labtrack exited with an error; details in {}",
            logging::get_current_log_file().display()
        );
        return Err(e.into());
    }
    Ok(())
}

//! Landing page generator.
//!
//! Renders the landing page to a static HTML file:
//!
//! ```bash
//! landing --output dist/index.html
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "landing")]
#[command(about = "Render the platform landing page to a static HTML file")]
#[command(version)]
struct Args {
    /// Output file path
    #[arg(short, long, default_value = "landing.html")]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Rendering landing page v{}", env!("CARGO_PKG_VERSION"));

    let html = platform_landing::render_page();

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }
    fs::write(&args.output, &html)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Wrote {} ({} bytes)", args.output.display(), html.len());

    Ok(())
}

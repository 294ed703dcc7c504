//! Badge renderer entry point.
//!
//! Initializes logging, loads configuration and the catalog, renders the
//! badges into a fresh page and writes the container markup out.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use tool_badges::domains::catalog::Catalog;
use tool_badges::{Config, ToolsPage};

fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    info!("Catalog ready with {} tools", catalog.len());

    let output = config.output.path.clone();
    let mut page = ToolsPage::new(config)?;
    page.load(&catalog)?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            page.write_fragment(&mut writer)?;
            writer.flush()?;
            info!("Wrote badges to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            page.write_fragment(&mut handle)?;
        }
    }

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so stdout carries only the rendered markup.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

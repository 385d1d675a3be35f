use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use folio::catalog::ContentCatalog;
use folio::config::{Config, TrackingMode};
use folio::logging::{default_log_dir, init_logging};
use folio::pipeline::{print_page, run, terminal_size};

/// Interactive terminal portfolio.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// JSON config file; missing keys keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON content catalog replacing the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Active-section tracking: hit-test, threshold or both.
    #[arg(long)]
    tracking: Option<TrackingMode>,

    /// Directory for rotating log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Print the page as plain text and exit.
    #[arg(long)]
    print: bool,

    /// Width used with --print; defaults to the terminal width.
    #[arg(long, requires = "print")]
    width: Option<u16>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(mode) = cli.tracking {
        config.tracking = mode;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    config.validate().context("validating config")?;

    let log_dir = cli.log_dir.unwrap_or_else(default_log_dir);
    init_logging(&config.log_level, &log_dir)
        .with_context(|| format!("starting logger in {}", log_dir.display()))?;

    let catalog = match &cli.catalog {
        Some(path) => ContentCatalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => ContentCatalog::builtin(),
    };

    if cli.print {
        let width = cli.width.unwrap_or_else(|| terminal_size().0);
        let text = print_page(&catalog, &config, width).context("rendering page")?;
        println!("{text}");
        return Ok(());
    }

    run(catalog, config).context("running portfolio")?;
    Ok(())
}

//! endirim - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// endirim - TUI browser for student discount offers
#[derive(Parser, Debug)]
#[command(name = "endirim")]
#[command(version)]
#[command(about = "TUI browser for the student discount catalog")]
pub struct Args {
    /// Path to the offers JSON file
    #[arg(short, long)]
    pub offers: Option<PathBuf>,

    /// Path to the details JSON file
    #[arg(short, long)]
    pub details: Option<PathBuf>,

    /// Search query applied before the first render
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable the feedback survey tab
    #[arg(long)]
    pub no_survey: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolved from the --no-color flag and the NO_COLOR env var
    let colors = endirim::view::ColorConfig::from_env_and_args(args.no_color);

    // Precedence: Defaults → Config File → CLI Args
    let config = {
        let config_file = endirim::config::load_config_with_precedence(args.config.clone())?;
        let merged = endirim::config::merge_config(config_file);
        let mut resolved =
            endirim::config::apply_cli_overrides(merged, args.offers.clone(), args.details.clone());
        if args.no_survey {
            resolved.survey_enabled = false;
        }
        resolved
    };

    // Tracing goes to a file so it never corrupts the TUI
    endirim::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // Explicit CLI paths load strictly so a typo fails loudly; default
    // and config-file paths degrade to an empty catalog.
    let store = if args.offers.is_some() || args.details.is_some() {
        endirim::catalog::CatalogStore::load_strict(&config.offers_path, &config.details_path)
            .map_err(endirim::model::AppError::from)?
    } else {
        endirim::catalog::CatalogStore::load(&config.offers_path, &config.details_path)
    };
    info!(offers = store.len(), "Catalog loaded");

    endirim::view::run_with_store(
        store,
        endirim::view::ViewArgs {
            survey_enabled: config.survey_enabled,
            initial_search: args.search,
            colors,
        },
    )?;

    Ok(())
}

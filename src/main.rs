//! asset-uri - resolve static assets into deployable URIs.

mod cli;

use anyhow::{Context, Result};
use asset_uri::config::AssetConfig;
use asset_uri::utils::path::normalize_lexical;
use asset_uri::{debug, logger};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Resolve { args } => {
            let cwd = std::env::current_dir().context("Failed to get current working directory")?;
            let config = load_config(&cli, &cwd)?;
            cli::resolve::run(&config, args, &cwd)
        }
        Commands::Hash { args } => cli::hash::run(args),
    }
}

/// Discover the config file and apply the `--root` override.
fn load_config(cli: &Cli, cwd: &std::path::Path) -> Result<AssetConfig> {
    let mut config = AssetConfig::discover(cwd, &cli.config)
        .with_context(|| format!("Failed to load config `{}`", cli.config.display()))?;

    if let Some(root) = &cli.root {
        config.root = normalize_lexical(&cwd.join(root));
    }

    match &config.config_path {
        Some(path) => debug!("config"; "{} (root {})", path.display(), config.root.display()),
        None => debug!("config"; "no {}, using defaults (root {})", cli.config.display(), config.root.display()),
    }
    Ok(config)
}

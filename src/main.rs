//! letterbox — entry point.

use clap::Parser;
use letterbox::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// Animated envelope and letter reveal for the terminal.
#[derive(Parser, Debug)]
#[command(name = "letterbox")]
#[command(version)]
#[command(about = "Animated envelope and letter reveal for the terminal")]
pub struct Args {
    /// Color theme for the envelope scene
    #[arg(long, value_parser = ["classic", "midnight", "mono"])]
    pub theme: Option<String>,

    /// Start the reveal sequence on launch instead of waiting for a click
    #[arg(long)]
    pub auto_open: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = letterbox::config::load_config_with_precedence(args.config.clone())?;
        let merged = letterbox::config::merge_config(config_file);
        let with_env = letterbox::config::apply_env_overrides(merged);

        let auto_open_override = if args.auto_open { Some(true) } else { None };
        letterbox::config::apply_cli_overrides(with_env, args.theme.clone(), auto_open_override)
    };

    letterbox::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let colors = letterbox::view::ColorConfig::from_env_and_args(args.no_color);
    let theme = letterbox::view::Theme::from_name(&config.theme, colors);

    letterbox::view::run(&config, theme)?;

    Ok(())
}

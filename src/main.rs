//! Flex-Grid Visual Lab - Entry Point

use clap::Parser;
use flexlab::config::{parse_format, parse_mode, parse_viewport};
use flexlab::model::AppError;
use flexlab::state::AppState;
use flexlab::view::{ColorConfig, Palette};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Flex-Grid Visual Lab - visual editor for flexbox and grid layouts
#[derive(Parser, Debug)]
#[command(name = "flexlab")]
#[command(version)]
#[command(about = "TUI visual editor for CSS Flexbox and Grid layouts")]
pub struct Args {
    /// Simulated device to start with
    #[arg(long, value_parser = ["mobile", "tablet", "desktop"])]
    pub viewport: Option<String>,

    /// Code panel output format
    #[arg(long, value_parser = ["css", "markup"])]
    pub format: Option<String>,

    /// Layout mode of the starting layout
    #[arg(long, value_parser = ["flex", "grid"])]
    pub mode: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the generated code for the starting layout and exit
    #[arg(long)]
    pub print: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let (config, ignored_env) = {
        let config_file = flexlab::config::load_config_with_precedence(args.config.clone())?;
        let merged = flexlab::config::merge_config(config_file);
        let (with_env, ignored_env) = flexlab::config::apply_env_overrides(merged);

        // clap restricts the names, so an unparsable value cannot reach here.
        let config = flexlab::config::apply_cli_overrides(
            with_env,
            args.viewport.as_deref().and_then(parse_viewport),
            args.format.as_deref().and_then(parse_format),
            args.mode.as_deref().and_then(parse_mode),
        );
        (config, ignored_env)
    };

    let app_state = AppState::seeded(config.mode, config.viewport, config.output_format);

    if args.print {
        // No log file in this mode; the terminal is still ours.
        for ignored in &ignored_env {
            eprintln!("flexlab: {ignored}");
        }
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", app_state.generated_code())?;
        return Ok(());
    }

    flexlab::logging::init(&config.log_file_path)?;
    for ignored in &ignored_env {
        ignored.log();
    }

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let palette = Palette::new(ColorConfig::from_env_and_args(args.no_color));
    flexlab::view::run_app(app_state, palette)?;

    Ok(())
}

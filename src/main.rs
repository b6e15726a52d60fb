mod config;
mod crash;
mod detect;
mod error;
mod fileops;
mod launch;
mod paths;
mod util;

use crate::config::{load_cfg, render_cfg};
use crate::crash::CrashArchiver;
use crate::detect::detect_game;
use crate::launch::{CompatibilityRunner, ProcdumpWrapper, Selection};
use crate::paths::PATH_CONFIG;
use crate::util::*;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reksio-launcher")]
#[command(about = "Finds a DirectDraw shim the game survives with and collects crash dumps")]
#[command(version)]
struct Cli {
    /// Launcher configuration (YAML). Built-in tables are used when it doesn't exist
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Game folder; the launcher switches into it before doing anything else
    #[arg(long, value_name = "DIR")]
    game_dir: Option<PathBuf>,

    /// Report problems on the console only
    #[arg(long)]
    no_dialog: bool,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn notify(&self, title: &str, contents: &str) {
        tracing::error!("{}: {}", title, contents);
        if !self.no_dialog {
            msg(title, contents);
        }
    }
}

fn summarize(selection: &Selection) {
    for trial in &selection.trials {
        tracing::info!("{}", trial.describe());
    }
    tracing::info!(
        "{} trial(s), {} launch(es), {} crash(es)",
        selection.trials.len(),
        selection.launches(),
        selection.crashes()
    );
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("reksio_launcher=info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(dir) = &cli.game_dir
        && let Err(e) = std::env::set_current_dir(dir)
    {
        tracing::error!("Cannot enter game directory {}: {}", dir.display(), e);
        return ExitCode::from(2);
    }

    let config_path = cli.config.clone().unwrap_or_else(|| PATH_CONFIG.clone());
    let cfg = match load_cfg(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{}: {}", config_path.display(), e);
            return ExitCode::from(2);
        }
    };

    if cli.print_config {
        return match render_cfg(&cfg) {
            Ok(yaml) => {
                print!("{}", yaml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                ExitCode::from(2)
            }
        };
    }

    let game = match detect_game(&cfg.paths.game_dir, &cfg.games) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("{}", e);
            cli.notify("Running error", "Could not find the Game binary");
            return ExitCode::FAILURE;
        }
    };

    let platform = current_platform();
    let wrapper = ProcdumpWrapper::new(cfg.paths.clone(), cfg.wrapper.clone(), platform);
    let archiver = CrashArchiver::new(cfg.paths.crash_logs.clone(), cfg.paths.game_dir.clone());

    let mut runner = CompatibilityRunner::new(&cfg.paths, wrapper, archiver);
    let selection = runner.select_working_shim(&game, &cfg.shims, platform);
    summarize(&selection);

    match &selection.working {
        Some(shim) => tracing::info!("Using {} for {}", shim.filename, game.binary),
        None => cli.notify(
            "Game keeps crashing",
            "We tried to fix the Game but it keeps crashing",
        ),
    }

    ExitCode::SUCCESS
}

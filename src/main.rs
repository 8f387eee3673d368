mod calculator;
mod config;
mod input;
mod menu;
mod speech;
mod ui;

use anyhow::{Context, Result};
use calculator::CalculatorScreen;
use clap::Parser;
use config::{Config, default_config_path};
use speech::{CommandSpeaker, MutedSpeaker, Speaker};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// A talking calculator for the terminal.
#[derive(Parser, Debug)]
#[command(name = "speakcalc", version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable speech output.
    #[arg(long)]
    mute: bool,

    /// Program used to speak, overriding the config.
    #[arg(long, value_name = "PROGRAM")]
    speech_program: Option<String>,

    /// Write log output to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!("speakcalc {} starting", env!("CARGO_PKG_VERSION"));

    let config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };

    let mut speaker = build_speaker(&cli, &config);
    let ready = match speaker.initialize() {
        Ok(()) => true,
        Err(e) => {
            warn!("Speech unavailable: {}", e);
            false
        }
    };

    let mut screen = CalculatorScreen::new(speaker);
    screen.on_speech_ready(ready);
    let result = ui::run(&mut screen);

    // Shuts the speech engine down on both the normal and the error path.
    drop(screen);
    info!("speakcalc exiting");
    result
}

fn build_speaker(cli: &Cli, config: &Config) -> Box<dyn Speaker> {
    if cli.mute || !config.speech.enabled {
        info!("Speech disabled");
        return Box::new(MutedSpeaker);
    }

    let program = cli
        .speech_program
        .clone()
        .unwrap_or_else(|| config.speech.program.clone());
    let speaker = CommandSpeaker::new(program, config.speech.args.clone());
    info!("Speaking through '{}'", speaker.program());
    Box::new(speaker)
}

fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("speakcalc").join("speakcalc.log"))
}

/// Log to a file; the terminal is owned by the calculator screen.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = cli.log_file.clone().or_else(default_log_path) else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

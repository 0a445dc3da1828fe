// guess: number guessing game binary.
//
// Loads config, sets up logging and audio cues, then runs the game window.

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use guess_audio::{CuePlayer, KiraBackend};
use guess_config::{AppConfig, Theme};
use guess_core::{Difficulty, GameSession, RandomSecret};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "guess", about = "Guess the secret number within a limited number of tries")]
struct Args {
    /// Path to the config JSON file.
    #[arg(long, default_value = "config.json")]
    config: PathBuf,

    /// Directory containing start.wav, incorrect.wav, correct.wav and reset.wav.
    #[arg(long)]
    sound_dir: Option<PathBuf>,

    /// Initial theme: default, dark or light.
    #[arg(long)]
    theme: Option<Theme>,

    /// Preselected difficulty: easy, medium or hard.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Seed for reproducible secret numbers.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable audio cues.
    #[arg(long)]
    mute: bool,

    /// Show debug logs.
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to a daily rolling file in this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write a default configuration to --config and exit. Never replaces an
    /// existing file.
    #[arg(long)]
    init_config: bool,
}

impl Args {
    /// Command-line flags win over the config file.
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.sound_dir {
            config.sound_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if self.mute {
            config.sound_enabled = false;
        }
        config.validate();
    }
}

/// Create a default config file at `path`.
fn init_config(path: &Path) -> Result<AppConfig> {
    if path.exists() {
        bail!("{} already exists, not overwriting it", path.display());
    }
    let config = AppConfig::default();
    config.write(path)?;
    Ok(config)
}

fn load_config(path: &Path) -> AppConfig {
    match AppConfig::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid config, using defaults: {e:#}");
            AppConfig::default()
        }
    }
}

/// Cue player for the config. Falls back to silence when audio is off or
/// no output device can be opened.
fn build_cue_player(config: &AppConfig) -> CuePlayer {
    if !config.sound_enabled {
        info!("Sound disabled");
        return CuePlayer::silent();
    }
    let backend = match KiraBackend::new() {
        Ok(backend) => backend,
        Err(e) => {
            warn!("Audio unavailable, continuing without sound: {e:#}");
            return CuePlayer::silent();
        }
    };
    let mut player = CuePlayer::new(Box::new(backend));
    player.set_volume(config.volume);
    player.load_dir(Path::new(&config.sound_dir));
    player
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init_logging(args.log_dir.as_deref(), args.verbose)?;
    info!("guess starting");

    if args.init_config {
        init_config(&args.config)?;
        info!(path = %args.config.display(), "Wrote default config");
        return Ok(());
    }

    let mut config = load_config(&args.config);
    args.apply_overrides(&mut config);

    let session = match args.seed {
        Some(seed) => {
            info!(seed, "Using seeded secrets");
            GameSession::with_source(RandomSecret::seeded(seed))
        }
        None => GameSession::new(),
    };
    let cues = build_cue_player(&config);

    guess_app::run(&config, session, Box::new(cues))?;
    info!("guess exiting");
    Ok(())
}

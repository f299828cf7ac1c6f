mod app;
mod args;
mod config;
mod input;
mod storage;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use app::App;
use args::Args;
use config::Settings;
use storage::Profile;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    // Storage failures degrade to a session without persistence; they must
    // never block the game.
    let profile = match Profile::open(&data_dir) {
        Ok(profile) => Some(profile),
        Err(e) => {
            warn!(
                "profile store unavailable at {} ({e:#}); best score and settings will not persist",
                data_dir.display()
            );
            None
        }
    };

    let mut settings = profile
        .as_ref()
        .and_then(|p| match p.settings() {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("stored settings unreadable: {e:#}");
                None
            }
        })
        .unwrap_or_default();
    if let Some(path) = &args.settings {
        match Settings::from_toml(path) {
            Ok(overrides) => settings = overrides,
            Err(e) => warn!("ignoring settings file {}: {e:#}", path.display()),
        }
    }
    let settings = settings.sanitized();
    let mouse = settings.swipe_enabled;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut terminal = ui::setup_terminal(mouse)?;
    let mut game = App::new(settings, profile, rng);
    let result = game.run(&mut terminal);
    ui::cleanup_terminal(mouse)?;
    result
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".twenty48")
}

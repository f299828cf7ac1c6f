use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "2048-style sliding-tile game for the terminal")]
pub struct Args {
    /// Directory holding the profile database (best score + settings).
    /// Defaults to ~/.twenty48.
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Optional TOML file whose settings replace the stored ones for this
    /// run (and are persisted on exit).
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Seed the game RNG for a reproducible session.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

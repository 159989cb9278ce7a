/// Runtime settings from the command line.  Gameplay tuning stays in
/// `constants`; only things that vary per run live here.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::TARGET_FPS;

#[derive(Parser, Debug, Clone)]
#[clap(name = "space_invaders", about = "Terminal space shooter")]
pub struct Config {
    /// Frame-rate cap.
    #[clap(long, value_parser, default_value_t = TARGET_FPS)]
    pub fps: u32,

    /// Seed for a reproducible game; random when omitted.
    #[clap(long, value_parser)]
    pub seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG).  The terminal is busy
    /// drawing the game, so without this flag nothing is logged.
    #[clap(long, value_parser)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: TARGET_FPS,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Length of one tick.  A zero fps is treated as 1.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

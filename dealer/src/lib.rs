mod game;
mod player;
mod recording;
pub use game::*;
pub use player::*;
pub use recording::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Config {
    pub seed: u64,
    pub rng: StdRng,
    pub recorder: Option<recording::Recorder>,
}

impl Config {
    pub fn new(seed: u64, recorder: Option<recording::Recorder>) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            recorder,
        }
    }
}

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use unolite::RoundReport;

use crate::GameResult;

/// Writes every finished game as a JSON file into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    players: Vec<String>,
    rounds: Vec<RoundReport>,
}

#[derive(Serialize, Deserialize)]
pub struct GameRecording {
    pub players: Vec<String>,
    pub rounds: Vec<RoundReport>,
    pub result: GameResult,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            players: Vec::new(),
            rounds: Vec::new(),
        })
    }

    pub fn start_game(&mut self, players: Vec<String>) {
        self.players = players;
        self.rounds.clear();
    }

    pub fn store_round(&mut self, report: RoundReport) {
        self.rounds.push(report);
    }

    /// Writes `game_000001.json`, `game_000002.json` and so on.
    pub fn write_game_recording(&mut self, result: GameResult) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            players: std::mem::take(&mut self.players),
            rounds: std::mem::take(&mut self.rounds),
            result,
        };
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use unolite::{card, Action, RoundOutcome, SeatId};

    use super::*;

    #[test]
    fn missing_directory() {
        let dir = std::env::temp_dir().join("dealer-recording-does-not-exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = std::env::temp_dir().join(format!("dealer-recording-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut recorder = Recorder::new(dir.clone()).unwrap();

        recorder.start_game(vec![String::from("Ann"), String::from("Bob")]);
        recorder.store_round(RoundReport {
            seat: SeatId(0),
            name: String::from("Ann"),
            action: Action::Played {
                cards: vec![card!("R7")],
                after_forced_draw: false,
            },
            uno: false,
            resolution: None,
            outcome: RoundOutcome::GameOver { winner: SeatId(0) },
        });
        let first = recorder
            .write_game_recording(GameResult::WonByPlayer {
                seat: SeatId(0),
                name: String::from("Ann"),
            })
            .unwrap();
        let second = recorder.write_game_recording(GameResult::Stalemate).unwrap();
        assert!(first.ends_with("game_000001.json"));
        assert!(second.ends_with("game_000002.json"));

        let recording: GameRecording =
            serde_json::from_reader(File::open(&first).unwrap()).unwrap();
        assert_eq!(recording.players, vec!["Ann", "Bob"]);
        assert_eq!(recording.rounds.len(), 1);
        let text = std::fs::read_to_string(&first).unwrap();
        assert!(text.contains("\"R7\""));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

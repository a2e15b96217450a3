use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use unolite::{
    describe_round, render_hand, render_table, Controller, Game, RoundOutcome, SeatId,
};

use crate::recording::Recorder;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameResult {
    WonByPlayer { seat: SeatId, name: String },
    Stalemate,
}

/// Plays `game` to the end, announcing everything on `out`.
///
/// Returns an error only when the controller or the output fails, never
/// for illegal moves.
pub fn play_game(
    game: &mut Game,
    controller: &mut dyn Controller,
    out: &mut dyn Write,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    if let Some(rec) = recorder {
        rec.start_game(game.participants().iter().map(|p| p.name.clone()).collect());
    }

    let mut round_idx = 0;
    let result = loop {
        let seat = game.current()?;
        let view = game.view(seat)?;
        writeln!(out, "{}", render_table(&view))?;
        writeln!(out, "\n{}'s hand:", view.current_name())?;
        write!(out, "{}", render_hand(&view.hand))?;
        if !view.hand.iter().any(|card| card.is_playable_on(view.top_card)) {
            writeln!(out, "\nNo playable cards! Drawing from deck...")?;
        }

        let report = game.play_round(controller)?;
        debug!(round_idx, ?report.action, ?report.outcome, "Round finished");
        for line in describe_round(&report, &game.seat_summaries()) {
            writeln!(out, "{}", line)?;
        }
        let outcome = report.outcome;
        if let Some(rec) = recorder {
            rec.store_round(report);
        }

        match outcome {
            RoundOutcome::NextRound => round_idx += 1,
            RoundOutcome::GameOver { winner } => {
                break GameResult::WonByPlayer {
                    seat: winner,
                    name: game.participant(winner)?.name.clone(),
                }
            }
            RoundOutcome::Stalemate => break GameResult::Stalemate,
        }
    };
    info!(rounds = round_idx + 1, ?result, "Game finished");

    if let Some(rec) = recorder {
        rec.write_game_recording(result.clone())?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use unolite::{card, Deck, Participant};

    use super::*;
    use crate::TerminalPlayer;

    fn scripted_game() -> Game {
        let participants = vec![
            Participant::with_hand("Ann", [card!("R7"), card!("B7"), card!("G3")]),
            Participant::with_hand("Bob", [card!("Y1"), card!("Y2")]),
            Participant::with_hand("Cid", [card!("B9"), card!("B+2"), card!("G8")]),
        ];
        let deck = Deck::from_top([card!("Y5"), card!("Y6"), card!("G4"), card!("R4")]);
        Game::from_parts(participants, deck, card!("R2")).unwrap()
    }

    #[test]
    fn game_until_stalemate() {
        // Ann stacks two sevens and ends on blue, Bob draws Y5, Cid hits Ann
        // with a draw two, Bob draws R4, Cid plays B9. Then the deck is empty
        // and nobody can play for a full lap.
        let input = "0,1\n1\n0\n";
        let mut player = TerminalPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut game = scripted_game();
        let mut out = Vec::new();
        let result = play_game(&mut game, &mut player, &mut out, &mut None).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Ann plays [Red 7] + [Blue 7]"));
        assert!(out.contains(">> Ann has UNO!"));
        assert!(out.contains("Drew: [Yellow 5]"));
        assert!(out.contains(">> DRAW TWO! Ann draws 2 cards and loses their turn."));
        assert!(out.contains("Cid plays [Blue 9]"));
        assert!(out.contains(">> Cid has UNO!"));
        assert_eq!(out.matches("Deck is empty! Skipping turn.").count(), 3);
        assert_eq!(result, GameResult::Stalemate);
        assert_eq!(game.participants()[0].hand.count(), 3);
    }

    #[test]
    fn stacked_win() {
        let participants = vec![
            Participant::with_hand("Ann", [card!("R1"), card!("B1")]),
            Participant::with_hand("Bob", [card!("Y3")]),
        ];
        let mut game = Game::from_parts(participants, Deck::new(), card!("R2")).unwrap();
        let input = "1\n0,1\n";
        let mut player = TerminalPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut out = Vec::new();
        let result = play_game(&mut game, &mut player, &mut out, &mut None).unwrap();
        let out = String::from_utf8(out).unwrap();
        let prompts = String::from_utf8(player.output().clone()).unwrap();

        // B1 alone is not playable on R2, so Ann is asked again
        assert!(prompts.contains("[Blue 1] cannot be played on [Red 2]. Try again."));
        assert!(out.contains("Ann wins! Congratulations!"));
        assert!(!out.contains("has UNO!"));
        assert_eq!(
            result,
            GameResult::WonByPlayer {
                seat: SeatId(0),
                name: String::from("Ann"),
            }
        );
    }
}

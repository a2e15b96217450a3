use serde::{Deserialize, Serialize};

use crate::{Card, Direction, EngineError, Resolution, SeatId};

/// What a participant wants to do on their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Move {
    /// Play the cards at these hand positions, in this order.
    Play { indices: Vec<usize> },
    /// Draw one card and end the turn.
    Draw,
}

/// One entry of the roster, as shown to everyone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub name: String,
    pub cards: usize,
}

/// Everything the current participant gets to see before deciding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnView {
    pub top_card: Card,
    pub seat: SeatId,
    /// The hand of the current participant.
    pub hand: Vec<Card>,
    /// All participants in join order.
    pub seats: Vec<SeatSummary>,
    pub direction: Direction,
    pub draw_pile: usize,
}

impl TurnView {
    pub fn current_name(&self) -> &str {
        &self.seats[self.seat.0].name
    }
}

/// Makes the decisions for the participants.
///
/// Errors are reserved for failures of the controller itself, e.g. I/O.
/// Illegal moves are reported back through [`Self::move_rejected()`] and
/// asked for again.
pub trait Controller {
    fn choose_move(&mut self, view: &TurnView) -> anyhow::Result<Move>;

    /// After a forced draw produced a playable card: play it right away?
    fn play_drawn_card(&mut self, view: &TurnView, drawn: Card) -> anyhow::Result<bool>;

    fn move_rejected(&mut self, _view: &TurnView, _err: &EngineError) -> anyhow::Result<()> {
        Ok(())
    }
}

/// What the participant ended up doing in a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Played a stack of cards. The last one is the new top card.
    Played {
        cards: Vec<Card>,
        after_forced_draw: bool,
    },
    /// Drew a card and kept it.
    Drew { card: Card, forced: bool },
    /// Had to or wanted to draw, but the deck was empty.
    Passed,
}

/// Where the game stands after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoundOutcome {
    NextRound,
    GameOver { winner: SeatId },
    /// The deck is exhausted and nobody could play for a full lap.
    Stalemate,
}

/// The record of one round, as returned by [`Game::play_round()`](crate::Game::play_round).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub seat: SeatId,
    pub name: String,
    pub action: Action,
    /// The participant is down to a single card.
    pub uno: bool,
    /// `None` unless cards were played and the game goes on.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub resolution: Option<Resolution>,
    pub outcome: RoundOutcome,
}

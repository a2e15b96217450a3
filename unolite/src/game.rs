use rand::Rng;
use tracing::{debug, info, trace};

use crate::turn::{execute_play, PlayOutcome, Table};
use crate::{
    validate_stack, Action, Card, Controller, Deck, Direction, EngineError, Move, Participant,
    RoundOutcome, RoundReport, SeatId, SeatSummary, TurnRing, TurnView, ValidatedStack,
};

pub const INITIAL_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

/// Where a game is within its current round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlay,
    Validated,
    ForcedDraw,
    EffectsApplied,
    GameOver { winner: SeatId },
    Stalemate,
}

/// The state of one game: participants, turn order, draw pile and table.
///
/// All mutation goes through [`Self::play_round()`].
#[derive(Clone, Debug)]
pub struct Game {
    participants: Vec<Participant>,
    ring: TurnRing<SeatId>,
    deck: Deck,
    top_card: Card,
    phase: Phase,
    /// Consecutive rounds in which nobody played and nothing could be drawn.
    passes_in_a_row: usize,
}

/// What was decided in a round, before any of it was applied.
enum Decision {
    Play {
        stack: ValidatedStack,
        after_forced_draw: bool,
    },
    Drew {
        card: Card,
        forced: bool,
    },
    Passed,
}

impl Game {
    /// Sets up a game with a shuffled deck, dealt hands and a number card on the table.
    ///
    /// Turns go in the order of `names`, starting with the first.
    pub fn new<R: Rng + ?Sized>(names: Vec<String>, rng: &mut R) -> Result<Self, EngineError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(EngineError::PlayerCount { given: names.len() });
        }

        let mut deck = Deck::standard();
        deck.shuffle(rng);

        let mut participants: Vec<Participant> = names.into_iter().map(Participant::new).collect();
        for participant in participants.iter_mut() {
            for _ in 0..INITIAL_HAND_SIZE {
                if let Ok(card) = deck.draw_top() {
                    participant.hand.append(card);
                }
            }
        }

        // The first card on the table must not be an action card
        let top_card = loop {
            let card = deck.draw_top()?;
            if !card.is_action() {
                break card;
            }
            deck.put_back(card);
            deck.shuffle(rng);
        };
        info!(players = participants.len(), %top_card, "Game is ready");

        Self::from_parts(participants, deck, top_card)
    }

    /// Sets up a game exactly as given, without dealing or shuffling.
    pub fn from_parts(
        participants: Vec<Participant>,
        deck: Deck,
        top_card: Card,
    ) -> Result<Self, EngineError> {
        if participants.is_empty() {
            return Err(EngineError::EmptyStructure);
        }
        let ring = TurnRing::from_roster((0..participants.len()).map(SeatId));
        Ok(Self {
            participants,
            ring,
            deck,
            top_card,
            phase: Phase::AwaitingPlay,
            passes_in_a_row: 0,
        })
    }

    pub fn top_card(&self) -> Card {
        self.top_card
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. } | Phase::Stalemate)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, seat: SeatId) -> Result<&Participant, EngineError> {
        self.participants
            .get(seat.0)
            .ok_or(EngineError::IndexOutOfRange {
                index: seat.0,
                len: self.participants.len(),
            })
    }

    /// Whose turn it is.
    pub fn current(&self) -> Result<SeatId, EngineError> {
        self.ring.current()
    }

    pub fn direction(&self) -> Direction {
        self.ring.direction()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.deck.len()
    }

    pub fn seat_summaries(&self) -> Vec<SeatSummary> {
        self.participants
            .iter()
            .map(|p| SeatSummary {
                name: p.name.clone(),
                cards: p.hand.count(),
            })
            .collect()
    }

    /// The table as seen by the participant at `seat`.
    pub fn view(&self, seat: SeatId) -> Result<TurnView, EngineError> {
        Ok(TurnView {
            top_card: self.top_card,
            seat,
            hand: self.participant(seat)?.hand.to_vec(),
            seats: self.seat_summaries(),
            direction: self.direction(),
            draw_pile: self.draw_pile_len(),
        })
    }

    fn transition(&mut self, phase: Phase) {
        trace!(from = ?self.phase, to = ?phase, "Phase transition");
        self.phase = phase;
    }

    /// Plays one round for the participant whose turn it is.
    ///
    /// Illegal moves are sent back to the controller until it comes up with
    /// a legal one. Returns an error only when the controller fails or the
    /// game is already over.
    pub fn play_round(&mut self, controller: &mut dyn Controller) -> anyhow::Result<RoundReport> {
        if self.is_over() {
            anyhow::bail!("The game is already over");
        }
        let seat = self.ring.current()?;
        let name = self.participant(seat)?.name.clone();

        let decision = if self.participants[seat.0].hand.has_playable(self.top_card) {
            self.ask_for_move(seat, controller)?
        } else {
            self.transition(Phase::ForcedDraw);
            self.forced_draw(seat, controller)?
        };

        let (action, uno, resolution) = match decision {
            Decision::Play {
                stack,
                after_forced_draw,
            } => {
                self.transition(Phase::Validated);
                self.passes_in_a_row = 0;
                let outcome = execute_play(
                    Table {
                        participants: &mut self.participants,
                        ring: &mut self.ring,
                        deck: &mut self.deck,
                        top_card: &mut self.top_card,
                    },
                    seat,
                    &stack,
                )?;
                let action = Action::Played {
                    cards: stack.cards().to_vec(),
                    after_forced_draw,
                };
                match outcome {
                    PlayOutcome::Won => {
                        info!(winner = name, "Game over");
                        self.transition(Phase::GameOver { winner: seat });
                        return Ok(RoundReport {
                            seat,
                            name,
                            action,
                            uno: false,
                            resolution: None,
                            outcome: RoundOutcome::GameOver { winner: seat },
                        });
                    }
                    PlayOutcome::Continue { uno, resolution } => (action, uno, Some(resolution)),
                }
            }
            Decision::Drew { card, forced } => {
                self.passes_in_a_row = 0;
                (Action::Drew { card, forced }, false, None)
            }
            Decision::Passed => {
                self.passes_in_a_row += 1;
                (Action::Passed, false, None)
            }
        };
        self.transition(Phase::EffectsApplied);

        let outcome = if self.deck.is_empty() && self.passes_in_a_row >= self.ring.len() {
            info!("Nobody can play and the deck is empty");
            self.transition(Phase::Stalemate);
            RoundOutcome::Stalemate
        } else {
            self.ring.advance();
            self.transition(Phase::AwaitingPlay);
            RoundOutcome::NextRound
        };

        Ok(RoundReport {
            seat,
            name,
            action,
            uno,
            resolution,
            outcome,
        })
    }

    fn ask_for_move(
        &mut self,
        seat: SeatId,
        controller: &mut dyn Controller,
    ) -> anyhow::Result<Decision> {
        let view = self.view(seat)?;
        loop {
            match controller.choose_move(&view)? {
                Move::Draw => return Ok(self.draw_into_hand(seat, false)),
                Move::Play { indices } => {
                    match validate_stack(self.top_card, &self.participants[seat.0].hand, &indices)
                    {
                        Ok(stack) => {
                            return Ok(Decision::Play {
                                stack,
                                after_forced_draw: false,
                            })
                        }
                        Err(err) => {
                            debug!(seat = seat.0, ?indices, %err, "Rejected move");
                            controller.move_rejected(&view, &err)?;
                        }
                    }
                }
            }
        }
    }

    fn forced_draw(
        &mut self,
        seat: SeatId,
        controller: &mut dyn Controller,
    ) -> anyhow::Result<Decision> {
        let decision = self.draw_into_hand(seat, true);
        let Decision::Drew { card, .. } = decision else {
            return Ok(decision);
        };
        if !card.is_playable_on(self.top_card) {
            return Ok(decision);
        }

        let view = self.view(seat)?;
        if !controller.play_drawn_card(&view, card)? {
            return Ok(decision);
        }
        let hand = &self.participants[seat.0].hand;
        let stack = validate_stack(self.top_card, hand, &[hand.count() - 1])?;
        Ok(Decision::Play {
            stack,
            after_forced_draw: true,
        })
    }

    fn draw_into_hand(&mut self, seat: SeatId, forced: bool) -> Decision {
        match self.deck.draw_top() {
            Ok(card) => {
                debug!(seat = seat.0, %card, forced, "Drew a card");
                self.participants[seat.0].hand.append(card);
                Decision::Drew { card, forced }
            }
            Err(_) => {
                debug!(seat = seat.0, "Deck is empty, skipping the draw");
                Decision::Passed
            }
        }
    }
}

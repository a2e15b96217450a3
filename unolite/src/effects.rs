use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CardKind, Deck, Direction, EngineError, Participant, SeatId, TurnRing};

/// How many cards a single draw two card makes the victim draw.
pub const DRAW_TWO_PENALTY: usize = 2;

/// Summarizes what a stacked play did to the ring and the participants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Resolution {
    /// Number cards have no effect.
    NoEffect,
    /// The next `count` participants lose their turn.
    Skipped { count: usize },
    /// An odd number of reverse cards flipped the direction.
    ///
    /// With only two participants the cursor also moves on, so that the
    /// opponent is skipped instead of play returning to them.
    Reversed {
        direction: Direction,
        extra_advance: bool,
    },
    /// An even number of reverse cards cancel out.
    ReverseCancelled { count: usize },
    /// The victim lost their turn and drew `drawn` cards, which is less
    /// than `penalty` if the deck ran out.
    DrawPenalty {
        victim: SeatId,
        penalty: usize,
        drawn: usize,
    },
}

/// Applies the effect of `count` cards of the given kind, played by the
/// participant at the ring's cursor.
///
/// The caller advances the ring once more afterwards for the normal turn
/// progression. Effects are shaped around that trailing advance: a skip
/// moves the cursor `count` times so the trailing advance lands behind the
/// skipped participants, and a draw two leaves the cursor on its victim.
pub fn resolve_effects(
    kind: CardKind,
    count: usize,
    ring: &mut TurnRing<SeatId>,
    participants: &mut [Participant],
    deck: &mut Deck,
) -> Result<Resolution, EngineError> {
    let resolution = match kind {
        CardKind::Number => Resolution::NoEffect,
        CardKind::Skip => {
            ring.advance_by(count);
            Resolution::Skipped { count }
        }
        CardKind::Reverse if count % 2 == 1 => {
            ring.reverse_direction();
            let extra_advance = ring.len() == 2;
            if extra_advance {
                ring.advance();
            }
            Resolution::Reversed {
                direction: ring.direction(),
                extra_advance,
            }
        }
        CardKind::Reverse => Resolution::ReverseCancelled { count },
        CardKind::DrawTwo => {
            ring.advance();
            let victim = ring.current()?;
            let penalty = DRAW_TWO_PENALTY * count;
            let hand = &mut participants
                .get_mut(victim.0)
                .ok_or(EngineError::EmptyStructure)?
                .hand;
            let mut drawn = 0;
            while drawn < penalty {
                match deck.draw_top() {
                    Ok(card) => hand.append(card),
                    Err(EngineError::EmptyDeck) => break,
                    Err(err) => return Err(err),
                }
                drawn += 1;
            }
            Resolution::DrawPenalty {
                victim,
                penalty,
                drawn,
            }
        }
    };
    debug!(?kind, count, ?resolution, "Resolved effects");
    Ok(resolution)
}

use tracing::debug;

use crate::{
    resolve_effects, Card, Deck, EngineError, Participant, Resolution, SeatId, TurnRing,
    ValidatedStack,
};

/// Summarizes the outcome of playing a validated stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The hand is empty. No effects were resolved.
    Won,
    Continue { uno: bool, resolution: Resolution },
}

/// The mutable parts of the table that a play touches.
pub struct Table<'a> {
    pub participants: &'a mut [Participant],
    pub ring: &'a mut TurnRing<SeatId>,
    pub deck: &'a mut Deck,
    pub top_card: &'a mut Card,
}

/// Plays `stack` from the hand of `seat`.
///
/// The order matters: the last card of the stack becomes the top card, the
/// cards leave the hand, the win is checked, and only then are the effects
/// resolved. Draw two penalties depend on the ring cursor still being on
/// `seat` at this point.
pub fn execute_play(
    table: Table<'_>,
    seat: SeatId,
    stack: &ValidatedStack,
) -> Result<PlayOutcome, EngineError> {
    *table.top_card = stack.last_card();

    let hand = &mut table
        .participants
        .get_mut(seat.0)
        .ok_or(EngineError::EmptyStructure)?
        .hand;
    // Highest index first, so that the lower indices stay valid
    let mut indices = stack.indices().to_vec();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    for idx in indices {
        hand.remove_at(idx)?;
    }

    if hand.is_empty() {
        debug!(seat = seat.0, "Hand is empty");
        return Ok(PlayOutcome::Won);
    }
    let uno = hand.count() == 1;

    let resolution = resolve_effects(
        stack.kind(),
        stack.count(),
        table.ring,
        table.participants,
        table.deck,
    )?;
    Ok(PlayOutcome::Continue { uno, resolution })
}

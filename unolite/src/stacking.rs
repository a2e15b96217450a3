use crate::{Card, CardKind, EngineError, Hand, IllegalStack};

/// A stacked play that passed [`validate_stack()`].
///
/// Both vectors are non-empty and in the order the cards were chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedStack {
    indices: Vec<usize>,
    cards: Vec<Card>,
}

impl ValidatedStack {
    /// Hand positions, in play order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The kind shared by all cards of the stack.
    pub fn kind(&self) -> CardKind {
        self.cards[0].kind()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The card that ends up on top of the discard pile.
    pub fn last_card(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }
}

/// Checks whether playing the cards at `selection` from `hand`, in this
/// order, is a legal stacked play on `top_card`.
///
/// The first card has to be playable on the top card, and every other card
/// has to match the first one for stacking (same number, or same action).
/// Neither the hand nor the table is touched.
pub fn validate_stack(
    top_card: Card,
    hand: &Hand,
    selection: &[usize],
) -> Result<ValidatedStack, EngineError> {
    if selection.is_empty() {
        return Err(IllegalStack::PlayedZeroCards.into());
    }

    let cards = selection
        .iter()
        .map(|&idx| hand.card_at(idx))
        .collect::<Result<Vec<Card>, EngineError>>()?;

    let mut seen = vec![false; hand.count()];
    for &idx in selection {
        if std::mem::replace(&mut seen[idx], true) {
            return Err(IllegalStack::DuplicateIndex { index: idx }.into());
        }
    }

    let first = cards[0];
    if !first.is_playable_on(top_card) {
        return Err(IllegalStack::NotPlayableOnTopCard {
            card: first,
            top_card,
        }
        .into());
    }

    for (card_idx, &card) in cards.iter().enumerate().skip(1) {
        if !card.stacks_with(first) {
            return Err(IllegalStack::DoesNotStackWithFirst {
                card_idx,
                card,
                first,
            }
            .into());
        }
    }

    Ok(ValidatedStack {
        indices: selection.to_vec(),
        cards,
    })
}

use serde::{Deserialize, Serialize};

use crate::{Card, EngineError};

/// Index of a participant in join order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(pub usize);

/// The cards a participant holds, in the order they were received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn card_at(&self, index: usize) -> Result<Card, EngineError> {
        self.cards
            .get(index)
            .copied()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })
    }

    /// Removes the card at `index`, shifting all later cards down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, EngineError> {
        if index >= self.cards.len() {
            return Err(EngineError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(index))
    }

    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn has_playable(&self, top_card: Card) -> bool {
        self.cards.iter().any(|card| card.is_playable_on(top_card))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// A player taking part in one game.
#[derive(Clone, Debug)]
pub struct Participant {
    pub name: String,
    pub hand: Hand,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    pub fn with_hand(name: impl Into<String>, hand: impl IntoIterator<Item = Card>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::from_iter(hand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn removal_shifts_later_cards() {
        let mut hand = Hand::from_iter([card!("R1"), card!("B2"), card!("G3")]);
        assert_eq!(hand.remove_at(1), Ok(card!("B2")));
        assert_eq!(hand.card_at(1), Ok(card!("G3")));
        assert_eq!(hand.count(), 2);
    }

    #[test]
    fn out_of_range() {
        let mut hand = Hand::from_iter([card!("R1")]);
        assert_eq!(
            hand.card_at(3),
            Err(EngineError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(
            hand.remove_at(1),
            Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn playable() {
        let hand = Hand::from_iter([card!("R1"), card!("BS")]);
        assert!(hand.has_playable(card!("GS")));
        assert!(!hand.has_playable(card!("G5")));
        assert!(!Hand::new().has_playable(card!("G5")));
    }
}

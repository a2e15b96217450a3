use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Card, EngineError, Rank, ALL_COLORS};

/// How many copies of each action card, and of each number except zero, a color has.
const COPIES: usize = 2;

/// The draw pile.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    // The top of the pile is the last element.
    cards: Vec<Card>,
}

impl Deck {
    /// An empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// The unshuffled 100-card deck.
    ///
    /// Every color has one zero, two of each number from one to nine,
    /// and two of each action.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(100);
        for color in ALL_COLORS {
            cards.push(Card::new(color, Rank::Number(0)));
            for n in 1..=9 {
                for _ in 0..COPIES {
                    cards.push(Card::new(color, Rank::Number(n)));
                }
            }
            for _ in 0..COPIES {
                cards.push(Card::new(color, Rank::Skip));
                cards.push(Card::new(color, Rank::Reverse));
                cards.push(Card::new(color, Rank::DrawTwo));
            }
        }
        Self { cards }
    }

    /// A deck in a known order: `cards[0]` is drawn first.
    pub fn from_top(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Puts a card at the bottom of the pile.
    pub fn put_back(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    pub fn draw_top(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

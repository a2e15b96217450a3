use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single card, e.g. a red seven or a blue skip.
///
/// Serializes to the short notation accepted by [`card!`], e.g. `"R7"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub color: Color,
    pub rank: Rank,
}

/// The color of a [card](Card).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

/// The rank of a [card](Card): a number from 0 to 9, or an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

/// A [`Rank`] with the number erased.
///
/// This is what decides the effect of a play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
}

pub const ALL_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

impl Color {
    fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Number(n) => write!(f, "{}", n),
            Rank::Skip => write!(f, "Skip"),
            Rank::Reverse => write!(f, "Reverse"),
            Rank::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {}]", self.color, self.rank)
    }
}

impl Card {
    pub fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub fn kind(&self) -> CardKind {
        match self.rank {
            Rank::Number(_) => CardKind::Number,
            Rank::Skip => CardKind::Skip,
            Rank::Reverse => CardKind::Reverse,
            Rank::DrawTwo => CardKind::DrawTwo,
        }
    }

    pub fn is_action(&self) -> bool {
        self.kind() != CardKind::Number
    }

    /// Whether this card may be played on top of `top_card`.
    ///
    /// Same color always works. Otherwise numbers need the same number
    /// and actions need the same action, whatever their color.
    pub fn is_playable_on(&self, top_card: Card) -> bool {
        self.color == top_card.color || self.rank == top_card.rank
    }

    /// Whether this card may follow `first` in a stacked play.
    ///
    /// Color is irrelevant here, and a number never stacks with an action.
    pub fn stacks_with(&self, first: Card) -> bool {
        self.rank == first.rank
    }

    /// The short notation of this card, see [`card!`].
    pub fn notation(&self) -> String {
        let rank = match self.rank {
            Rank::Number(n) => n.to_string(),
            Rank::Skip => String::from("S"),
            Rank::Reverse => String::from("R"),
            Rank::DrawTwo => String::from("+2"),
        };
        format!("{}{}", self.color.letter(), rank)
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFromStrErr {
    LessThanTwoChars,
    TrailingChars,
    InvalidColor,
    InvalidRank,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardFromStrErr::LessThanTwoChars => write!(f, "A card needs a color and a rank"),
            CardFromStrErr::TrailingChars => write!(f, "Unexpected characters after the rank"),
            CardFromStrErr::InvalidColor => write!(f, "The color must be one of R, B, G, Y"),
            CardFromStrErr::InvalidRank => {
                write!(f, "The rank must be a digit, S, R or +2")
            }
        }
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let color = match chars.next().ok_or(CardFromStrErr::LessThanTwoChars)? {
            'R' => Color::Red,
            'B' => Color::Blue,
            'G' => Color::Green,
            'Y' => Color::Yellow,
            _ => return Err(CardFromStrErr::InvalidColor),
        };
        let rank_char = chars.next().ok_or(CardFromStrErr::LessThanTwoChars)?;
        let rank = match rank_char {
            '0'..='9' => Rank::Number(rank_char as u8 - b'0'),
            'S' => Rank::Skip,
            'R' => Rank::Reverse,
            '+' => match chars.next() {
                Some('2') => Rank::DrawTwo,
                _ => return Err(CardFromStrErr::InvalidRank),
            },
            _ => return Err(CardFromStrErr::InvalidRank),
        };
        if chars.next().is_some() {
            return Err(CardFromStrErr::TrailingChars);
        }
        Ok(Card { color, rank })
    }
}

impl TryFrom<String> for Card {
    type Error = CardFromStrErr;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.notation()
    }
}

/// Shorthand for creating cards from their short notation.
///
/// The first character is the [color](Color) (`R`, `B`, `G` or `Y`), the rest is
/// the [rank](Rank): a digit, `S` for skip, `R` for reverse or `+2` for draw two.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use unolite::{card, Card, Color, Rank};
/// assert_eq!(
///     card!("Y+2"),
///     Card { color: Color::Yellow, rank: Rank::DrawTwo }
/// );
/// ```
#[macro_export]
macro_rules! card {
    ($cs:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($cs)
            .expect("Invalid card code given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

use crate::Card;

/// The error type for [`validate_stack()`](crate::validate_stack), i.e. for
/// a stacked play that breaks the rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IllegalStack {
    PlayedZeroCards,
    DuplicateIndex {
        index: usize,
    },
    NotPlayableOnTopCard {
        card: Card,
        top_card: Card,
    },
    DoesNotStackWithFirst {
        card_idx: usize,
        card: Card,
        first: Card,
    },
}

impl std::error::Error for IllegalStack {}

fn ordinal_number(num: usize) -> String {
    match num {
        0 => String::from("first"),
        1 => String::from("second"),
        2 => String::from("third"),
        3 => String::from("fourth"),
        4 => String::from("fifth"),
        _ => format!("{}th", num + 1),
    }
}

impl std::fmt::Display for IllegalStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalStack::PlayedZeroCards => write!(f, "Tried to play zero cards"),
            IllegalStack::DuplicateIndex { index } => {
                write!(f, "Duplicate index: {}", index)
            }
            IllegalStack::NotPlayableOnTopCard { card, top_card } => {
                write!(f, "{} cannot be played on {}", card, top_card)
            }
            IllegalStack::DoesNotStackWithFirst {
                card_idx,
                card,
                first,
            } => write!(
                f,
                "The {} card, {}, does not match {} for stacking",
                ordinal_number(*card_idx),
                card,
                first
            ),
        }
    }
}

/// The error type for operations of the game engine.
///
/// None of these are fatal: an invalid move is asked for again, and an
/// empty deck only skips the draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// A ring or hand operation on an empty collection.
    EmptyStructure,
    /// A move referred to a hand slot that does not exist.
    IndexOutOfRange { index: usize, len: usize },
    InvalidStack(IllegalStack),
    /// A draw was attempted with no cards left.
    EmptyDeck,
    /// Tried to set up a game with an unsupported number of players.
    PlayerCount { given: usize },
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidStack(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyStructure => write!(f, "Operation on an empty collection"),
            EngineError::IndexOutOfRange { index, len } => {
                write!(f, "Invalid index: {} (hand has {} cards)", index, len)
            }
            EngineError::InvalidStack(_) => write!(f, "Illegal stacked play"),
            EngineError::EmptyDeck => write!(f, "The deck is empty"),
            EngineError::PlayerCount { given } => write!(
                f,
                "A game needs between {} and {} players, not {}",
                crate::MIN_PLAYERS,
                crate::MAX_PLAYERS,
                given
            ),
        }
    }
}

impl From<IllegalStack> for EngineError {
    fn from(err: IllegalStack) -> Self {
        EngineError::InvalidStack(err)
    }
}

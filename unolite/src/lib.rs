pub use cards::*;
pub use deck::*;
pub use effects::*;
pub use errors::*;
pub use game::*;
pub use participant::*;
pub use protocol::*;
pub use ring::*;
pub use stacking::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod cards;
mod deck;
mod effects;
mod errors;
mod game;
mod participant;
mod protocol;
mod ring;
mod stacking;
mod turn;
mod visualization;

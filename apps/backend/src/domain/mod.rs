//! Domain layer: pure deck logic with no HTTP or database dependencies.

pub mod assembly;
pub mod cards_parsing;
pub mod cards_types;
pub mod deck;

#[cfg(test)]
mod tests_assembly;
#[cfg(test)]
mod tests_validation;

pub use assembly::{assemble, full_deck, shuffle};
pub use cards_parsing::{decode, encode};
pub use cards_types::{CardFace, Suit, Value, FULL_DECK_SIZE};
pub use deck::{validate, DeckRequest, ValidatedDeck};

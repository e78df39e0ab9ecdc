pub mod cards;
pub mod decks;

pub use cards::Entity as Cards;
pub use decks::Entity as Decks;

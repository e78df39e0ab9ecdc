//! Deck assembly: canonical full deck, caller-supplied decks, shuffling.

use rand::Rng;

use super::cards_types::{CardFace, Suit, Value, FULL_DECK_SIZE};
use super::deck::{NewDeck, ValidatedDeck};

/// The 52 faces in canonical order: suits S, D, C, H; values A, 2..10, J, Q, K.
pub fn full_deck() -> Vec<CardFace> {
    let mut cards = Vec::with_capacity(FULL_DECK_SIZE);
    for suit in Suit::all() {
        for value in Value::all() {
            cards.push(CardFace { value, suit });
        }
    }
    cards
}

/// Fisher-Yates, left to right: position `i` swaps with a uniform pick from `[i, n)`.
pub fn shuffle<T, R: Rng + ?Sized>(cards: &mut [T], rng: &mut R) {
    let n = cards.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        cards.swap(i, j);
    }
}

/// Decide the final card order for a validated request.
pub fn assemble<R: Rng + ?Sized>(deck: ValidatedDeck, rng: &mut R) -> NewDeck {
    let mut cards = deck.faces.unwrap_or_else(full_deck);
    if deck.shuffled {
        shuffle(&mut cards, rng);
    }
    NewDeck {
        shuffled: deck.shuffled,
        cards,
    }
}

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::assembly::{assemble, full_deck, shuffle};
use crate::domain::cards_types::{CardFace, Suit, Value};
use crate::domain::deck::{validate, DeckRequest};

#[test]
fn full_deck_has_canonical_order() {
    let deck = full_deck();
    assert_eq!(deck.len(), 52);

    let codes: Vec<String> = deck.iter().map(CardFace::code).collect();
    assert_eq!(&codes[..14], &[
        "AS", "2S", "3S", "4S", "5S", "6S", "7S", "8S", "9S", "10S", "JS", "QS", "KS", "AD",
    ]);
    assert_eq!(codes[26], "AC");
    assert_eq!(codes[39], "AH");
    assert_eq!(codes[51], "KH");

    for suit in Suit::all() {
        assert_eq!(deck.iter().filter(|c| c.suit == suit).count(), 13);
    }
    let unique: HashSet<_> = deck.iter().collect();
    assert_eq!(unique.len(), 52);
}

#[test]
fn unshuffled_partial_keeps_caller_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let validated = validate(&DeckRequest::partial(false, ["AS", "KD", "AC", "KH"])).unwrap();

    let deck = assemble(validated, &mut rng);

    assert!(!deck.shuffled);
    assert_eq!(deck.remaining(), 4);
    assert_eq!(
        deck.cards,
        vec![
            CardFace::new(Value::Ace, Suit::Spades),
            CardFace::new(Value::King, Suit::Diamonds),
            CardFace::new(Value::Ace, Suit::Clubs),
            CardFace::new(Value::King, Suit::Hearts),
        ]
    );
}

#[test]
fn same_seed_same_order() {
    let mut a = full_deck();
    let mut b = full_deck();
    shuffle(&mut a, &mut ChaCha8Rng::seed_from_u64(42));
    shuffle(&mut b, &mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a, b);
    assert_ne!(a, full_deck());
}

#[test]
fn shuffle_handles_tiny_slices() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut empty: Vec<CardFace> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());

    let mut one = vec![CardFace::new(Value::Ace, Suit::Spades)];
    shuffle(&mut one, &mut rng);
    assert_eq!(one, vec![CardFace::new(Value::Ace, Suit::Spades)]);
}

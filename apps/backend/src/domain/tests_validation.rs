use crate::domain::cards_types::{CardFace, Suit, Value};
use crate::domain::deck::{validate, DeckRequest};
use crate::errors::domain::{DomainError, ValidationKind};

fn kind_of(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn full_deck_request_is_valid() {
    let validated = validate(&DeckRequest::full(true)).unwrap();
    assert!(validated.shuffled);
    assert!(validated.faces.is_none());
}

#[test]
fn partial_request_is_enriched_in_caller_order() {
    let validated = validate(&DeckRequest::partial(false, ["AS", " KD", "10H "])).unwrap();
    assert_eq!(
        validated.faces.unwrap(),
        vec![
            CardFace::new(Value::Ace, Suit::Spades),
            CardFace::new(Value::King, Suit::Diamonds),
            CardFace::new(Value::Ten, Suit::Hearts),
        ]
    );
}

#[test]
fn remaining_mismatch_is_invalid_deck() {
    let mut request = DeckRequest::partial(false, ["AS", "KD"]);
    request.remaining = 3;
    assert_eq!(kind_of(validate(&request).unwrap_err()), ValidationKind::InvalidDeck);
}

#[test]
fn remaining_52_with_short_list_is_invalid_deck() {
    let mut request = DeckRequest::partial(false, ["AS", "KD"]);
    request.remaining = 52;
    assert_eq!(kind_of(validate(&request).unwrap_err()), ValidationKind::InvalidDeck);
}

#[test]
fn empty_deck_is_invalid() {
    let request = DeckRequest {
        shuffled: false,
        remaining: 0,
        cards: Vec::new(),
    };
    assert_eq!(kind_of(validate(&request).unwrap_err()), ValidationKind::InvalidDeck);
}

#[test]
fn count_is_checked_before_codes() {
    let mut request = DeckRequest::partial(false, ["ZZ"]);
    request.remaining = 7;
    assert_eq!(kind_of(validate(&request).unwrap_err()), ValidationKind::InvalidDeck);
}

#[test]
fn first_bad_code_is_reported() {
    let err = validate(&DeckRequest::partial(false, ["AS", "50K", "10T"])).unwrap_err();
    assert!(err.to_string().contains("50K"));
    assert_eq!(kind_of(err), ValidationKind::InvalidCard);
}

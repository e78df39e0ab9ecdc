//! Deck creation requests and their validation.

use super::cards_parsing::decode;
use super::cards_types::{CardFace, FULL_DECK_SIZE};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a caller asked for. An empty `cards` list means a full deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeckRequest {
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<String>,
}

impl DeckRequest {
    /// Full 52-card deck.
    pub fn full(shuffled: bool) -> Self {
        Self {
            shuffled,
            remaining: FULL_DECK_SIZE,
            cards: Vec::new(),
        }
    }

    /// Partial deck from the given codes, `remaining` set to their count.
    pub fn partial<I, S>(shuffled: bool, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cards: Vec<String> = codes.into_iter().map(Into::into).collect();
        Self {
            shuffled,
            remaining: cards.len(),
            cards,
        }
    }
}

/// A request that passed validation, with every supplied code resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDeck {
    pub shuffled: bool,
    /// `None` for a full deck; otherwise the caller's faces in caller order.
    pub faces: Option<Vec<CardFace>>,
}

/// A deck ready to persist: final card order already decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeck {
    pub shuffled: bool,
    pub cards: Vec<CardFace>,
}

impl NewDeck {
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

/// Check the remaining count first, then every code; first failure wins.
pub fn validate(request: &DeckRequest) -> Result<ValidatedDeck, DomainError> {
    let expected = if request.cards.is_empty() {
        FULL_DECK_SIZE
    } else {
        request.cards.len()
    };
    if request.remaining != expected {
        return Err(DomainError::validation(
            ValidationKind::InvalidDeck,
            format!(
                "invalid deck: remaining {} does not match {} requested cards",
                request.remaining, expected
            ),
        ));
    }

    if request.cards.is_empty() {
        return Ok(ValidatedDeck {
            shuffled: request.shuffled,
            faces: None,
        });
    }

    let faces = request
        .cards
        .iter()
        .map(|code| decode(code))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedDeck {
        shuffled: request.shuffled,
        faces: Some(faces),
    })
}

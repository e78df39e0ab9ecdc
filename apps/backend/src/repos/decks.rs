//! Deck repository functions (generic over ConnectionTrait).
//!
//! Every function expects to run inside the caller's transaction; none of
//! them begin or commit one.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::cards_sea::{self as cards_adapter, CardCreate, CardOrder};
use crate::adapters::decks_sea::{self as decks_adapter, DeckCreate};
use crate::domain::cards_parsing::from_stored_format;
use crate::domain::cards_types::CardFace;
use crate::domain::deck::NewDeck;
use crate::entities::{cards, decks};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Card domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub face: CardFace,
    pub drawn: bool,
}

impl Card {
    pub fn code(&self) -> String {
        self.face.code()
    }
}

/// Deck domain model. `cards` holds undrawn cards only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: Uuid,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<Card>,
}

/// Insert the deck row and one row per card, in order.
pub async fn create_deck<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_deck: &NewDeck,
) -> Result<Deck, DomainError> {
    let remaining = i32::try_from(new_deck.remaining()).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::Other("Overflow".into()),
            "deck too large to store",
        )
    })?;
    let deck_id = Uuid::new_v4();

    let deck_row = decks_adapter::create_deck(
        conn,
        DeckCreate::new(deck_id, new_deck.shuffled, remaining),
    )
    .await?;

    let mut cards = Vec::with_capacity(new_deck.cards.len());
    for face in &new_deck.cards {
        let row = cards_adapter::insert_card(
            conn,
            CardCreate {
                deck_id,
                code: face.code(),
                value: face.value.name().to_string(),
                suit: face.suit.name().to_string(),
            },
        )
        .await?;
        cards.push(Card::try_from(row)?);
    }

    Ok(Deck {
        id: deck_row.id,
        shuffled: deck_row.shuffled,
        remaining: remaining_from_row(&deck_row)?,
        cards,
    })
}

/// The deck with its undrawn cards in insertion order.
pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
) -> Result<Deck, DomainError> {
    let deck_row = decks_adapter::find_by_id(conn, deck_id)
        .await?
        .ok_or_else(|| deck_not_found(deck_id))?;

    let cards = cards_adapter::find_undrawn(conn, deck_id, CardOrder::Oldest)
        .await?
        .into_iter()
        .map(Card::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Deck {
        id: deck_row.id,
        shuffled: deck_row.shuffled,
        remaining: remaining_from_row(&deck_row)?,
        cards,
    })
}

/// Undrawn cards, most recently inserted first, with the deck row locked.
pub async fn find_available_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
) -> Result<Vec<Card>, DomainError> {
    decks_adapter::lock_by_id(conn, deck_id)
        .await?
        .ok_or_else(|| deck_not_found(deck_id))?;

    let cards = cards_adapter::find_undrawn(conn, deck_id, CardOrder::Newest)
        .await?
        .into_iter()
        .map(Card::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if cards.is_empty() {
        return Err(DomainError::not_found(
            NotFoundKind::AvailableCards,
            format!("deck {deck_id} has no cards left"),
        ));
    }
    Ok(cards)
}

/// Mark `cards` drawn and take them off the deck's remaining count.
pub async fn draw_cards<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    deck_id: Uuid,
    cards: &[Card],
) -> Result<(), DomainError> {
    if cards.is_empty() {
        return Ok(());
    }
    let ids: Vec<i64> = cards.iter().map(|c| c.id).collect();
    let count = i32::try_from(ids.len()).map_err(|_| {
        DomainError::infra(InfraErrorKind::Other("Overflow".into()), "draw too large")
    })?;

    cards_adapter::mark_drawn(conn, deck_id, &ids).await?;
    decks_adapter::decrement_remaining(conn, deck_id, count).await?;
    Ok(())
}

fn deck_not_found(deck_id: Uuid) -> DomainError {
    DomainError::not_found(NotFoundKind::Deck, format!("deck {deck_id} not found"))
}

fn remaining_from_row(row: &decks::Model) -> Result<usize, DomainError> {
    usize::try_from(row.remaining).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("deck {} has negative remaining count", row.id),
        )
    })
}

// Conversions between SeaORM models and domain models

impl TryFrom<cards::Model> for Card {
    type Error = DomainError;

    fn try_from(row: cards::Model) -> Result<Self, Self::Error> {
        let face = from_stored_format(&row.value, &row.suit)
            .filter(|face| face.code() == row.code)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("card {} has unreadable face {:?}", row.id, row.code),
                )
            })?;

        Ok(Card {
            id: row.id,
            face,
            drawn: row.drawn,
        })
    }
}

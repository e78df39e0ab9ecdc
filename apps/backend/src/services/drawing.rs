//! Drawing cards from a deck.

use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use super::parse_deck_id;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::repos::decks::{self, Card};

/// Card drawing service.
#[derive(Debug, Clone, Default)]
pub struct DrawingService;

impl DrawingService {
    pub fn new() -> Self {
        Self
    }

    /// Draw `count` cards, most recently inserted first.
    ///
    /// Fails without touching the deck when fewer than `count` cards remain.
    pub async fn draw<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        deck_id: &str,
        count: i64,
    ) -> Result<Vec<Card>, DomainError> {
        let id = parse_deck_id(deck_id)?;
        if count < 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidDrawAmount,
                format!("draw amount must be at least 1, got {count}"),
            ));
        }

        let mut available = decks::find_available_cards(conn, id).await?;
        let requested = usize::try_from(count).unwrap_or(usize::MAX);
        if available.len() < requested {
            warn!(
                deck_id = %id,
                requested = count,
                available = available.len(),
                "not enough cards to draw"
            );
            return Err(DomainError::validation(
                ValidationKind::InsufficientRemainingCards,
                format!(
                    "deck {id} has {} cards left, {count} requested",
                    available.len()
                ),
            ));
        }

        available.truncate(requested);
        decks::draw_cards(conn, id, &available).await?;

        info!(deck_id = %id, drawn = available.len(), "cards drawn");
        Ok(available)
    }
}

//! Deck listing.

use sea_orm::ConnectionTrait;

use super::parse_deck_id;
use crate::errors::domain::DomainError;
use crate::repos::decks::{self, Deck};

/// Deck listing service.
#[derive(Debug, Clone, Default)]
pub struct ListingService;

impl ListingService {
    pub fn new() -> Self {
        Self
    }

    /// The deck and its undrawn cards, oldest first.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        deck_id: &str,
    ) -> Result<Deck, DomainError> {
        let id = parse_deck_id(deck_id)?;
        decks::find(conn, id).await
    }
}

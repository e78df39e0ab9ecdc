//! DTOs for decks_sea adapter.

use uuid::Uuid;

/// DTO for inserting a deck row.
#[derive(Debug, Clone)]
pub struct DeckCreate {
    pub id: Uuid,
    pub shuffled: bool,
    pub remaining: i32,
}

impl DeckCreate {
    pub fn new(id: Uuid, shuffled: bool, remaining: i32) -> Self {
        Self {
            id,
            shuffled,
            remaining,
        }
    }
}

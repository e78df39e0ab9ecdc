//! DTOs for cards_sea adapter.

use uuid::Uuid;

/// DTO for inserting a card row. The id comes from the identity column.
#[derive(Debug, Clone)]
pub struct CardCreate {
    pub deck_id: Uuid,
    pub code: String,
    pub value: String,
    pub suit: String,
}

/// Read order for undrawn cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrder {
    /// Insertion order
    Oldest,
    /// Most recently inserted first
    Newest,
}

//! Error codes for the croupier HTTP API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear
//! in HTTP responses.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Card code that does not decode
    InvalidCard,
    /// Remaining count inconsistent with the card set
    InvalidDeck,
    /// Deck id is not a UUID
    InvalidDeckId,
    /// Draw amount is not a positive integer
    InvalidDrawAmount,
    /// Deck has fewer undrawn cards than requested
    InsufficientRemainingCards,
    /// General validation error
    ValidationError,
    /// Request body that does not parse
    BadRequest,

    // Resource Not Found
    DeckNotFound,
    /// Deck exists but every card has been drawn
    NoCardsAvailable,
    NotFound,

    // Conflicts
    /// Concurrent draw changed the deck underneath this one
    DrawConflict,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,

    // Database Constraint Violations
    UniqueViolation,
    FkViolation,
    CheckViolation,
    RecordNotFound,

    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCard => "INVALID_CARD",
            Self::InvalidDeck => "INVALID_DECK",
            Self::InvalidDeckId => "INVALID_DECK_ID",
            Self::InvalidDrawAmount => "INVALID_DRAW_AMOUNT",
            Self::InsufficientRemainingCards => "INSUFFICIENT_REMAINING_CARDS",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::NoCardsAvailable => "NO_CARDS_AVAILABLE",
            Self::NotFound => "NOT_FOUND",

            Self::DrawConflict => "DRAW_CONFLICT",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
